pub const SEPARATOR: char = '\t';

/// Index of the path-spec column in a numstat record
/// (`<additions>\t<deletions>\t<path-spec>`).
const PATH_SPEC_COLUMN: usize = 2;

/// A tokenized numstat record.
///
/// Columns are kept verbatim; only the path-spec column is ever rewritten.
/// The additions/deletions columns are deliberately not validated as
/// numeric, so commit headers and separator lines the log interleaves with
/// the records are tolerated upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumstatRecord<'l> {
    columns: Vec<&'l str>,
}

impl<'l> NumstatRecord<'l> {
    /// Tokenizes one line body (terminator already stripped).
    ///
    /// Returns `None` when the line has no path-spec column; that is the
    /// named passthrough condition for headers, blank lines and other
    /// non-numstat rows, which must be copied through untouched.
    pub fn tokenize(body: &'l str) -> Option<Self> {
        let columns: Vec<&'l str> = body.split(SEPARATOR).collect();

        (columns.len() > PATH_SPEC_COLUMN).then_some(NumstatRecord { columns })
    }

    pub fn path_spec(&self) -> &'l str {
        self.columns[PATH_SPEC_COLUMN]
    }

    /// Rejoins the record with the path-spec column replaced, terminated
    /// with a single newline.
    pub fn render_with_path_spec(&self, path_spec: &str) -> String {
        let mut line = String::new();
        for (index, column) in self.columns.iter().enumerate() {
            if index > 0 {
                line.push(SEPARATOR);
            }
            if index == PATH_SPEC_COLUMN {
                line.push_str(path_spec);
            } else {
                line.push_str(column);
            }
        }
        line.push('\n');

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_a_three_column_record() {
        let record = NumstatRecord::tokenize("3\t14\tsrc/main.rs").expect("record");

        assert_eq!(record.path_spec(), "src/main.rs");
    }

    #[test]
    fn tokenize_rejects_lines_without_a_path_column() {
        assert_eq!(NumstatRecord::tokenize(""), None);
        assert_eq!(NumstatRecord::tokenize("[abc123] author 2024-01-01"), None);
        assert_eq!(NumstatRecord::tokenize("3\t14"), None);
    }

    #[test]
    fn tokenize_accepts_non_numeric_count_columns() {
        let record = NumstatRecord::tokenize("-\t-\tassets/logo.png").expect("record");

        assert_eq!(record.path_spec(), "assets/logo.png");
    }

    #[test]
    fn render_replaces_only_the_path_column() {
        let record = NumstatRecord::tokenize("3\t14\tsrc/old.rs").expect("record");

        assert_eq!(
            record.render_with_path_spec("src/new.rs"),
            "3\t14\tsrc/new.rs\n"
        );
    }

    #[test]
    fn render_preserves_trailing_columns() {
        let record = NumstatRecord::tokenize("3\t14\tsrc/old.rs\textra").expect("record");

        assert_eq!(
            record.render_with_path_spec("src/new.rs"),
            "3\t14\tsrc/new.rs\textra\n"
        );
    }
}
