/// Spaces per logical indentation unit; a tab counts as one full unit.
const SPACES_PER_INDENT: f64 = 4.0;

/// Logical indentation depth of one line, counted over its leading
/// whitespace only. Mixed tabs and spaces are both honored.
pub fn complexity_of(line: &str) -> f64 {
    let mut depth = 0.0;
    for character in line.chars() {
        match character {
            '\t' => depth += 1.0,
            ' ' => depth += 1.0 / SPACES_PER_INDENT,
            _ => break,
        }
    }

    depth
}

/// Scores every non-blank line of a source snapshot.
pub fn calculate_complexity(source: &str) -> Vec<f64> {
    source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(complexity_of)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unindented_lines_score_zero() {
        assert_eq!(complexity_of("fn main() {"), 0.0);
    }

    #[test]
    fn a_tab_counts_as_one_indent_unit() {
        assert_eq!(complexity_of("\t\treturn;"), 2.0);
    }

    #[test]
    fn four_spaces_count_as_one_indent_unit() {
        assert_eq!(complexity_of("    return;"), 1.0);
        assert_eq!(complexity_of("  return;"), 0.5);
    }

    #[test]
    fn mixed_leading_whitespace_accumulates() {
        assert_eq!(complexity_of("\t  return;"), 1.5);
    }

    #[test]
    fn interior_whitespace_is_ignored() {
        assert_eq!(complexity_of("let x =\t1;"), 0.0);
    }

    #[test]
    fn blank_lines_are_excluded_from_the_measurements() {
        let source = "fn main() {\n\n    body();\n   \t\n}\n";

        assert_eq!(calculate_complexity(source), vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn empty_source_yields_no_measurements() {
        assert!(calculate_complexity("").is_empty());
    }
}
