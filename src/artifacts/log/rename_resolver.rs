use crate::artifacts::log::numstat::NumstatRecord;
use anyhow::Context;
use regex::Regex;
use std::collections::HashMap;
use std::io::{BufRead, Write};

/// A bracketed rename segment inside a path-spec, e.g.
/// `src/{modules => views}/file.py`. Either fragment may be empty: git
/// renders a vanished path level as `src/{modules => }/file.py`.
const RENAME_SEGMENT_REGEX: &str = r"\{.* => .*\}";

const RENAME_ARROW: &str = " => ";

/// Single-pass rename-chain resolver over a numstat log.
///
/// The log must be presented newest commit first. Under that order, the
/// destination side of the first rename seen for a lineage is its current
/// name; the resolver rewrites every older name of the lineage, discovered
/// later in the scan, to that same name. State lives for exactly one scan:
/// create a fresh resolver per log.
pub struct RenameResolver {
    rename_pattern: Regex,
    renames: HashMap<String, String>,
}

impl RenameResolver {
    pub fn new() -> anyhow::Result<Self> {
        Ok(RenameResolver {
            rename_pattern: Regex::new(RENAME_SEGMENT_REGEX)
                .with_context(|| format!("invalid rename segment regex: {RENAME_SEGMENT_REGEX}"))?,
            renames: HashMap::new(),
        })
    }

    /// Folds the whole log through [`Self::resolve_line`], emitting exactly
    /// one output line per input line, in order.
    pub fn process(
        &mut self,
        mut reader: impl BufRead,
        writer: &mut impl Write,
    ) -> anyhow::Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line).context("failed to read log line")? == 0 {
                break;
            }
            writer
                .write_all(self.resolve_line(&line).as_bytes())
                .context("failed to write resolved log line")?;
        }

        Ok(())
    }

    /// Resolves one record.
    ///
    /// Lines without a path-spec column pass through byte-for-byte,
    /// terminator included. Rewritten records are rejoined with tabs and
    /// terminated with a single newline.
    pub fn resolve_line(&mut self, line: &str) -> String {
        let body = line.trim_end_matches('\n').trim_end_matches('\r');
        let Some(record) = NumstatRecord::tokenize(body) else {
            return line.to_owned();
        };
        let path_spec = record.path_spec();

        if let Some((left, right)) = self.split_rename_segment(path_spec) {
            let canonical = match self.renames.remove(&right) {
                // `right` was itself renamed by a more recent commit:
                // redirect the even older `left` to the final name and
                // retire `right`, which no longer appears as a bare path.
                Some(canonical) => {
                    self.renames.insert(left, canonical.clone());
                    canonical
                }
                // First rename seen for this lineage: `right` is the
                // current name.
                None => {
                    self.renames.insert(left, right.clone());
                    right
                }
            };
            record.render_with_path_spec(&canonical)
        } else if let Some(canonical) = self.renames.get(path_spec) {
            record.render_with_path_spec(canonical)
        } else {
            line.to_owned()
        }
    }

    /// Expands a rename segment into the full old and new paths, both
    /// keeping the literal context around the braces.
    fn split_rename_segment(&self, path_spec: &str) -> Option<(String, String)> {
        let segment = self.rename_pattern.find(path_spec)?;
        let inner = &path_spec[segment.start() + 1..segment.end() - 1];
        let (old_fragment, new_fragment) = inner.split_once(RENAME_ARROW)?;

        let prefix = &path_spec[..segment.start()];
        let suffix = &path_spec[segment.end()..];

        Some((
            splice(prefix, old_fragment, suffix),
            splice(prefix, new_fragment, suffix),
        ))
    }
}

/// Rebuilds a full path around a rename fragment. An empty fragment means a
/// path level vanished (`src/{modules => }/file.py` names `src/file.py`),
/// so the doubled separator is dropped.
fn splice(prefix: &str, fragment: &str, suffix: &str) -> String {
    if fragment.is_empty() && prefix.ends_with('/') && suffix.starts_with('/') {
        return format!("{}{}", prefix, &suffix[1..]);
    }

    format!("{prefix}{fragment}{suffix}")
}
