use crate::artifacts::log::rename_resolver::RenameResolver;
use std::io::{BufRead, Write};

/// Runs the rename resolver as a pure filter: one output line per input
/// line, in order, with state scoped to this single invocation.
pub fn run(reader: impl BufRead, writer: &mut impl Write) -> anyhow::Result<()> {
    let mut resolver = RenameResolver::new()?;

    resolver.process(reader, writer)
}
