use crate::areas::repository::Repository;
use crate::artifacts::complexity::stats::ComplexityStats;
use crate::artifacts::complexity::whitespace::calculate_complexity;
use anyhow::Context;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct TrendOptions {
    pub start: String,
    pub end: String,
    pub file: String,
}

impl Repository {
    /// Writes the whitespace-complexity trend of one file over a revision
    /// range as CSV, one row per revision, newest first.
    pub fn complexity_trend(&self, opts: &TrendOptions) -> anyhow::Result<()> {
        let revisions = self.revisions_between(&opts.start, &opts.end, &opts.file)?;

        writeln!(self.writer(), "{}", ComplexityStats::CSV_HEADER)?;
        for revision in revisions {
            let snapshot = self.file_at_revision(&revision, &opts.file).with_context(|| {
                format!("failed to fetch {} as of revision {revision}", opts.file)
            })?;
            let measurements = calculate_complexity(&snapshot);
            let stats = ComplexityStats::from_measurements(revision, &measurements);

            writeln!(self.writer(), "{}", stats.as_csv_row())?;
        }

        Ok(())
    }
}
