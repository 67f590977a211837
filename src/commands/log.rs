use crate::areas::repository::Repository;
use crate::artifacts::log::rename_resolver::RenameResolver;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct LogOptions {
    pub folder: String,
    pub since: Option<NaiveDate>,
}

impl Repository {
    /// Writes the numstat log for a folder with every rename chain
    /// collapsed, so each file appears under a single name throughout.
    pub fn resolved_log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        let raw_log = self.numstat_log(&opts.folder, opts.since)?;

        let mut resolver = RenameResolver::new()?;
        resolver.process(raw_log.as_bytes(), &mut *self.writer())?;

        Ok(())
    }
}
