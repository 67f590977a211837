use anyhow::Context;
use chrono::NaiveDate;
use std::cell::{RefCell, RefMut};
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

/// A Git repository mined through the system `git` binary.
///
/// Owns the output writer so that command implementations can render to
/// stdout in production and to a buffer in tests.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .with_context(|| format!("repository path does not exist: {path}"))?;

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Raw numstat log for a folder, newest commit first.
    ///
    /// Commit header lines carry no tabs, so downstream consumers that only
    /// understand tab-separated records pass them through untouched.
    pub fn numstat_log(&self, folder: &str, since: Option<NaiveDate>) -> anyhow::Result<String> {
        let mut args = vec![
            "log".to_string(),
            "--follow".to_string(),
            "--numstat".to_string(),
            "--pretty=format:[%h] %an %ad %s".to_string(),
            "--date=short".to_string(),
        ];
        if let Some(since) = since {
            args.push(format!("--after={}", since.format("%Y-%m-%d")));
        }
        args.push("--".to_string());
        args.push(folder.to_string());

        self.run_git(&args)
    }

    /// Revisions in `start..end` that touched `file`, newest first.
    pub fn revisions_between(
        &self,
        start: &str,
        end: &str,
        file: &str,
    ) -> anyhow::Result<Vec<String>> {
        let range = format!("{start}..{end}");
        let output = self.run_git(["log", "--follow", "--oneline", &range, "--", file])?;

        Ok(output
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .map(str::to_string)
            .collect())
    }

    /// Content of `file` as of `revision`.
    pub fn file_at_revision(&self, revision: &str, file: &str) -> anyhow::Result<String> {
        self.run_git(["show", &format!("{revision}:{file}")])
    }

    fn run_git<I, S>(&self, args: I) -> anyhow::Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()
            .context("failed to launch git")?;

        if !output.status.success() {
            anyhow::bail!(
                "git exited with {} in {:?}: {}",
                output.status,
                self.path,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        String::from_utf8(output.stdout).context("git produced non-UTF-8 output")
    }
}
