//! Change-history mining for Git repositories
//!
//! `churn` reads a repository's numstat log, collapses rename chains so that
//! every historical name of a file resolves to its current one, and derives
//! whitespace-complexity trends over revision ranges.

pub mod areas;
pub mod artifacts;
pub mod commands;
