//! Command implementations
//!
//! Commands that mine a repository are implemented as methods on
//! [`crate::areas::repository::Repository`] and render through its writer.
//! `resolve` stands alone: it is a pure filter over any numstat stream and
//! needs no repository at all.

pub mod log;
pub mod resolve;
pub mod trend;
