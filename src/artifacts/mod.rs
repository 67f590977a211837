//! History-mining data structures and algorithms
//!
//! - `log`: numstat record tokenization and rename-chain resolution
//! - `complexity`: whitespace complexity scoring and per-revision statistics

pub mod complexity;
pub mod log;
