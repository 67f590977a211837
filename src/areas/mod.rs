//! Gateways to the mined repository
//!
//! - `repository`: shells out to the system `git` for log, rev-list and
//!   historic-content queries, and owns the output writer

pub mod repository;
