//! Numstat log processing
//!
//! This module implements the core log-rewriting pipeline:
//!
//! - `numstat`: tolerant tokenizer for tab-separated change records
//! - `rename_resolver`: single-pass collapse of rename chains, so every
//!   historical name of a file is rewritten to its current one
//!
//! ## Algorithm
//!
//! The resolver is a pure fold over the log, read newest commit first. The
//! first time a lineage appears, the destination side of its most recent
//! rename is taken as the canonical name; every older name discovered later
//! in the scan is redirected to that same destination, including names that
//! were themselves renamed more than once.

pub mod numstat;
pub mod rename_resolver;
