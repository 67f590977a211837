//! Whitespace complexity
//!
//! - `whitespace`: scores a line's logical indentation depth
//! - `stats`: per-revision descriptive statistics and CSV rendering
//!
//! Indentation is a cheap, language-agnostic proxy for complexity: deeply
//! nested code indents further, and a rising trend across revisions signals
//! a file accumulating structure.

pub mod stats;
pub mod whitespace;
