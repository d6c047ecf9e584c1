//! Error types produced while scanning.
//!
//! Every error carries the position of the offending input so callers can
//! render a caret diagnostic (see `render_diagnostic` in the crate root).
//! Scanning stops at the first error.

pub mod errors;

#[cfg(test)]
mod tests;
