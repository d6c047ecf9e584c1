//! Lexical analysis.
//!
//! The scanner turns source text into a stream of tokens. It handles:
//!
//! - Line and block comments, which are kept as tokens
//! - Quote and template string literals (escapes are kept verbatim)
//! - Numeric literals with radix prefixes, separators and exponents
//! - Keywords, identifiers and longest-match punctuators
//! - Byte offsets plus 1-based line/column tracking for every token

pub mod lexer;
pub mod tokens;
