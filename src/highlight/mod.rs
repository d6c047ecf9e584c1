//! Terminal syntax highlighting on top of the scanner.
//!
//! - `highlight` maps tokens (and the escapes inside string literals) to styles
//! - `theme` holds the One Dark palette and its ANSI escape sequences
//! - `render` writes the source back out with colour escapes

pub mod highlight;
pub mod render;
pub mod theme;

#[cfg(test)]
mod tests;
