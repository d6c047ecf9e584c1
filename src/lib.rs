#![allow(clippy::module_inception)]

use std::{fmt::Display, path::Path};

use crate::errors::errors::{ErrorTip, LexError};

pub mod config;
pub mod errors;
pub mod highlight;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A location in the source buffer. `line` and `column` are 1-based and the
/// column counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Half-open `[start, end)` range of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns the line number, the text of that line and the character index of
/// `position` within it.
pub fn get_line_at_position(source: &str, position: &Position) -> (usize, String, usize) {
    let line_number = position.line as usize;
    let line = source
        .split('\n')
        .nth(line_number.saturating_sub(1))
        .unwrap_or("")
        .trim_end_matches('\r');

    (line_number, line.to_string(), position.column.saturating_sub(1) as usize)
}


/// Renders a caret diagnostic for `error`:
///
/// ```text
/// Error: UnterminatedString (String literal is missing its closing `"`)
/// -> sample.js
///    |
/// 20 | let a = "oops;
///    | --------^
/// ```
pub fn render_diagnostic(error: &LexError, file: &Path, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file.as_os_str().to_string_lossy()));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

pub fn display_error(error: &LexError, file: &Path, source: &str) {
    eprint!("{}", render_diagnostic(error, file, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
