use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A scanning failure together with the position of the offending input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at {position}")]
pub struct LexError {
    internal_error: LexErrorKind,
    position: Position,
}

impl LexError {
    pub fn new(error_kind: LexErrorKind, position: Position) -> Self {
        LexError {
            internal_error: error_kind,
            position,
        }
    }

    pub fn kind(&self) -> &LexErrorKind {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            LexErrorKind::UnterminatedComment => "UnterminatedComment",
            LexErrorKind::UnterminatedString { .. } => "UnterminatedString",
            LexErrorKind::InvalidNumericSeparator => "InvalidNumericSeparator",
            LexErrorKind::UnexpectedCharacter { .. } => "UnexpectedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            LexErrorKind::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Block comment is missing its closing `*/`"))
            }
            LexErrorKind::UnterminatedString { quote } => ErrorTip::Suggestion(format!(
                "String literal is missing its closing `{}`",
                quote
            )),
            LexErrorKind::InvalidNumericSeparator => ErrorTip::Suggestion(String::from(
                "`_` may only appear between two digits",
            )),
            LexErrorKind::UnexpectedCharacter { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("unterminated string literal (opened with {quote:?})")]
    UnterminatedString { quote: char },
    #[error("invalid numeric separator")]
    InvalidNumericSeparator,
    #[error("unexpected character: {character:?}")]
    UnexpectedCharacter { character: String },
}
