//! Unit tests for error handling.

use crate::errors::errors::{ErrorTip, LexError, LexErrorKind};
use crate::Position;

fn at(offset: usize, line: u32, column: u32) -> Position {
    Position { offset, line, column }
}

#[test]
fn test_error_creation() {
    let error = LexError::new(
        LexErrorKind::UnexpectedCharacter {
            character: "@".to_string(),
        },
        at(10, 1, 11),
    );

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(
        error.kind(),
        &LexErrorKind::UnexpectedCharacter {
            character: "@".to_string()
        }
    );
}

#[test]
fn test_error_position() {
    let error = LexError::new(LexErrorKind::UnterminatedComment, at(42, 3, 7));

    assert_eq!(error.get_position().offset, 42);
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_error_names() {
    let cases = [
        (LexErrorKind::UnterminatedComment, "UnterminatedComment"),
        (LexErrorKind::UnterminatedString { quote: '"' }, "UnterminatedString"),
        (LexErrorKind::InvalidNumericSeparator, "InvalidNumericSeparator"),
        (
            LexErrorKind::UnexpectedCharacter {
                character: "#".to_string(),
            },
            "UnexpectedCharacter",
        ),
    ];

    for (kind, name) in cases {
        assert_eq!(LexError::new(kind, Position::start()).get_error_name(), name);
    }
}

#[test]
fn test_error_display() {
    let error = LexError::new(LexErrorKind::InvalidNumericSeparator, at(3, 2, 4));
    assert_eq!(error.to_string(), "invalid numeric separator at 2:4");

    let error = LexError::new(LexErrorKind::UnterminatedString { quote: '\'' }, at(0, 1, 1));
    assert_eq!(error.to_string(), "unterminated string literal (opened with '\\'') at 1:1");
}

#[test]
fn test_error_tip_none() {
    let error = LexError::new(
        LexErrorKind::UnexpectedCharacter {
            character: "@".to_string(),
        },
        Position::start(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = LexError::new(LexErrorKind::UnterminatedString { quote: '`' }, Position::start());

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "String literal is missing its closing ```"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
