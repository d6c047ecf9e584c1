use crate::lexer::{
    lexer::Scanner,
    tokens::{Keyword, Punctuator, Quote, Token, TokenKind},
};

/// Highlight category of a piece of source text.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Style {
    Default,
    Comment,
    Keyword,
    Operator,
    Type,
    Literal,
    String,
    Escape,
    Function,
}

impl Style {
    pub const ALL: [Style; 9] = [
        Style::Default,
        Style::Comment,
        Style::Keyword,
        Style::Operator,
        Style::Type,
        Style::Literal,
        Style::String,
        Style::Escape,
        Style::Function,
    ];
}

const LITERAL_NAMES: [&str; 3] = ["true", "false", "null"];

/// Words highlighted as keywords although the scanner reports them as
/// identifiers.
const KEYWORD_NAMES: [&str; 19] = [
    "this", "new", "var", "const", "in", "of", "do", "switch", "case", "default", "try", "catch",
    "finally", "throw", "class", "extends", "static", "import", "export",
];

/// Characters that form a two-character escape after `\`.
const SIMPLE_ESCAPES: &[u8] = b"btnvfr\"$'\\`0\n";

/// Assigns a style to every token, in order.
pub fn classify(tokens: &[Token]) -> Vec<Style> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| match token.kind {
            TokenKind::LineComment | TokenKind::BlockComment => Style::Comment,
            TokenKind::StringLiteral(_) => Style::String,
            TokenKind::NumberLiteral(_) => Style::Literal,
            TokenKind::Keyword(_) => Style::Keyword,
            TokenKind::Punctuator(_) => Style::Operator,
            TokenKind::Identifier => classify_identifier(tokens, index),
            TokenKind::EndOfInput => Style::Default,
        })
        .collect()
}

fn classify_identifier(tokens: &[Token], index: usize) -> Style {
    let name = tokens[index].lexeme.as_str();
    if LITERAL_NAMES.contains(&name) {
        return Style::Literal;
    }
    if KEYWORD_NAMES.contains(&name) {
        return Style::Keyword;
    }

    let previous = tokens[..index].iter().rev().find(|t| !t.kind.is_comment());
    let next = tokens[index + 1..].iter().find(|t| !t.kind.is_comment());

    let declared = previous.is_some_and(|t| t.is_keyword(Keyword::Function));
    let called = next.is_some_and(|t| t.is_punctuator(Punctuator::OpenParen));

    if declared || called {
        Style::Function
    } else {
        Style::Default
    }
}

/// Splits a string literal's lexeme into styled segments: recognised escape
/// sequences, `${ … }` substitutions of template literals, and plain text.
/// The segments concatenate back to `lexeme`.
pub fn string_segments(lexeme: &str, quote: Quote) -> Vec<(Style, &str)> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut index = 0;

    while index < lexeme.len() {
        let rest = &lexeme[index..];

        let special = if rest.starts_with('\\') {
            escape_length(rest).map(|length| vec![(Style::Escape, &rest[..length])])
        } else if quote == Quote::Template && rest.starts_with("${") {
            // The closing backtick never belongs to a substitution.
            Some(substitution_segments(rest.strip_suffix('`').unwrap_or(rest)))
        } else {
            None
        };

        match special {
            Some(pieces) => {
                push_segment(&mut segments, Style::String, &lexeme[plain_start..index]);
                index += pieces.iter().map(|(_, text)| text.len()).sum::<usize>();
                segments.extend(pieces);
                plain_start = index;
            }
            None => index += rest.chars().next().map_or(1, char::len_utf8),
        }
    }

    push_segment(&mut segments, Style::String, &lexeme[plain_start..]);
    segments
}

fn push_segment<'a>(segments: &mut Vec<(Style, &'a str)>, style: Style, text: &'a str) {
    if !text.is_empty() {
        segments.push((style, text));
    }
}

/// Length of the escape sequence `text` starts with: a backslash followed by
/// one of [`SIMPLE_ESCAPES`], `xHH`, `uHHHH` or `u{H…}`. Anything else is
/// plain string text.
fn escape_length(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let hex_run = |from: usize| {
        bytes
            .iter()
            .skip(from)
            .take_while(|b| b.is_ascii_hexdigit())
            .count()
    };

    match *bytes.get(1)? {
        b'x' if hex_run(2) >= 2 => Some(4),
        b'u' if bytes.get(2) == Some(&b'{') => {
            let digits = hex_run(3);
            (digits > 0 && bytes.get(3 + digits) == Some(&b'}')).then_some(4 + digits)
        }
        b'u' if hex_run(2) >= 4 => Some(6),
        b if SIMPLE_ESCAPES.contains(&b) => Some(2),
        _ => None,
    }
}

/// Styles the `${ … }` substitution at the start of `text` as code. It ends at
/// the `}` closing it, or with `text` when there is none. Code that fails to
/// scan is left in the default style.
fn substitution_segments(text: &str) -> Vec<(Style, &str)> {
    let mut segments = vec![(Style::Default, &text[..2])];
    let body = &text[2..];

    let mut scanner = Scanner::new(body);
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut closing = None;

    while let Ok(token) = scanner.next_token() {
        if token.kind == TokenKind::EndOfInput {
            break;
        }
        if token.is_punctuator(Punctuator::OpenCurly) {
            depth += 1;
        } else if token.is_punctuator(Punctuator::CloseCurly) {
            if depth == 0 {
                closing = Some(token.start_offset());
                break;
            }
            depth -= 1;
        }
        tokens.push(token);
    }

    let end = closing.unwrap_or(body.len());
    let mut cursor = 0;
    for (token, style) in tokens.iter().zip(classify(&tokens)) {
        push_segment(&mut segments, Style::Default, &body[cursor..token.start_offset()]);
        let text = &body[token.start_offset()..token.end_offset()];
        match token.kind {
            TokenKind::StringLiteral(quote) => segments.extend(string_segments(text, quote)),
            _ => push_segment(&mut segments, style, text),
        }
        cursor = token.end_offset();
    }
    push_segment(&mut segments, Style::Default, &body[cursor..end]);

    if let Some(offset) = closing {
        segments.push((Style::Default, &body[offset..offset + 1]));
    }

    segments
}
