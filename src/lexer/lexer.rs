use std::iter::FusedIterator;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{LexError, LexErrorKind},
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::tokens::{
    Number, Punctuator, Quote, Radix, Token, TokenKind, PUNCTUATORS, RESERVED_LOOKUP,
};

/// Consumes the text matched by a dispatch pattern. `Ok(None)` means the text
/// was skipped and scanning continues at the new cursor.
type PatternHandler = fn(&mut Scanner<'_>, &str) -> Result<Option<Token>, LexError>;

struct Pattern {
    regex: Regex,
    handler: PatternHandler,
}

impl Pattern {
    fn new(pattern: &str, handler: PatternHandler) -> Pattern {
        Pattern {
            regex: Regex::new(pattern).expect("dispatch patterns are valid regexes"),
            handler,
        }
    }
}

lazy_static! {
    /// Dispatch table, tried in order at every cursor position. All patterns
    /// are anchored so a match always starts at the cursor. Punctuators are
    /// the fallback once none of these match.
    static ref PATTERNS: Vec<Pattern> = vec![
        Pattern::new(r"^[ \t\r\n]+", skip_handler),
        Pattern::new(r"^//[^\n]*", line_comment_handler),
        Pattern::new(r"^/\*", block_comment_handler),
        Pattern::new(r#"^["'`]"#, string_handler),
        Pattern::new(r"^(?:[0-9]|\.[0-9])", number_handler),
        Pattern::new(r"^[A-Za-z_$][A-Za-z0-9_$]*", symbol_handler),
    ];
}

/// Pull-based scanner over an immutable source buffer.
///
/// The only state carried between tokens is the cursor. Each call to
/// [`Scanner::next_token`] either advances it past exactly one token (plus any
/// leading whitespace) or fails without producing anything.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    source: &'src str,
    cursor: Position,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Scanner<'src> {
        Scanner {
            source,
            cursor: Position::start(),
        }
    }

    pub fn position(&self) -> Position {
        self.cursor
    }

    pub fn at_eof(&self) -> bool {
        self.cursor.offset >= self.source.len()
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.cursor.offset..]
    }

    /// Moves the cursor over `text`, which must be the text at the cursor.
    fn advance(&mut self, text: &str) {
        for c in text.chars() {
            self.cursor.offset += c.len_utf8();
            if c == '\n' {
                self.cursor.line += 1;
                self.cursor.column = 1;
            } else {
                self.cursor.column += 1;
            }
        }
    }

    /// Position `bytes` past the cursor on the same line. Only valid for ASCII
    /// text without newlines.
    fn position_ahead(&self, bytes: usize) -> Position {
        Position {
            offset: self.cursor.offset + bytes,
            line: self.cursor.line,
            column: self.cursor.column + bytes as u32,
        }
    }

    fn emit(&mut self, kind: TokenKind, lexeme: &str) -> Token {
        let start = self.cursor;
        self.advance(lexeme);
        MK_TOKEN!(kind, String::from(lexeme), MK_SPAN!(start, self.cursor))
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.cursor)
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            if self.at_eof() {
                return Ok(MK_TOKEN!(
                    TokenKind::EndOfInput,
                    String::new(),
                    MK_SPAN!(self.cursor, self.cursor)
                ));
            }

            let remaining = self.remainder();
            let dispatched = PATTERNS
                .iter()
                .find_map(|pattern| pattern.regex.find(remaining).map(|m| (pattern.handler, m.as_str())));

            match dispatched {
                Some((handler, matched)) => {
                    if let Some(token) = handler(self, matched)? {
                        return Ok(token);
                    }
                }
                None => return self.punctuator(),
            }
        }
    }

    fn punctuator(&mut self) -> Result<Token, LexError> {
        let remaining = self.remainder();

        let found = PUNCTUATORS.iter().find(|punctuator| {
            let text = punctuator.as_str();
            if !remaining.starts_with(text) {
                return false;
            }
            // `a?.5:1` is a conditional, not an optional chain.
            !(**punctuator == Punctuator::OptionalChain
                && remaining.as_bytes().get(2).is_some_and(u8::is_ascii_digit))
        });

        match found {
            Some(punctuator) => Ok(self.emit(TokenKind::Punctuator(*punctuator), punctuator.as_str())),
            None => {
                let character = remaining.chars().next().map(String::from).unwrap_or_default();
                Err(self.error(LexErrorKind::UnexpectedCharacter { character }))
            }
        }
    }

    /// Lazy token sequence ending with exactly one `EndOfInput` token, or with
    /// the first error.
    pub fn tokenize(self) -> Tokens<'src> {
        Tokens {
            scanner: self,
            finished: false,
        }
    }
}

pub struct Tokens<'src> {
    scanner: Scanner<'src>,
    finished: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.scanner.next_token();
        match &result {
            Ok(token) if token.kind != TokenKind::EndOfInput => {}
            _ => self.finished = true,
        }

        Some(result)
    }
}

impl FusedIterator for Tokens<'_> {}

fn skip_handler(scanner: &mut Scanner<'_>, matched: &str) -> Result<Option<Token>, LexError> {
    scanner.advance(matched);
    Ok(None)
}

fn line_comment_handler(scanner: &mut Scanner<'_>, matched: &str) -> Result<Option<Token>, LexError> {
    Ok(Some(scanner.emit(TokenKind::LineComment, matched)))
}

fn block_comment_handler(scanner: &mut Scanner<'_>, _matched: &str) -> Result<Option<Token>, LexError> {
    let remaining = scanner.remainder();

    match remaining[2..].find("*/") {
        Some(index) => Ok(Some(scanner.emit(TokenKind::BlockComment, &remaining[..index + 4]))),
        None => Err(scanner.error(LexErrorKind::UnterminatedComment)),
    }
}

fn string_handler(scanner: &mut Scanner<'_>, matched: &str) -> Result<Option<Token>, LexError> {
    let remaining = scanner.remainder();
    let quote = matched.chars().next().and_then(Quote::from_char).unwrap_or(Quote::Double);
    let delimiter = quote.as_char();

    let mut chars = remaining.char_indices().skip(1);
    while let Some((index, c)) = chars.next() {
        match c {
            '\\' => {
                // The escaped character is kept verbatim, whatever it is.
                if chars.next().is_none() {
                    break;
                }
            }
            '\n' if quote != Quote::Template => break,
            c if c == delimiter => {
                let lexeme = &remaining[..index + c.len_utf8()];
                return Ok(Some(scanner.emit(TokenKind::StringLiteral(quote), lexeme)));
            }
            _ => {}
        }
    }

    Err(scanner.error(LexErrorKind::UnterminatedString { quote: delimiter }))
}

fn number_handler(scanner: &mut Scanner<'_>, _matched: &str) -> Result<Option<Token>, LexError> {
    let remaining = scanner.remainder();

    match scan_number(remaining.as_bytes()) {
        Ok((length, number)) => Ok(Some(scanner.emit(TokenKind::NumberLiteral(number), &remaining[..length]))),
        Err((offset, kind)) => Err(LexError::new(kind, scanner.position_ahead(offset))),
    }
}

fn symbol_handler(scanner: &mut Scanner<'_>, matched: &str) -> Result<Option<Token>, LexError> {
    if is_separated_digit_run(matched) {
        return Err(scanner.error(LexErrorKind::InvalidNumericSeparator));
    }

    let kind = match RESERVED_LOOKUP.get(matched) {
        Some(keyword) => TokenKind::Keyword(*keyword),
        None => TokenKind::Identifier,
    };

    Ok(Some(scanner.emit(kind, matched)))
}

/// `_1`, `_1_000`: a digit run with a leading separator rather than a name.
fn is_separated_digit_run(word: &str) -> bool {
    word.starts_with('_')
        && word.bytes().any(|b| b.is_ascii_digit())
        && word.bytes().all(|b| b == b'_' || b.is_ascii_digit())
}

type NumberScan = Result<(usize, Number), (usize, LexErrorKind)>;

/// Scans a numeric literal at the start of `bytes`, returning its length and
/// attributes, or the offset and kind of the first error.
fn scan_number(bytes: &[u8]) -> NumberScan {
    let radix = match (bytes.first(), bytes.get(1)) {
        (Some(b'0'), Some(b'x' | b'X')) => Some(Radix::Hexadecimal),
        (Some(b'0'), Some(b'b' | b'B')) => Some(Radix::Binary),
        (Some(b'0'), Some(b'o' | b'O')) => Some(Radix::Octal),
        _ => None,
    };

    // A prefix with no digit of its radix after it is just the decimal `0`.
    if let Some(radix) = radix {
        let end = scan_digits(bytes, 2, radix)?;
        if end > 2 {
            return Ok(with_big_int_suffix(bytes, end, radix));
        }
    }

    let mut pos = scan_digits(bytes, 0, Radix::Decimal)?;
    let mut is_float = false;

    if bytes.get(pos) == Some(&b'.') {
        is_float = true;
        pos = scan_digits(bytes, pos + 1, Radix::Decimal)?;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut digits_at = pos + 1;
        if matches!(bytes.get(digits_at), Some(b'+' | b'-')) {
            digits_at += 1;
        }

        match bytes.get(digits_at) {
            Some(b) if b.is_ascii_digit() => {
                is_float = true;
                pos = scan_digits(bytes, digits_at, Radix::Decimal)?;
            }
            Some(b'_') => return Err((digits_at, LexErrorKind::InvalidNumericSeparator)),
            // Not an exponent: the `e` starts the next token.
            _ => {}
        }
    }

    if is_float {
        return Ok((
            pos,
            Number {
                radix: Radix::Decimal,
                is_float,
                is_big_int: false,
            },
        ));
    }

    Ok(with_big_int_suffix(bytes, pos, Radix::Decimal))
}

fn with_big_int_suffix(bytes: &[u8], end: usize, radix: Radix) -> (usize, Number) {
    let is_big_int = bytes.get(end) == Some(&b'n');
    let length = if is_big_int { end + 1 } else { end };

    (
        length,
        Number {
            radix,
            is_float: false,
            is_big_int,
        },
    )
}

/// Consumes digits of `radix` starting at `pos`, allowing `_` only between two
/// digits. Returns the offset just past the run.
fn scan_digits(bytes: &[u8], mut pos: usize, radix: Radix) -> Result<usize, (usize, LexErrorKind)> {
    let start = pos;

    while let Some(&byte) = bytes.get(pos) {
        if radix.is_digit(byte) {
            pos += 1;
        } else if byte == b'_' {
            let after_digit = pos > start;
            let before_digit = bytes.get(pos + 1).is_some_and(|b| radix.is_digit(*b));
            if !after_digit || !before_digit {
                return Err((pos, LexErrorKind::InvalidNumericSeparator));
            }
            pos += 1;
        } else {
            break;
        }
    }

    Ok(pos)
}

/// Scans all of `source`, failing on the first error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(source).tokenize().collect()
}
