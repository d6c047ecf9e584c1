use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        for keyword in Keyword::ALL {
            map.insert(keyword.as_str(), keyword);
        }
        map
    };

    /// Every punctuator, longest spelling first, so the first prefix match is
    /// also the longest one.
    pub static ref PUNCTUATORS: Vec<Punctuator> = {
        let mut table = Punctuator::ALL.to_vec();
        table.sort_by(|a, b| b.as_str().len().cmp(&a.as_str().len()));
        table
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Function,
    Return,
    If,
    Else,
    For,
    While,
    Continue,
    Break,
    Let,
}

impl Keyword {
    pub const ALL: [Keyword; 9] = [
        Keyword::Function,
        Keyword::Return,
        Keyword::If,
        Keyword::Else,
        Keyword::For,
        Keyword::While,
        Keyword::Continue,
        Keyword::Break,
        Keyword::Let,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Function => "function",
            Keyword::Return => "return",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::While => "while",
            Keyword::Continue => "continue",
            Keyword::Break => "break",
            Keyword::Let => "let",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Punctuator {
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment,      // =
    Equals,          // ==
    StrictEquals,    // ===
    Not,             // !
    NotEquals,       // !=
    StrictNotEquals, // !==

    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    ShiftLeft,
    ShiftRight,
    UnsignedShiftRight,

    Or,
    And,
    Nullish,
    BitOr,
    BitAnd,
    BitXor,
    Tilde,

    Dot,
    Ellipsis,
    OptionalChain, // ?.
    Semicolon,
    Colon,
    Question,
    Comma,
    Arrow, // =>

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,
    StarStarEquals,
    ShiftLeftEquals,
    ShiftRightEquals,
    UnsignedShiftRightEquals,
    BitAndEquals,
    BitOrEquals,
    BitXorEquals,
    AndEquals,
    OrEquals,
    NullishEquals,

    Plus,
    Dash,
    Star,
    StarStar,
    Slash,
    Percent,
}

impl Punctuator {
    pub const ALL: [Punctuator; 57] = [
        Punctuator::OpenBracket,
        Punctuator::CloseBracket,
        Punctuator::OpenCurly,
        Punctuator::CloseCurly,
        Punctuator::OpenParen,
        Punctuator::CloseParen,
        Punctuator::Assignment,
        Punctuator::Equals,
        Punctuator::StrictEquals,
        Punctuator::Not,
        Punctuator::NotEquals,
        Punctuator::StrictNotEquals,
        Punctuator::Less,
        Punctuator::LessEquals,
        Punctuator::Greater,
        Punctuator::GreaterEquals,
        Punctuator::ShiftLeft,
        Punctuator::ShiftRight,
        Punctuator::UnsignedShiftRight,
        Punctuator::Or,
        Punctuator::And,
        Punctuator::Nullish,
        Punctuator::BitOr,
        Punctuator::BitAnd,
        Punctuator::BitXor,
        Punctuator::Tilde,
        Punctuator::Dot,
        Punctuator::Ellipsis,
        Punctuator::OptionalChain,
        Punctuator::Semicolon,
        Punctuator::Colon,
        Punctuator::Question,
        Punctuator::Comma,
        Punctuator::Arrow,
        Punctuator::PlusPlus,
        Punctuator::MinusMinus,
        Punctuator::PlusEquals,
        Punctuator::MinusEquals,
        Punctuator::StarEquals,
        Punctuator::SlashEquals,
        Punctuator::PercentEquals,
        Punctuator::StarStarEquals,
        Punctuator::ShiftLeftEquals,
        Punctuator::ShiftRightEquals,
        Punctuator::UnsignedShiftRightEquals,
        Punctuator::BitAndEquals,
        Punctuator::BitOrEquals,
        Punctuator::BitXorEquals,
        Punctuator::AndEquals,
        Punctuator::OrEquals,
        Punctuator::NullishEquals,
        Punctuator::Plus,
        Punctuator::Dash,
        Punctuator::Star,
        Punctuator::StarStar,
        Punctuator::Slash,
        Punctuator::Percent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Punctuator::OpenBracket => "[",
            Punctuator::CloseBracket => "]",
            Punctuator::OpenCurly => "{",
            Punctuator::CloseCurly => "}",
            Punctuator::OpenParen => "(",
            Punctuator::CloseParen => ")",
            Punctuator::Assignment => "=",
            Punctuator::Equals => "==",
            Punctuator::StrictEquals => "===",
            Punctuator::Not => "!",
            Punctuator::NotEquals => "!=",
            Punctuator::StrictNotEquals => "!==",
            Punctuator::Less => "<",
            Punctuator::LessEquals => "<=",
            Punctuator::Greater => ">",
            Punctuator::GreaterEquals => ">=",
            Punctuator::ShiftLeft => "<<",
            Punctuator::ShiftRight => ">>",
            Punctuator::UnsignedShiftRight => ">>>",
            Punctuator::Or => "||",
            Punctuator::And => "&&",
            Punctuator::Nullish => "??",
            Punctuator::BitOr => "|",
            Punctuator::BitAnd => "&",
            Punctuator::BitXor => "^",
            Punctuator::Tilde => "~",
            Punctuator::Dot => ".",
            Punctuator::Ellipsis => "...",
            Punctuator::OptionalChain => "?.",
            Punctuator::Semicolon => ";",
            Punctuator::Colon => ":",
            Punctuator::Question => "?",
            Punctuator::Comma => ",",
            Punctuator::Arrow => "=>",
            Punctuator::PlusPlus => "++",
            Punctuator::MinusMinus => "--",
            Punctuator::PlusEquals => "+=",
            Punctuator::MinusEquals => "-=",
            Punctuator::StarEquals => "*=",
            Punctuator::SlashEquals => "/=",
            Punctuator::PercentEquals => "%=",
            Punctuator::StarStarEquals => "**=",
            Punctuator::ShiftLeftEquals => "<<=",
            Punctuator::ShiftRightEquals => ">>=",
            Punctuator::UnsignedShiftRightEquals => ">>>=",
            Punctuator::BitAndEquals => "&=",
            Punctuator::BitOrEquals => "|=",
            Punctuator::BitXorEquals => "^=",
            Punctuator::AndEquals => "&&=",
            Punctuator::OrEquals => "||=",
            Punctuator::NullishEquals => "??=",
            Punctuator::Plus => "+",
            Punctuator::Dash => "-",
            Punctuator::Star => "*",
            Punctuator::StarStar => "**",
            Punctuator::Slash => "/",
            Punctuator::Percent => "%",
        }
    }
}

/// Delimiter of a string literal.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Quote {
    Double,
    Single,
    /// Backtick; the only variant allowed to contain raw newlines.
    Template,
}

impl Quote {
    pub fn from_char(c: char) -> Option<Quote> {
        match c {
            '"' => Some(Quote::Double),
            '\'' => Some(Quote::Single),
            '`' => Some(Quote::Template),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
            Quote::Template => '`',
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub fn base(&self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    pub fn is_digit(&self, byte: u8) -> bool {
        (byte as char).is_digit(self.base())
    }
}

/// Attributes of a numeric literal.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Number {
    pub radix: Radix,
    pub is_float: bool,
    /// Integer literal with a trailing `n`.
    pub is_big_int: bool,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    LineComment,
    BlockComment,
    StringLiteral(Quote),
    NumberLiteral(Number),
    Identifier,
    Keyword(Keyword),
    Punctuator(Punctuator),
    EndOfInput,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LineComment => "LineComment",
            TokenKind::BlockComment => "BlockComment",
            TokenKind::StringLiteral(_) => "StringLiteral",
            TokenKind::NumberLiteral(_) => "NumberLiteral",
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword(_) => "Keyword",
            TokenKind::Punctuator(_) => "Punctuator",
            TokenKind::EndOfInput => "EndOfInput",
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.lexeme)
    }
}

impl Token {
    pub fn start_offset(&self) -> usize {
        self.span.start.offset
    }

    pub fn end_offset(&self) -> usize {
        self.span.end.offset
    }

    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn column(&self) -> u32 {
        self.span.start.column
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    pub fn is_punctuator(&self, punctuator: Punctuator) -> bool {
        self.kind == TokenKind::Punctuator(punctuator)
    }

    /// One-line summary used by the token dump: `line:column Kind "lexeme"`.
    pub fn describe(&self) -> String {
        format!("{}:{} {}", self.line(), self.column(), self)
    }
}
