use crate::{errors::errors::LexError, lexer::lexer::tokenize, lexer::tokens::{Token, TokenKind}};

use super::{
    highlight::{classify, string_segments, Style},
    theme::{Theme, RESET},
};

struct Painter<'t> {
    out: String,
    current: Option<Style>,
    theme: &'t Theme,
}

impl Painter<'_> {
    fn paint(&mut self, style: Style, text: &str) {
        if text.is_empty() {
            return;
        }

        if self.current != Some(style) {
            self.out.push_str(&self.theme.spec(style).ansi());
            self.current = Some(style);
        }
        self.out.push_str(text);
    }
}

/// Renders `source` with ANSI colour escapes. `tokens` must come from scanning
/// `source`; the text between tokens is written unchanged in the default
/// style, so stripping the escapes gives back `source`.
pub fn render_ansi(source: &str, tokens: &[Token], theme: &Theme, background: bool) -> String {
    let styles = classify(tokens);
    let mut painter = Painter {
        out: String::with_capacity(source.len() * 2),
        current: None,
        theme,
    };

    if background {
        painter.out.push_str(&theme.background.ansi_background());
    }

    let mut cursor = 0;
    for (token, style) in tokens.iter().zip(styles) {
        if token.start_offset() > cursor {
            painter.paint(Style::Default, &source[cursor..token.start_offset()]);
        }

        match token.kind {
            TokenKind::StringLiteral(quote) => {
                for (segment_style, text) in string_segments(&token.lexeme, quote) {
                    painter.paint(segment_style, text);
                }
            }
            _ => painter.paint(style, &token.lexeme),
        }

        cursor = token.end_offset();
    }

    if cursor < source.len() {
        painter.paint(Style::Default, &source[cursor..]);
    }

    painter.out.push_str(RESET);
    painter.out
}

/// Scans and renders `source` in one step.
pub fn highlight_source(source: &str, theme: &Theme, background: bool) -> Result<String, LexError> {
    let tokens = tokenize(source)?;
    Ok(render_ansi(source, &tokens, theme, background))
}
