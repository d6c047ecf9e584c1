use regex::Regex;

use super::{
    highlight::{classify, string_segments, Style},
    render::{highlight_source, render_ansi},
    theme::{Color, StyleSpec, Theme, RESET},
};
use crate::lexer::{lexer::tokenize, tokens::Quote};

fn strip_ansi(text: &str) -> String {
    let escapes = Regex::new("\x1b\\[[0-9;]*m").unwrap();
    escapes.replace_all(text, "").into_owned()
}

fn styles_of(source: &str) -> Vec<(String, Style)> {
    let tokens = tokenize(source).unwrap();
    let styles = classify(&tokens);
    tokens.into_iter().map(|t| t.lexeme).zip(styles).collect()
}

#[test]
fn test_classify_token_kinds() {
    let styles = styles_of("let x = 1.5; // note\n'str' /* block */");

    assert_eq!(
        styles,
        vec![
            ("let".to_string(), Style::Keyword),
            ("x".to_string(), Style::Default),
            ("=".to_string(), Style::Operator),
            ("1.5".to_string(), Style::Literal),
            (";".to_string(), Style::Operator),
            ("// note".to_string(), Style::Comment),
            ("'str'".to_string(), Style::String),
            ("/* block */".to_string(), Style::Comment),
            ("".to_string(), Style::Default),
        ]
    );
}

#[test]
fn test_classify_literal_names() {
    let styles = styles_of("true false null nothing");

    assert_eq!(styles[0].1, Style::Literal);
    assert_eq!(styles[1].1, Style::Literal);
    assert_eq!(styles[2].1, Style::Literal);
    assert_eq!(styles[3].1, Style::Default);
}

#[test]
fn test_classify_function_names() {
    let styles = styles_of("function controlFlow(b) { strings /* c */ (); numbers; }");

    assert_eq!(styles[1], ("controlFlow".to_string(), Style::Function));
    assert_eq!(styles[3], ("b".to_string(), Style::Default));
    assert_eq!(styles[6], ("strings".to_string(), Style::Function));
    assert_eq!(styles[11], ("numbers".to_string(), Style::Default));
}

#[test]
fn test_classify_extra_keyword_names() {
    let styles = styles_of("const x = new Foo(this); var y; typeof z");

    assert_eq!(styles[0], ("const".to_string(), Style::Keyword));
    assert_eq!(styles[1], ("x".to_string(), Style::Default));
    assert_eq!(styles[3], ("new".to_string(), Style::Keyword));
    assert_eq!(styles[4], ("Foo".to_string(), Style::Function));
    assert_eq!(styles[6], ("this".to_string(), Style::Keyword));
    assert_eq!(styles[9], ("var".to_string(), Style::Keyword));
    assert_eq!(styles[12], ("typeof".to_string(), Style::Default));
}

#[test]
fn test_string_segments_mark_escapes() {
    let segments = string_segments(r#""a\nb\"c\q\x41\x4""#, Quote::Double);

    assert_eq!(
        segments,
        vec![
            (Style::String, "\"a"),
            (Style::Escape, "\\n"),
            (Style::String, "b"),
            (Style::Escape, "\\\""),
            (Style::String, "c\\q"),
            (Style::Escape, "\\x41"),
            (Style::String, "\\x4\""),
        ]
    );
}

#[test]
fn test_string_segments_unicode_escapes() {
    let segments = string_segments(r"'\u0041\u{1F600}\u{}\u12'", Quote::Single);

    assert_eq!(
        segments,
        vec![
            (Style::String, "'"),
            (Style::Escape, "\\u0041"),
            (Style::Escape, "\\u{1F600}"),
            (Style::String, "\\u{}\\u12'"),
        ]
    );
}

#[test]
fn test_template_substitution_is_highlighted_as_code() {
    let segments = string_segments("`a ${f(1)} b`", Quote::Template);

    assert_eq!(
        segments,
        vec![
            (Style::String, "`a "),
            (Style::Default, "${"),
            (Style::Function, "f"),
            (Style::Operator, "("),
            (Style::Literal, "1"),
            (Style::Operator, ")"),
            (Style::Default, "}"),
            (Style::String, " b`"),
        ]
    );
}

#[test]
fn test_template_substitution_nesting() {
    let lexeme = "`${ {a: \"x\\t\"} }!`";
    let segments = string_segments(lexeme, Quote::Template);

    assert!(segments.contains(&(Style::Operator, "{")));
    assert!(segments.contains(&(Style::Escape, "\\t")));
    assert_eq!(segments[segments.len() - 2], (Style::Default, "}"));
    assert_eq!(segments[segments.len() - 1], (Style::String, "!`"));

    // Unclosed substitution runs up to the closing backtick.
    assert_eq!(
        string_segments("`${a`", Quote::Template),
        vec![
            (Style::String, "`"),
            (Style::Default, "${"),
            (Style::Default, "a"),
            (Style::String, "`"),
        ]
    );

    // Escaped `$` and non-template strings have no substitutions.
    assert_eq!(
        string_segments("`\\${x}`", Quote::Template),
        vec![(Style::String, "`"), (Style::Escape, "\\$"), (Style::String, "{x}`")]
    );
    assert_eq!(string_segments("'${x}'", Quote::Single), vec![(Style::String, "'${x}'")]);
}

#[test]
fn test_string_segments_rebuild_lexeme() {
    let lexemes = [
        r#""""#,
        r"'\\'",
        "`a\\\nb`",
        r#""é\é""#,
        "\"plain\"",
        "`x ${ 'é' + #} y`",
        "`${`",
    ];

    for lexeme in lexemes {
        let quote = lexeme.chars().next().and_then(Quote::from_char).unwrap();
        let rebuilt: String = string_segments(lexeme, quote).iter().map(|(_, text)| *text).collect();
        assert_eq!(rebuilt, lexeme);
    }
}

#[test]
fn test_hsl_conversion() {
    assert_eq!(Color::hsl(0.0, 0.0, 100.0), Color::rgb(255, 255, 255));
    assert_eq!(Color::hsl(0.0, 100.0, 50.0), Color::rgb(255, 0, 0));
    assert_eq!(Color::hsl(120.0, 100.0, 50.0), Color::rgb(0, 255, 0));
    assert_eq!(Color::hsl(220.0, 13.0, 18.0), Color::rgb(40, 44, 52));
    assert_eq!(Color::hsl(286.0, 60.0, 67.0), Color::rgb(198, 120, 221));
}

#[test]
fn test_one_dark_styles() {
    let theme = Theme::one_dark();

    assert_eq!(theme.name, "one-dark");
    assert_eq!(theme.background, Color::rgb(40, 44, 52));
    assert_eq!(theme.spec(Style::Default).color, Color::rgb(171, 178, 191));
    assert_eq!(theme.spec(Style::String).color, Color::rgb(152, 195, 121));
    assert!(theme.spec(Style::Comment).italic);
    assert_eq!(theme.spec(Style::Keyword), theme.spec(Style::Operator));
    assert!(Style::ALL.iter().all(|s| !theme.spec(*s).bold));
}

#[test]
fn test_ansi_sequences() {
    let spec = StyleSpec {
        color: Color::rgb(1, 2, 3),
        bold: true,
        italic: false,
    };

    assert_eq!(spec.ansi(), "\x1b[38;2;1;2;3;1;23m");
    assert_eq!(Color::rgb(4, 5, 6).ansi_background(), "\x1b[48;2;4;5;6m");
}

#[test]
fn test_render_single_identifier() {
    let theme = Theme::one_dark();
    let rendered = highlight_source("x", &theme, false).unwrap();

    assert_eq!(rendered, format!("{}x{}", theme.spec(Style::Default).ansi(), RESET));
}

#[test]
fn test_render_emits_escape_only_on_style_change() {
    let theme = Theme::one_dark();
    let rendered = highlight_source("a b", &theme, false).unwrap();

    // Identifiers and the gap between them share the default style.
    assert_eq!(rendered, format!("{}a b{}", theme.spec(Style::Default).ansi(), RESET));
}

#[test]
fn test_render_background_prefix() {
    let theme = Theme::one_dark();
    let rendered = highlight_source("1", &theme, true).unwrap();

    assert!(rendered.starts_with(&theme.background.ansi_background()));
    assert!(rendered.contains(&theme.spec(Style::Literal).ansi()));
    assert!(rendered.ends_with(RESET));
}

#[test]
fn test_render_is_lossless() {
    let source = "function f() {\n\t// c\n  return \"a\\tb\" + 0x1F;\n}\n\n";
    let tokens = tokenize(source).unwrap();
    let rendered = render_ansi(source, &tokens, &Theme::default(), true);

    assert_eq!(strip_ansi(&rendered), source);
}

#[test]
fn test_render_template_substitution() {
    let theme = Theme::one_dark();
    let source = "let s = `n = ${n + 1}`;";
    let rendered = highlight_source(source, &theme, false).unwrap();

    assert_eq!(strip_ansi(&rendered), source);
    assert!(rendered.contains(&format!("{}1", theme.spec(Style::Literal).ansi())));
}

#[test]
fn test_highlight_source_reports_errors() {
    let error = highlight_source("let s = 'oops", &Theme::one_dark(), false).unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.get_position().column, 9);
}
