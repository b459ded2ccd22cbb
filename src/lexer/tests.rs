//! Unit tests for the lexer module.

use super::{
    lexer::tokenize,
    source::{TokenSource, TokenStream},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.sel".to_string()))
        .unwrap()
        .iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("if then else for while rept arr func unary binary"),
        vec![
            TokenKind::If,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::While,
            TokenKind::Rept,
            TokenKind::Arr,
            TokenKind::Func,
            TokenKind::Unary,
            TokenKind::Binary,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo baz_123 _underscore iff".to_string();
    let tokens = tokenize(source, None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "iff");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) [ ] { } , ;"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::OpenBlock,
            TokenKind::CloseBlock,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_operators_are_single_char_symbols() {
    let tokens = tokenize("a <= b".to_string(), None).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Symbol);
    assert_eq!(tokens[1].value, "<");
    assert_eq!(tokens[2].kind, TokenKind::Symbol);
    assert_eq!(tokens[2].value, "=");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
}

#[test]
fn test_trailing_character() {
    let tokens = tokenize("a<= b".to_string(), None).unwrap();

    assert_eq!(tokens[0].trailing, Some('<'));
    assert_eq!(tokens[1].trailing, Some('='));
    assert_eq!(tokens[2].trailing, Some(' '));
    assert_eq!(tokens[3].trailing, None);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
    assert_eq!(tokens[4].trailing, None);
}

#[test]
fn test_no_trailing_character_before_comment() {
    let tokens = tokenize("a -// note\nb".to_string(), None).unwrap();

    assert_eq!(tokens[1].value, "-");
    assert_eq!(tokens[1].trailing, None);
    assert_eq!(tokens[2].value, "b");
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        kinds("x // the rest is ignored\ny"),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("  foo + 1".to_string(), None).unwrap();

    assert_eq!(tokens[0].span.start.0, 2);
    assert_eq!(tokens[0].span.end.0, 5);
    assert_eq!(tokens[1].span.start.0, 6);
    assert_eq!(tokens[2].span.start.0, 8);
    assert_eq!(tokens[3].span.start.0, 9);
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("a é b".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_token_stream_interface() {
    let tokens = tokenize("x 2.5 <=".to_string(), None).unwrap();
    let mut stream = TokenStream::new(tokens);

    assert_eq!(stream.current_kind(), TokenKind::Identifier);
    assert_eq!(stream.current_identifier(), Some("x"));
    assert_eq!(stream.current_number(), None);

    assert_eq!(stream.advance(), TokenKind::Number);
    assert_eq!(stream.current_number(), Some(2.5));
    assert_eq!(stream.current_identifier(), None);

    assert_eq!(stream.advance(), TokenKind::Symbol);
    assert_eq!(stream.current_value(), "<");
    assert_eq!(stream.peek_raw_char(), Some('='));

    stream.advance();
    assert_eq!(stream.advance(), TokenKind::EOF);
    assert_eq!(stream.advance(), TokenKind::EOF);
}
