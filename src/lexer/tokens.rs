use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("rept", TokenKind::Rept);
        map.insert("arr", TokenKind::Arr);
        map.insert("func", TokenKind::Func);
        map.insert("unary", TokenKind::Unary);
        map.insert("binary", TokenKind::Binary);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenBlock,
    CloseBlock,
    OpenParen,
    CloseParen,

    Comma,
    Semicolon,

    /// Any other single punctuation character, `=` included. Operators are
    /// assembled from these by the parser.
    Symbol,

    // Reserved
    If,
    Then,
    Else,
    For,
    While,
    Rept,
    Arr,
    Func,
    Unary,
    Binary,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
    /// The raw source character right after this token, before any
    /// whitespace is skipped.
    pub trailing: Option<char>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Number | TokenKind::Identifier | TokenKind::Symbol => {
                write!(f, "{} ({})", self.kind, self.value)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}
