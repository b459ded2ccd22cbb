//! The token source interface the parser consumes.
//!
//! The parser looks at one token plus one raw character of lookahead.
//! [`TokenStream`] is the implementation backed by
//! [`tokenize`](super::lexer::tokenize).

use crate::Position;

use super::tokens::{Token, TokenKind};

pub trait TokenSource {
    /// Kind of the token under the cursor.
    fn current_kind(&self) -> TokenKind;
    /// Source text of the token under the cursor.
    fn current_value(&self) -> &str;
    /// Numeric value, only when the current token is a number.
    fn current_number(&self) -> Option<f64>;
    /// Identifier text, only when the current token is an identifier.
    fn current_identifier(&self) -> Option<&str>;
    /// The next unconsumed raw character after the current token.
    ///
    /// Used to glue two adjacent operator characters such as `<=`.
    fn peek_raw_char(&self) -> Option<char>;
    /// Consumes the current token and returns the kind of the new one.
    fn advance(&mut self) -> TokenKind;
    /// Start of the current token, for error reporting.
    fn position(&self) -> Position;
}

pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream { tokens, pos: 0 }
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }
}

impl TokenSource for TokenStream {
    fn current_kind(&self) -> TokenKind {
        self.current_token().map_or(TokenKind::EOF, |t| t.kind)
    }

    fn current_value(&self) -> &str {
        self.current_token().map_or("EOF", |t| t.value.as_str())
    }

    fn current_number(&self) -> Option<f64> {
        self.current_token()
            .filter(|t| t.kind == TokenKind::Number)
            .and_then(|t| t.value.parse().ok())
    }

    fn current_identifier(&self) -> Option<&str> {
        self.current_token()
            .filter(|t| t.kind == TokenKind::Identifier)
            .map(|t| t.value.as_str())
    }

    fn peek_raw_char(&self) -> Option<char> {
        self.current_token().and_then(|t| t.trailing)
    }

    fn advance(&mut self) -> TokenKind {
        // Stay parked on the final EOF token.
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        self.current_kind()
    }

    fn position(&self) -> Position {
        match self.current_token() {
            Some(token) => token.span.start.clone(),
            None => Position::null(),
        }
    }
}
