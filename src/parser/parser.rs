//! The parser state shared by every parsing function.
//!
//! A [`Parser`] borrows a token source and an operator table for the length
//! of one parse. Primary expressions are dispatched through a lookup table
//! keyed by token kind; binary operators are resolved through the
//! [`OperatorTable`], which the caller owns so that operators declared in
//! one parse stay available to later ones.

use std::collections::HashMap;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{source::TokenSource, tokens::TokenKind},
    Position,
};

use super::{
    lookups::{create_token_lookups, PrimaryHandler, PrimaryLookup},
    operators::{is_operator_char, OperatorTable},
};

pub struct Parser<'a> {
    /// Where tokens come from
    source: &'a mut dyn TokenSource,
    /// Binary operator precedences, read while climbing and written by
    /// `binary` prototypes
    operators: &'a mut OperatorTable,
    /// Handlers for primary expressions
    primary_lookup: PrimaryLookup,
}

impl<'a> Parser<'a> {
    /// Creates a parser with its primary handlers registered.
    pub fn new(source: &'a mut dyn TokenSource, operators: &'a mut OperatorTable) -> Self {
        let mut parser = Parser {
            source,
            operators,
            primary_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.source.current_kind()
    }

    pub fn current_value(&self) -> String {
        self.source.current_value().to_string()
    }

    pub fn current_number(&self) -> Option<f64> {
        self.source.current_number()
    }

    pub fn current_identifier(&self) -> Option<String> {
        self.source.current_identifier().map(String::from)
    }

    pub fn peek_raw_char(&self) -> Option<char> {
        self.source.peek_raw_char()
    }

    /// Consumes the current token and returns the kind of the next one.
    pub fn advance(&mut self) -> TokenKind {
        self.source.advance()
    }

    pub fn get_position(&self) -> Position {
        self.source.position()
    }

    pub fn at_eof(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// Builds an error located at the current token.
    pub fn error(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.get_position())
    }

    /// Consumes the current token if it is `expected_kind`, otherwise fails
    /// with `error`.
    pub fn expect_error(&mut self, expected_kind: TokenKind, error: ErrorImpl) -> Result<(), Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.error(error));
        }

        self.advance();
        Ok(())
    }

    /// Consumes the current token if it is `expected_kind`, otherwise fails
    /// with an `ExpectedToken` error naming `expected`.
    pub fn expect(&mut self, expected_kind: TokenKind, expected: &str) -> Result<(), Error> {
        let error = ErrorImpl::ExpectedToken {
            expected: expected.to_string(),
            found: self.current_value(),
        };
        self.expect_error(expected_kind, error)
    }

    /// Consumes an identifier and returns its text.
    pub fn expect_identifier(&mut self) -> Result<String, Error> {
        match self.current_identifier() {
            Some(name) => {
                self.advance();
                Ok(name)
            }
            None => Err(self.error(ErrorImpl::ExpectedIdentifier {
                found: self.current_value(),
            })),
        }
    }

    /// True when the current token is the single symbol `symbol`.
    pub fn at_symbol(&self, symbol: char) -> bool {
        self.current_token_kind() == TokenKind::Symbol
            && self.source.current_value().chars().eq(std::iter::once(symbol))
    }

    /// Reads the operator starting at the current token without consuming
    /// it.
    ///
    /// Returns the spelling and the number of tokens it spans. Two operator
    /// characters are glued together only when the second one follows the
    /// first with nothing in between. Non-symbol tokens yield `None`.
    pub fn peek_operator(&self) -> Option<(String, usize)> {
        if self.current_token_kind() != TokenKind::Symbol {
            return None;
        }

        let first = self.source.current_value().chars().next()?;

        match self.peek_raw_char() {
            Some(next) if is_operator_char(first) && is_operator_char(next) => {
                Some((format!("{}{}", first, next), 2))
            }
            _ => Some((first.to_string(), 1)),
        }
    }

    pub fn get_operators(&self) -> &OperatorTable {
        &*self.operators
    }

    pub fn get_operators_mut(&mut self) -> &mut OperatorTable {
        &mut *self.operators
    }

    pub fn get_primary_lookup(&self) -> &PrimaryLookup {
        &self.primary_lookup
    }

    /// Registers the handler for primary expressions starting with `kind`.
    pub fn primary(&mut self, kind: TokenKind, primary_fn: PrimaryHandler) {
        self.primary_lookup.insert(kind, primary_fn);
    }
}
