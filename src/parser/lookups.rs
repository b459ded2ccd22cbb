use std::collections::HashMap;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

pub type PrimaryHandler = fn(&mut Parser<'_>) -> Result<Expr, Error>;

// Lookup table inside parser struct, so it's easier
pub type PrimaryLookup = HashMap<TokenKind, PrimaryHandler>;

pub fn create_token_lookups(parser: &mut Parser<'_>) {
    // Literals and symbols
    parser.primary(TokenKind::Number, parse_number_expr);
    parser.primary(TokenKind::Identifier, parse_identifier_expr);
    parser.primary(TokenKind::OpenParen, parse_paren_expr);
    parser.primary(TokenKind::Arr, parse_array_decl_expr);

    // Control flow
    parser.primary(TokenKind::If, parse_if_expr);
    parser.primary(TokenKind::For, parse_for_expr);
    parser.primary(TokenKind::While, parse_while_expr);
    parser.primary(TokenKind::Rept, parse_repeat_expr);
}
