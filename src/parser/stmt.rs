use crate::{
    ast::{
        ast::Expr,
        expressions::{BlockExpr, ForExpr, IfExpr, RepeatExpr, WhileExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// blockexpr
///   ::= expression
///   ::= '{' (blockexpr ';'?)* '}'
pub fn parse_block_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    if parser.current_token_kind() != TokenKind::OpenBlock {
        return parse_expr(parser);
    }
    parser.advance();

    let mut statements = Vec::new();

    loop {
        match parser.current_token_kind() {
            TokenKind::CloseBlock => break,
            TokenKind::EOF => return Err(parser.error(ErrorImpl::UnterminatedBlock)),
            _ => {}
        }

        statements.push(parse_block_expr(parser)?);

        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance();
        }
    }

    parser.advance();

    Ok(Expr::Block(BlockExpr { statements }))
}

/// ifexpr ::= 'if' expression 'then' blockexpr ('else' blockexpr)?
pub fn parse_if_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parser.advance();

    let condition = parse_expr(parser)?;

    parser.expect(TokenKind::Then, "then")?;
    let then_branch = parse_block_expr(parser)?;

    let else_branch = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_block_expr(parser)?))
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch,
    }))
}

/// forexpr ::= 'for' identifier '=' expression ',' expression (',' expression)? blockexpr
pub fn parse_for_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parser.advance();

    let variable = parser.expect_identifier()?;

    if !parser.at_symbol('=') {
        return Err(parser.error(ErrorImpl::ExpectedToken {
            expected: String::from("="),
            found: parser.current_value(),
        }));
    }
    parser.advance();

    let start = parse_expr(parser)?;
    parser.expect(TokenKind::Comma, ",")?;
    let end = parse_expr(parser)?;

    // The step value is optional.
    let step = if parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        Some(Box::new(parse_expr(parser)?))
    } else {
        None
    };

    let body = parse_block_expr(parser)?;

    Ok(Expr::For(ForExpr {
        variable,
        start: Box::new(start),
        end: Box::new(end),
        step,
        body: Box::new(body),
    }))
}

/// whileexpr ::= 'while' expression blockexpr
pub fn parse_while_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parser.advance();

    let condition = parse_expr(parser)?;
    let body = parse_block_expr(parser)?;

    Ok(Expr::While(WhileExpr {
        condition: Box::new(condition),
        body: Box::new(body),
    }))
}

/// reptexpr ::= 'rept' '(' expression ')' blockexpr
pub fn parse_repeat_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parser.advance();

    parser.expect(TokenKind::OpenParen, "(")?;
    let count = parse_expr(parser)?;
    parser.expect_error(TokenKind::CloseParen, ErrorImpl::UnmatchedParen)?;

    let body = parse_block_expr(parser)?;

    Ok(Expr::Repeat(RepeatExpr {
        count: Box::new(count),
        body: Box::new(body),
    }))
}
