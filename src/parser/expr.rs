use tracing::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{ArrayDeclExpr, CallExpr, UnaryExpr, VariableExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{operators::is_operator_char, parser::Parser};

/// expression
///   ::= unary binoprhs
pub fn parse_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let lhs = parse_unary(parser)?;

    parse_binop_rhs(parser, 0, lhs)
}

/// binoprhs
///   ::= (binop unary)*
///
/// Precedence climbing over the operator table. Anything that is not a
/// declared operator, or binds looser than `expr_prec`, ends the expression.
pub fn parse_binop_rhs(parser: &mut Parser<'_>, expr_prec: u32, mut lhs: Expr) -> Result<Expr, Error> {
    loop {
        let Some((operator, width)) = parser.peek_operator() else {
            return Ok(lhs);
        };

        let tok_prec = match parser.get_operators().lookup(&operator) {
            Some(prec) if prec >= expr_prec => prec,
            _ => return Ok(lhs),
        };

        for _ in 0..width {
            parser.advance();
        }

        let mut rhs = parse_unary(parser)?;

        // If the operator after rhs binds tighter, it takes rhs as its lhs.
        let next_prec = parser
            .peek_operator()
            .and_then(|(next, _)| parser.get_operators().lookup(&next));

        if next_prec.is_some_and(|next| next > tok_prec) {
            trace!(%operator, tok_prec, ?next_prec, "climbing into tighter operator");
            rhs = parse_binop_rhs(parser, tok_prec + 1, rhs)?;
        }

        lhs = Expr::binary(operator, lhs, rhs);
    }
}

/// unary
///   ::= primary
///   ::= unaryop unary
pub fn parse_unary(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    // Parentheses and commas have their own token kinds, so only symbols
    // can start a prefix operator.
    if parser.current_token_kind() != TokenKind::Symbol {
        return parse_primary(parser);
    }

    let token = parser.current_value();
    let first = token.chars().next();
    let operator = match first {
        Some(c) if is_operator_char(c) => c,
        _ => return Err(parser.error(ErrorImpl::UnknownOperatorToken { token })),
    };
    parser.advance();

    let operand = parse_unary(parser)?;

    Ok(Expr::Unary(UnaryExpr {
        operator,
        operand: Box::new(operand),
    }))
}

/// primary
///   ::= identifierexpr
///   ::= numberexpr
///   ::= parenexpr
///   ::= arrdeclexpr
///   ::= ifexpr | forexpr | whileexpr | reptexpr
pub fn parse_primary(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();

    match parser.get_primary_lookup().get(&token_kind).copied() {
        Some(handler) => handler(parser),
        None => Err(parser.error(ErrorImpl::UnexpectedToken {
            token: parser.current_value(),
        })),
    }
}

/// numberexpr ::= number
pub fn parse_number_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    match parser.current_number() {
        Some(value) => {
            parser.advance();
            Ok(Expr::number(value))
        }
        None => Err(parser.error(ErrorImpl::NumberParseError {
            token: parser.current_value(),
        })),
    }
}

/// parenexpr ::= '(' expression ')'
pub fn parse_paren_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser)?;
    parser.expect_error(TokenKind::CloseParen, ErrorImpl::UnmatchedParen)?;

    Ok(expr)
}

/// identifierexpr
///   ::= identifier
///   ::= identifier ('[' expression ']')+
///   ::= identifier '(' (expression (',' expression)*)? ')'
pub fn parse_identifier_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let name = parser.expect_identifier()?;

    match parser.current_token_kind() {
        TokenKind::OpenBracket => parse_index_chain(parser, name),
        TokenKind::OpenParen => parse_call_expr(parser, name),
        _ => Ok(Expr::variable(name)),
    }
}

fn parse_index_chain(parser: &mut Parser<'_>, name: String) -> Result<Expr, Error> {
    let mut indices = vec![];

    while parser.current_token_kind() == TokenKind::OpenBracket {
        parser.advance();

        if parser.current_token_kind() == TokenKind::CloseBracket {
            return Err(parser.error(ErrorImpl::MissingArrayIndex { name }));
        }

        indices.push(parse_expr(parser)?);
        parser.expect(TokenKind::CloseBracket, "]")?;
    }

    Ok(Expr::Variable(VariableExpr { name, indices }))
}

fn parse_call_expr(parser: &mut Parser<'_>, callee: String) -> Result<Expr, Error> {
    parser.advance();

    let mut args = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            args.push(parse_expr(parser)?);

            match parser.current_token_kind() {
                TokenKind::CloseParen => break,
                TokenKind::Comma => {
                    parser.advance();
                }
                _ => {
                    return Err(parser.error(ErrorImpl::ExpectedCommaOrParen {
                        found: parser.current_value(),
                    }))
                }
            }
        }
    }

    parser.advance();

    Ok(Expr::Call(CallExpr { callee, args }))
}

/// arrdeclexpr ::= 'arr' identifier ('[' number ']')+
pub fn parse_array_decl_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parser.advance();

    let name = parser.expect_identifier()?;

    if parser.current_token_kind() != TokenKind::OpenBracket {
        return Err(parser.error(ErrorImpl::MissingArrayDimension { name }));
    }

    let mut dimensions = vec![];

    while parser.current_token_kind() == TokenKind::OpenBracket {
        parser.advance();

        if parser.current_token_kind() == TokenKind::CloseBracket {
            return Err(parser.error(ErrorImpl::MissingArrayDimension { name }));
        }

        dimensions.push(parse_dimension(parser)?);
        parser.expect(TokenKind::CloseBracket, "]")?;
    }

    Ok(Expr::ArrayDecl(ArrayDeclExpr { name, dimensions }))
}

/// A dimension is an integer literal of 1 or higher.
fn parse_dimension(parser: &mut Parser<'_>) -> Result<u32, Error> {
    match parser.current_number() {
        Some(value) if value.fract() == 0.0 && value >= 1.0 && value <= u32::MAX as f64 => {
            parser.advance();
            Ok(value as u32)
        }
        _ => Err(parser.error(ErrorImpl::InvalidArrayDimension {
            found: parser.current_value(),
        })),
    }
}
