//! Prototypes, definitions and top-level forms.
//!
//! Parsing a `binary` prototype installs its operator into the operator
//! table before the parameter list and body are read, so the operator can
//! be used inside its own definition.

use tracing::debug;

use crate::{
    ast::functions::{Function, Prototype, TopLevel, DEFAULT_BINARY_PRECEDENCE},
    errors::errors::{Error, ErrorImpl},
    lexer::{source::TokenSource, tokens::TokenKind},
};

use super::{
    operators::{is_operator_char, is_valid_precedence, OperatorTable},
    parser::Parser,
    stmt::parse_block_expr,
};

/// prototype
///   ::= id '(' params ')'
///   ::= 'unary' SYMBOL '(' id ')'
///   ::= 'binary' SYMBOL SYMBOL? number? '(' id ',' id ')'
pub fn parse_prototype(parser: &mut Parser<'_>) -> Result<Prototype, Error> {
    let mut precedence = DEFAULT_BINARY_PRECEDENCE;

    // Number of operands an operator prototype must declare, 0 for plain
    // functions.
    let (name, operands) = match parser.current_token_kind() {
        TokenKind::Identifier => (parser.expect_identifier()?, 0),
        TokenKind::Unary => {
            parser.advance();

            if parser.current_token_kind() != TokenKind::Symbol {
                return Err(parser.error(ErrorImpl::ExpectedOperatorSymbol {
                    found: parser.current_value(),
                }));
            }
            let symbol = parser.current_value();

            // Only operator-alphabet symbols can appear in prefix position.
            if !symbol.chars().all(is_operator_char) {
                return Err(parser.error(ErrorImpl::UnknownOperatorToken { token: symbol }));
            }
            parser.advance();

            (format!("unary{}", symbol), 1)
        }
        TokenKind::Binary => {
            parser.advance();

            let Some((symbol, width)) = parser.peek_operator() else {
                return Err(parser.error(ErrorImpl::ExpectedOperatorSymbol {
                    found: parser.current_value(),
                }));
            };
            for _ in 0..width {
                parser.advance();
            }

            if parser.current_token_kind() == TokenKind::Number {
                precedence = parse_precedence(parser)?;
            }

            parser.get_operators_mut().declare(symbol.as_str(), precedence);
            debug!(operator = %symbol, precedence, "declared binary operator");

            (format!("binary{}", symbol), 2)
        }
        _ => {
            return Err(parser.error(ErrorImpl::ExpectedFunctionName {
                found: parser.current_value(),
            }))
        }
    };

    parser.expect(TokenKind::OpenParen, "(")?;
    let params = parse_params(parser)?;

    if operands > 0 && params.len() != operands {
        return Err(parser.error(ErrorImpl::ArityMismatch {
            operator: name,
            expected: operands,
            received: params.len(),
        }));
    }

    Ok(Prototype {
        name,
        params,
        is_operator: operands > 0,
        precedence,
    })
}

fn parse_precedence(parser: &mut Parser<'_>) -> Result<u32, Error> {
    match parser.current_number() {
        Some(value) if value.fract() == 0.0 && is_valid_precedence(value as u32) => {
            parser.advance();
            Ok(value as u32)
        }
        _ => Err(parser.error(ErrorImpl::InvalidPrecedence {
            found: parser.current_value(),
        })),
    }
}

/// params ::= (param (',' param)*)? ')'
///
/// A slot that does not hold an identifier is skipped as long as it is
/// followed by `,` or `)`.
fn parse_params(parser: &mut Parser<'_>) -> Result<Vec<String>, Error> {
    let mut params = vec![];

    if parser.current_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(params);
    }

    loop {
        match parser.current_identifier() {
            Some(param) => params.push(param),
            None if parser.at_eof() => {
                return Err(parser.error(ErrorImpl::ExpectedParamOrParen {
                    found: parser.current_value(),
                }))
            }
            None => {}
        }
        parser.advance();

        match parser.current_token_kind() {
            TokenKind::CloseParen => {
                parser.advance();
                return Ok(params);
            }
            TokenKind::Comma => {
                parser.advance();
            }
            _ => {
                return Err(parser.error(ErrorImpl::ExpectedParamOrParen {
                    found: parser.current_value(),
                }))
            }
        }
    }
}

/// definition ::= 'func' prototype blockexpr
pub fn parse_definition(parser: &mut Parser<'_>) -> Result<Function, Error> {
    parser.expect(TokenKind::Func, "func")?;

    let prototype = parse_prototype(parser)?;
    let body = parse_block_expr(parser)?;

    Ok(Function { prototype, body })
}

/// toplevelexpr ::= blockexpr
pub fn parse_top_level_expr(parser: &mut Parser<'_>) -> Result<Function, Error> {
    let body = parse_block_expr(parser)?;

    Ok(Function {
        prototype: Prototype::anonymous(),
        body,
    })
}

/// Parses the next top-level form, skipping stray `;`.
///
/// Returns `None` once the token source is exhausted.
pub fn parse_top_level(parser: &mut Parser<'_>) -> Result<Option<TopLevel>, Error> {
    while parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    let form = match parser.current_token_kind() {
        TokenKind::EOF => return Ok(None),
        TokenKind::Func => {
            let function = parse_definition(parser)?;
            debug!(name = %function.prototype.name, "parsed function definition");
            TopLevel::Definition(function)
        }
        _ => {
            let function = parse_top_level_expr(parser)?;
            debug!(kind = function.body.kind_name(), "parsed top-level expression");
            TopLevel::Expression(function)
        }
    };

    Ok(Some(form))
}

/// Parses every top-level form of `source`.
///
/// The first error aborts the parse; nothing parsed before it is returned.
/// Operators declared along the way remain in `operators`.
pub fn parse<'a>(
    source: &'a mut dyn TokenSource,
    operators: &'a mut OperatorTable,
) -> Result<Vec<TopLevel>, Error> {
    let mut parser = Parser::new(source, operators);

    let mut forms = vec![];

    while let Some(form) = parse_top_level(&mut parser)? {
        forms.push(form);
    }

    Ok(forms)
}
