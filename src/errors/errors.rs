use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::ExpectedIdentifier { .. } => "ExpectedIdentifier",
            ErrorImpl::UnmatchedParen => "UnmatchedParen",
            ErrorImpl::MissingArrayIndex { .. } => "MissingArrayIndex",
            ErrorImpl::InvalidArrayDimension { .. } => "InvalidArrayDimension",
            ErrorImpl::MissingArrayDimension { .. } => "MissingArrayDimension",
            ErrorImpl::ExpectedCommaOrParen { .. } => "ExpectedCommaOrParen",
            ErrorImpl::UnknownOperatorToken { .. } => "UnknownOperatorToken",
            ErrorImpl::UnterminatedBlock => "UnterminatedBlock",
            ErrorImpl::ExpectedFunctionName { .. } => "ExpectedFunctionName",
            ErrorImpl::ExpectedOperatorSymbol { .. } => "ExpectedOperatorSymbol",
            ErrorImpl::ArityMismatch { .. } => "ArityMismatch",
            ErrorImpl::ExpectedParamOrParen { .. } => "ExpectedParamOrParen",
            ErrorImpl::InvalidPrecedence { .. } => "InvalidPrecedence",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}` when expecting an expression",
                token
            )),
            ErrorImpl::ExpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("Expected `{}`, found `{}`", expected, found))
            }
            ErrorImpl::ExpectedIdentifier { found } => {
                ErrorTip::Suggestion(format!("Expected an identifier, found `{}`", found))
            }
            ErrorImpl::UnmatchedParen => {
                ErrorTip::Suggestion(String::from("expected `)` to close `(`"))
            }
            ErrorImpl::MissingArrayIndex { name } => {
                ErrorTip::Suggestion(format!("Array `{}` is indexed with an empty `[]`", name))
            }
            ErrorImpl::InvalidArrayDimension { found } => ErrorTip::Suggestion(format!(
                "Length of each dimension must be an integer of 1 or higher, found `{}`",
                found
            )),
            ErrorImpl::MissingArrayDimension { name } => {
                ErrorTip::Suggestion(format!("Array `{}` is declared without dimensions", name))
            }
            ErrorImpl::ExpectedCommaOrParen { found } => ErrorTip::Suggestion(format!(
                "Expected `)` or `,` in argument list, found `{}`",
                found
            )),
            ErrorImpl::UnknownOperatorToken { token } => {
                ErrorTip::Suggestion(format!("`{}` is not an operator character", token))
            }
            ErrorImpl::UnterminatedBlock => {
                ErrorTip::Suggestion(String::from("Block is missing its closing `}`"))
            }
            ErrorImpl::ExpectedFunctionName { found } => ErrorTip::Suggestion(format!(
                "Expected function name in prototype, found `{}`",
                found
            )),
            ErrorImpl::ExpectedOperatorSymbol { found } => ErrorTip::Suggestion(format!(
                "Expected an operator symbol after `unary` or `binary`, found `{}`",
                found
            )),
            ErrorImpl::ArityMismatch { operator, expected, received } => {
                ErrorTip::Suggestion(format!(
                    "Operator `{}` takes {} operands, received {}",
                    operator, expected, received
                ))
            }
            ErrorImpl::ExpectedParamOrParen { found } => ErrorTip::Suggestion(format!(
                "Expected `,` or `)` in parameter list, found `{}`",
                found
            )),
            ErrorImpl::InvalidPrecedence { found } => ErrorTip::Suggestion(format!(
                "Invalid precedence `{}`: must be an integer from 1 to 18",
                found
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected {expected:?}, found {found:?}")]
    ExpectedToken { expected: String, found: String },
    #[error("expected identifier, found {found:?}")]
    ExpectedIdentifier { found: String },
    #[error("unmatched parenthesis")]
    UnmatchedParen,
    #[error("array index missing for {name:?}")]
    MissingArrayIndex { name: String },
    #[error("invalid array dimension: {found:?}")]
    InvalidArrayDimension { found: String },
    #[error("array dimension missing for {name:?}")]
    MissingArrayDimension { name: String },
    #[error("expected ')' or ',' in argument list, found {found:?}")]
    ExpectedCommaOrParen { found: String },
    #[error("unknown operator token {token:?}")]
    UnknownOperatorToken { token: String },
    #[error("unterminated block")]
    UnterminatedBlock,
    #[error("expected function name in prototype, found {found:?}")]
    ExpectedFunctionName { found: String },
    #[error("expected operator symbol, found {found:?}")]
    ExpectedOperatorSymbol { found: String },
    #[error("invalid number of operands for {operator:?}: expected {expected:?}, received {received:?}")]
    ArityMismatch {
        operator: String,
        expected: usize,
        received: usize,
    },
    #[error("expected ',' or ')' in parameter list, found {found:?}")]
    ExpectedParamOrParen { found: String },
    #[error("invalid precedence {found:?}: must be 1~18")]
    InvalidPrecedence { found: String },
}
