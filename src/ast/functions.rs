use std::fmt::{self, Display};

use super::ast::Expr;

/// Name given to the prototype wrapped around a top-level expression.
pub const ANONYMOUS_FUNCTION: &str = "__anon_expr";

/// Precedence of a `binary` operator declared without an explicit one.
pub const DEFAULT_BINARY_PRECEDENCE: u32 = 18;

/// Prototype
///
/// The signature of a callable. Operator declarations are prototypes too:
/// `unary!` has one parameter, `binary<=` has two and carries the
/// precedence it was declared with.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
    pub is_operator: bool,
    pub precedence: u32,
}

impl Prototype {
    pub fn function(name: impl Into<String>, params: Vec<String>) -> Self {
        Prototype {
            name: name.into(),
            params,
            is_operator: false,
            precedence: DEFAULT_BINARY_PRECEDENCE,
        }
    }

    pub fn anonymous() -> Self {
        Prototype::function(ANONYMOUS_FUNCTION, vec![])
    }

    pub fn is_unary_op(&self) -> bool {
        self.is_operator && self.params.len() == 1
    }

    pub fn is_binary_op(&self) -> bool {
        self.is_operator && self.params.len() == 2
    }

    /// The operator spelling of an operator prototype, `None` for plain
    /// functions.
    pub fn operator_name(&self) -> Option<&str> {
        if self.is_unary_op() {
            self.name.strip_prefix("unary")
        } else if self.is_binary_op() {
            self.name.strip_prefix("binary")
        } else {
            None
        }
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.params.join(", "))?;
        if self.is_binary_op() {
            write!(f, " [precedence {}]", self.precedence)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub prototype: Prototype,
    pub body: Expr,
}

impl Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.prototype, self.body)
    }
}

/// One top-level form of a program.
#[derive(Debug, Clone, PartialEq)]
pub enum TopLevel {
    /// `func proto body`
    Definition(Function),
    /// A bare expression wrapped in an anonymous prototype.
    Expression(Function),
}

impl TopLevel {
    pub fn function(&self) -> &Function {
        match self {
            TopLevel::Definition(function) | TopLevel::Expression(function) => function,
        }
    }
}
