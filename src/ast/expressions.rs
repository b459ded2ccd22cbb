use super::ast::Expr;

// LITERALS

/// Number Expression
/// Represents a numeric literal. All SEL numbers are doubles.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
}

/// Variable Expression
/// A scalar reference when `indices` is empty, otherwise an array element
/// with one index expression per dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
    pub indices: Vec<Expr>,
}

impl VariableExpr {
    pub fn is_array_element(&self) -> bool {
        !self.indices.is_empty()
    }
}

/// Array Declaration Expression
/// `arr name[d1][d2]...`, every dimension a literal of 1 or higher.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayDeclExpr {
    pub name: String,
    pub dimensions: Vec<u32>,
}

impl ArrayDeclExpr {
    /// Total number of elements across all dimensions.
    pub fn element_count(&self) -> u64 {
        self.dimensions.iter().map(|d| *d as u64).product()
    }
}

// OPERATORS

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: char,
    pub operand: Box<Expr>,
}

/// Binary Expression
/// `operator` is one or two symbol characters, e.g. `+` or `<=`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub args: Vec<Expr>,
}

// CONTROL FLOW

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub then_branch: Box<Expr>,
    pub else_branch: Option<Box<Expr>>,
}

/// For Expression
/// `for variable = start, end(, step)? body`
#[derive(Debug, Clone, PartialEq)]
pub struct ForExpr {
    pub variable: String,
    pub start: Box<Expr>,
    pub end: Box<Expr>,
    pub step: Option<Box<Expr>>,
    pub body: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileExpr {
    pub condition: Box<Expr>,
    pub body: Box<Expr>,
}

/// Repeat Expression
/// `rept (count) body` runs `body` a fixed number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatExpr {
    pub count: Box<Expr>,
    pub body: Box<Expr>,
}

/// Block Expression
/// Statements are kept in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockExpr {
    pub statements: Vec<Expr>,
}
