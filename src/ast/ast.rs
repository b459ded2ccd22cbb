use std::fmt::{self, Display};

use super::expressions::{
    ArrayDeclExpr, BinaryExpr, BlockExpr, CallExpr, ForExpr, IfExpr, NumberExpr, RepeatExpr,
    UnaryExpr, VariableExpr, WhileExpr,
};

/// Expression
///
/// Every SEL construct is an expression. Nodes own their children and are
/// never mutated once the parser has built them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Variable(VariableExpr),
    Call(CallExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    If(IfExpr),
    For(ForExpr),
    While(WhileExpr),
    Repeat(RepeatExpr),
    ArrayDecl(ArrayDeclExpr),
    Block(BlockExpr),
}

impl Expr {
    /// Short name of the node kind, used in log output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Number(_) => "Number",
            Expr::Variable(_) => "Variable",
            Expr::Call(_) => "Call",
            Expr::Unary(_) => "Unary",
            Expr::Binary(_) => "Binary",
            Expr::If(_) => "If",
            Expr::For(_) => "For",
            Expr::While(_) => "While",
            Expr::Repeat(_) => "Repeat",
            Expr::ArrayDecl(_) => "ArrayDecl",
            Expr::Block(_) => "Block",
        }
    }

    pub fn number(value: f64) -> Self {
        Expr::Number(NumberExpr { value })
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(VariableExpr {
            name: name.into(),
            indices: vec![],
        })
    }

    pub fn binary(operator: impl Into<String>, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Prefix rendering with explicit grouping, e.g. `a + b * c` prints as
/// `(+ a (* b c))`.
impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n.value),
            Expr::Variable(v) => {
                if v.indices.is_empty() {
                    write!(f, "{}", v.name)
                } else {
                    write!(f, "{}", v.name)?;
                    for index in &v.indices {
                        write!(f, "[{}]", index)?;
                    }
                    Ok(())
                }
            }
            Expr::Call(c) => {
                write!(f, "(call {}", c.callee)?;
                for arg in &c.args {
                    write!(f, " {}", arg)?;
                }
                write!(f, ")")
            }
            Expr::Unary(u) => write!(f, "({} {})", u.operator, u.operand),
            Expr::Binary(b) => write!(f, "({} {} {})", b.operator, b.left, b.right),
            Expr::If(i) => match &i.else_branch {
                Some(else_branch) => {
                    write!(f, "(if {} {} {})", i.condition, i.then_branch, else_branch)
                }
                None => write!(f, "(if {} {})", i.condition, i.then_branch),
            },
            Expr::For(l) => {
                write!(f, "(for {} {} {}", l.variable, l.start, l.end)?;
                if let Some(step) = &l.step {
                    write!(f, " {}", step)?;
                }
                write!(f, " {})", l.body)
            }
            Expr::While(w) => write!(f, "(while {} {})", w.condition, w.body),
            Expr::Repeat(r) => write!(f, "(rept {} {})", r.count, r.body),
            Expr::ArrayDecl(a) => {
                write!(f, "(arr {}", a.name)?;
                for dimension in &a.dimensions {
                    write!(f, "[{}]", dimension)?;
                }
                write!(f, ")")
            }
            Expr::Block(b) => {
                write!(f, "{{")?;
                write_list(f, &b.statements)?;
                write!(f, "}}")
            }
        }
    }
}
