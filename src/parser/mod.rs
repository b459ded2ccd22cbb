//! Parser module for building the SEL AST.
//!
//! Turns a token source into expressions, prototypes and function
//! definitions. Binary expressions are parsed by precedence climbing over a
//! mutable [`operators::OperatorTable`], so operators declared with
//! `binary` prototypes take effect immediately:
//!
//! - Primary expressions (literals, variables, calls, arrays, control flow)
//! - Prefix operators drawn from the operator character set
//! - Binary operators, one or two characters, with table-driven precedence
//! - Blocks, prototypes, definitions and top-level expressions

pub mod expr;
pub mod functions;
pub mod lookups;
pub mod operators;
pub mod parser;
pub mod stmt;
