/// AST (Abstract Syntax Tree) module
///
/// Submodules:
/// - ast: The `Expr` sum type and its printed form
/// - expressions: The node structs wrapped by each `Expr` variant
/// - functions: Prototypes, function definitions and top-level forms
pub mod ast;
pub mod expressions;
pub mod functions;
