/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST traits and wrapper types
/// - expressions: Definitions for the expression node kinds
/// - statements: Definitions for the statement node kinds and the Program root
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
