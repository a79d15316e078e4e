//! Parsing for the CodeGo language
//!
//! Builds the syntax tree from a token sequence via recursive descent.

pub mod ast;
mod composite;
pub mod parser;
mod stmt;

pub use ast::{BinaryOp, CaseClause, Expr, Literal, Parameter, Program, Stmt};
pub use parser::Parser;
