//! Lexical analysis for the CodeGo language
//!
//! Converts source text into the token sequence the parser consumes.

pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind, TokenValue};
