//! Error types for the CodeGo language
//!
//! Two fatal error kinds cover the whole pipeline: `LexError` for a
//! character no lexical category matches, and `ParseError` for grammar
//! failures. There is no recovery tier; every rule propagates the first
//! error it sees.

use crate::lexer::{Token, TokenKind};
use thiserror::Error;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for the tokenizer
pub type LexResult<T> = Result<T, LexError>;

/// Result type alias for the parser
pub type ParseResult<T> = Result<T, ParseError>;

/// A character in the source matched no lexical category
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unexpected character: {character} on line {line}")]
pub struct LexError {
    pub character: char,
    pub line: usize,
}

/// A fatal grammar failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The token sequence produced zero statements
    #[error("File is empty. There is nothing to parse.")]
    EmptyInput,

    /// The dispatcher or a term saw a token no rule starts with
    #[error("Unexpected token: {token} on line {line}")]
    UnexpectedToken { token: Token, line: usize },

    /// An `eat` call mismatched
    #[error("Expected {expected}, got {found} on line {line}")]
    ExpectedToken {
        expected: TokenKind,
        found: Token,
        line: usize,
    },
}

/// Umbrella error for callers that run both phases
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodeGoError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CodeGoError {
    /// Get the error kind as a string
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Lex(_) => "Lexer Error",
            Self::Parse(_) => "Parse Error",
        }
    }

    /// Get the source line if the error carries one
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Lex(err) => Some(err.line),
            Self::Parse(ParseError::EmptyInput) => None,
            Self::Parse(ParseError::UnexpectedToken { line, .. })
            | Self::Parse(ParseError::ExpectedToken { line, .. }) => Some(*line),
        }
    }
}
