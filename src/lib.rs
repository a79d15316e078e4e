//! # CodeGo
//!
//! Lexer and recursive-descent parser for CodeGo, a small scripting
//! language with Filipino keywords (`Kung`, `Habang`, `Bawat`, `Gawa`,
//! ...).
//!
//! ## Architecture
//!
//! The implementation is organized into a few modules:
//! - `lexer`: tokenization via an ordered table of lexical categories
//! - `parser`: recursive-descent parsing into a syntax tree
//! - `printer`: indented rendering of the tree for the CLI
//! - `error`: the two fatal error kinds and diagnostic formatting
//!
//! The core performs no semantic analysis, no evaluation and no code
//! generation; a successful run is a syntax check that yields the tree.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;

// Re-export commonly used types
pub use error::{CodeGoError, Diagnostic, LexError, LexResult, ParseError, ParseResult};
pub use lexer::{Scanner, Token, TokenKind, TokenValue};
pub use parser::{Parser, Program};

/// Version of the CodeGo implementation
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize CodeGo source text
///
/// Produces the ordered token sequence ending in `EOF`, or the first
/// `LexError`.
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    Scanner::new(source).tokenize()
}

/// Parse a token sequence into a program
pub fn parse(tokens: Vec<Token>) -> ParseResult<Program> {
    Parser::new(tokens).parse()
}

/// Tokenize and parse in one step
pub fn parse_source(source: &str) -> Result<Program, CodeGoError> {
    let tokens = tokenize(source)?;
    Ok(parse(tokens)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parser::{Expr, Literal, Stmt};

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_pipeline_end_to_end() {
        let source = "Numero bilang = 0\n\
                      Habang (bilang < 3) {\n\
                      bilang = bilang + 1\n\
                      }\n\
                      ipakita(bilang)";
        let program = parse_source(source).unwrap();
        assert_eq!(program.statements.len(), 3);
        assert!(matches!(program.statements[0], Stmt::VarDecl { .. }));
        assert!(matches!(program.statements[1], Stmt::While { .. }));
        assert!(matches!(program.statements[2], Stmt::Call { .. }));
    }

    #[test]
    fn test_pipeline_surfaces_lex_error() {
        let err = parse_source("Numero x = ~").unwrap_err();
        assert_eq!(
            err,
            CodeGoError::Lex(LexError {
                character: '~',
                line: 1
            })
        );
    }

    #[test]
    fn test_pipeline_surfaces_parse_error() {
        let err = parse_source("").unwrap_err();
        assert_eq!(err, CodeGoError::Parse(ParseError::EmptyInput));
    }

    #[test]
    fn test_literal_values_decode() {
        let program = parse_source("Numero x = 5\nDesimal y = 2.5").unwrap();
        let values: Vec<&Expr> = program
            .statements
            .iter()
            .filter_map(|stmt| match stmt {
                Stmt::VarDecl {
                    initializer: Some(expr),
                    ..
                } => Some(expr),
                _ => None,
            })
            .collect();
        assert_eq!(values[0], &Expr::Literal(Literal::Integer(5)));
        assert_eq!(values[1], &Expr::Literal(Literal::Float(2.5)));
    }
}
