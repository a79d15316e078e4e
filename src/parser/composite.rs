//! Composite literal rules: lists and objects
//!
//! A list literal is reachable only from a `Lista` declaration whose
//! initializer starts with `[`. The rule keeps object items and
//! separating commas; anything else between the brackets is consumed
//! and dropped, a documented limitation of this grammar.

use super::ast::Expr;
use super::parser::Parser;
use crate::error::ParseResult;
use crate::lexer::TokenKind;
use indexmap::IndexMap;

impl Parser {
    /// `'[' (object-literal | ',')* ']'`
    pub(crate) fn list_literal(&mut self) -> ParseResult<Expr> {
        self.eat(TokenKind::LBracket)?;

        let mut items = Vec::new();
        // Stopping at EOF turns an unterminated list into an
        // ExpectedToken on the closing bracket
        while !matches!(self.current().kind, TokenKind::RBracket | TokenKind::Eof) {
            if self.current().kind == TokenKind::LBrace {
                items.push(self.object_literal()?);
            } else if self.current().kind != TokenKind::Comma {
                // Scalar list items are dropped, not kept
                let kind = self.current().kind;
                self.eat(kind)?;
            }

            if self.current().kind == TokenKind::Comma {
                self.eat(TokenKind::Comma)?;
            }
        }

        self.eat(TokenKind::RBracket)?;
        Ok(Expr::List { items })
    }

    /// `'{' (IDENTIFIER ':' expression (',')?)* '}'`
    ///
    /// Properties keep insertion order; a duplicate name overwrites the
    /// earlier entry in place.
    pub(crate) fn object_literal(&mut self) -> ParseResult<Expr> {
        self.eat(TokenKind::LBrace)?;

        let mut properties = IndexMap::new();
        while !matches!(self.current().kind, TokenKind::RBrace | TokenKind::Eof) {
            let key = self.eat(TokenKind::Identifier)?.text().to_string();
            self.eat(TokenKind::Colon)?;
            let value = self.expression()?;
            properties.insert(key, value);

            if self.current().kind == TokenKind::Comma {
                self.eat(TokenKind::Comma)?;
            }
        }

        self.eat(TokenKind::RBrace)?;
        Ok(Expr::Object { properties })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::lexer::Scanner;
    use crate::parser::ast::{Literal, Program, Stmt};
    use pretty_assertions::assert_eq;

    fn parse_source(source: &str) -> ParseResult<Program> {
        let tokens = Scanner::new(source).tokenize().unwrap();
        Parser::new(tokens).parse()
    }

    fn list_items(program: &Program) -> &[Expr] {
        match &program.statements[0] {
            Stmt::VarDecl {
                initializer: Some(Expr::List { items }),
                ..
            } => items,
            other => panic!("expected list declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_list_of_objects() {
        let source = "Lista hapag = [{ulam: \"adobo\", presyo: 120}, {ulam: \"sinigang\"}]";
        let program = parse_source(source).unwrap();
        let items = list_items(&program);
        assert_eq!(items.len(), 2);

        let mut first = IndexMap::new();
        first.insert(
            "ulam".to_string(),
            Expr::Literal(Literal::Str("adobo".to_string())),
        );
        first.insert("presyo".to_string(), Expr::Literal(Literal::Integer(120)));
        assert_eq!(items[0], Expr::Object { properties: first });
    }

    #[test]
    fn test_scalar_list_items_are_dropped() {
        let program = parse_source("Lista mga_bilang = [1, 2, 3]").unwrap();
        assert_eq!(list_items(&program), &[] as &[Expr]);
    }

    #[test]
    fn test_mixed_list_keeps_only_objects() {
        let program = parse_source("Lista halo = [1, {ulam: \"adobo\"}, \"teksto\"]").unwrap();
        let items = list_items(&program);
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], Expr::Object { .. }));
    }

    #[test]
    fn test_empty_list() {
        let program = parse_source("Lista wala = []").unwrap();
        assert_eq!(list_items(&program), &[] as &[Expr]);
    }

    #[test]
    fn test_unterminated_list_is_an_error() {
        let err = parse_source("Lista sira = [{ulam: \"adobo\"}").unwrap_err();
        assert!(matches!(
            err,
            ParseError::ExpectedToken {
                expected: TokenKind::RBracket,
                ..
            }
        ));
    }

    #[test]
    fn test_object_preserves_insertion_order() {
        let source = "Lista isa = [{una: 1, pangalawa: 2, pangatlo: 3}]";
        let program = parse_source(source).unwrap();
        match &list_items(&program)[0] {
            Expr::Object { properties } => {
                let keys: Vec<&str> = properties.keys().map(String::as_str).collect();
                assert_eq!(keys, vec!["una", "pangalawa", "pangatlo"]);
            }
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_property_overwrites() {
        let source = "Lista isa = [{ulam: 1, ulam: 2}]";
        let program = parse_source(source).unwrap();
        match &list_items(&program)[0] {
            Expr::Object { properties } => {
                assert_eq!(properties.len(), 1);
                assert_eq!(
                    properties.get("ulam"),
                    Some(&Expr::Literal(Literal::Integer(2)))
                );
            }
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_object_property_without_key_is_an_error() {
        let err = parse_source("Lista sira = [{5: 1}]").unwrap_err();
        assert!(matches!(
            err,
            ParseError::ExpectedToken {
                expected: TokenKind::Identifier,
                ..
            }
        ));
    }
}
