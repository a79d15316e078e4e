//! Parser driver for the CodeGo language
//!
//! Recursive-descent over the token sequence with a single cursor and
//! one token of lookahead (two for the identifier/call split). Every
//! rule consumes input only through `eat`, `current`, and `peek`; the
//! first error is propagated unmodified, with no backtracking and no
//! recovery.

use super::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{Token, TokenKind, TokenValue};

/// Parser for a CodeGo token sequence
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Synthesized terminator for cursor positions past the end
    eof: Token,
}

impl Parser {
    /// Create a new parser from tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        let line = tokens.last().map(|t| t.line).unwrap_or(1);
        Self {
            tokens,
            pos: 0,
            eof: Token::new(TokenKind::Eof, TokenValue::None, line),
        }
    }

    /// Parse the token sequence into a program
    ///
    /// Fails with `ParseError::EmptyInput` when zero statements are
    /// produced. Comments count as statements, so a comment-only file
    /// is not empty.
    pub fn parse(&mut self) -> ParseResult<Program> {
        let statements = self.statements()?;
        if statements.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        Ok(Program { statements })
    }

    /// Parse statements until `EOF`, a closing brace, or `Hinto`.
    /// Nested blocks and case bodies stop here without an explicit end
    /// marker.
    pub(crate) fn statements(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();
        while !matches!(
            self.current().kind,
            TokenKind::Eof | TokenKind::RBrace | TokenKind::Hinto
        ) {
            statements.push(self.statement()?);
        }
        Ok(statements)
    }

    /// Dispatch one statement on the current token's kind
    fn statement(&mut self) -> ParseResult<Stmt> {
        match self.current().kind {
            TokenKind::BasicType => self.var_declaration(),
            TokenKind::Comment => self.comment_statement(),
            TokenKind::Identifier => {
                // One extra token of lookahead for the call form
                if self.peek().kind == TokenKind::LParen {
                    self.invocation()
                } else {
                    self.expression_statement()
                }
            }
            TokenKind::Kung => self.kung_statement(),
            TokenKind::Kapag => self.kapag_statement(),
            TokenKind::Habang => self.habang_statement(),
            TokenKind::Bawat => self.bawat_statement(),
            TokenKind::Gawa => self.gawa_declaration(),
            _ => Err(self.unexpected()),
        }
    }

    // ===== Expression grammar =====

    /// One term, then a left-associative fold over the flat operator
    /// level `+ - > < >= <=`. `*` and `/` are deliberately absent; an
    /// expression using them is rejected by the dispatcher or by
    /// `term`, never silently accepted.
    pub(crate) fn expression(&mut self) -> ParseResult<Expr> {
        let mut expr = self.term()?;
        loop {
            let operator = match self.current().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Subtract,
                TokenKind::Greater => BinaryOp::Greater,
                TokenKind::Less => BinaryOp::Less,
                TokenKind::GreaterEqual => BinaryOp::GreaterEqual,
                TokenKind::LessEqual => BinaryOp::LessEqual,
                _ => break,
            };
            let kind = self.current().kind;
            self.eat(kind)?;
            let right = self.term()?;
            expr = Expr::Binary {
                operator,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    /// An atomic operand: identifier with optional `.` chain, literal,
    /// parenthesized expression, or a brace block used as a term
    pub(crate) fn term(&mut self) -> ParseResult<Expr> {
        match self.current().kind {
            TokenKind::Identifier => {
                let name = self.eat(TokenKind::Identifier)?.text().to_string();
                let mut result = Expr::Identifier(name);
                while self.current().kind == TokenKind::Dot {
                    self.eat(TokenKind::Dot)?;
                    let property = self.eat(TokenKind::Identifier)?.text().to_string();
                    result = Expr::PropertyAccess {
                        object: Box::new(result),
                        property,
                    };
                }
                Ok(result)
            }
            TokenKind::Numero | TokenKind::Tsek | TokenKind::Teksto => {
                let kind = self.current().kind;
                let token = self.eat(kind)?;
                Ok(Expr::Literal(literal_value(&token)))
            }
            TokenKind::LParen => {
                self.eat(TokenKind::LParen)?;
                let expr = self.expression()?;
                self.eat(TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::LBrace => {
                self.eat(TokenKind::LBrace)?;
                let statements = self.statements()?;
                self.eat(TokenKind::RBrace)?;
                Ok(Expr::Block(statements))
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Call arguments: identifiers (with optional property-access
    /// chains) and literal tokens, comma separated, stopping at `)`
    pub(crate) fn arguments(&mut self) -> ParseResult<Vec<Expr>> {
        let mut args = Vec::new();
        while self.current().kind != TokenKind::RParen {
            if self.current().kind == TokenKind::Identifier {
                let name = self.eat(TokenKind::Identifier)?.text().to_string();
                let mut result = Expr::Identifier(name);
                while self.current().kind == TokenKind::Dot {
                    self.eat(TokenKind::Dot)?;
                    let property = self.eat(TokenKind::Identifier)?.text().to_string();
                    result = Expr::PropertyAccess {
                        object: Box::new(result),
                        property,
                    };
                }
                args.push(result);
            }
            if matches!(
                self.current().kind,
                TokenKind::Numero | TokenKind::Teksto | TokenKind::Tsek
            ) {
                let kind = self.current().kind;
                let token = self.eat(kind)?;
                args.push(Expr::Literal(literal_value(&token)));
            }
            if self.current().kind != TokenKind::RParen {
                self.eat(TokenKind::Comma)?;
            }
        }
        Ok(args)
    }

    /// Declaration parameters: zero or more comma-separated entries of
    /// optional `BASIC_TYPE` plus required identifier, stopping at `)`
    pub(crate) fn parameters(&mut self) -> ParseResult<Vec<Parameter>> {
        let mut parameters = Vec::new();
        while self.current().kind != TokenKind::RParen {
            let basic_type = if self.current().kind == TokenKind::BasicType {
                Some(self.eat(TokenKind::BasicType)?.text().to_string())
            } else {
                None
            };
            let name = self.eat(TokenKind::Identifier)?.text().to_string();
            parameters.push(Parameter { basic_type, name });

            if self.current().kind == TokenKind::Comma {
                self.eat(TokenKind::Comma)?;
            } else {
                break;
            }
        }
        Ok(parameters)
    }

    // ===== Cursor primitives =====

    /// Consume the current token if its kind matches, advancing the
    /// cursor; the sole consuming primitive of the grammar
    pub(crate) fn eat(&mut self, expected: TokenKind) -> ParseResult<Token> {
        let current = self.current();
        if current.kind == expected {
            let token = current.clone();
            self.pos += 1;
            Ok(token)
        } else {
            Err(ParseError::ExpectedToken {
                expected,
                found: current.clone(),
                line: current.line,
            })
        }
    }

    /// The next unconsumed token
    pub(crate) fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// One token past the current one
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos + 1).unwrap_or(&self.eof)
    }

    pub(crate) fn unexpected(&self) -> ParseError {
        let token = self.current().clone();
        ParseError::UnexpectedToken {
            line: token.line,
            token,
        }
    }
}

/// Literal payload of a consumed `NUMERO`/`TEKSTO`/`TSEK` token
pub(crate) fn literal_value(token: &Token) -> Literal {
    match &token.value {
        TokenValue::Integer(n) => Literal::Integer(*n),
        TokenValue::Float(x) => Literal::Float(*x),
        _ => match token.kind {
            TokenKind::Tsek => Literal::Boolean(token.text().to_string()),
            _ => Literal::Str(token.text().to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Scanner;
    use pretty_assertions::assert_eq;

    fn parse_source(source: &str) -> ParseResult<Program> {
        let tokens = Scanner::new(source).tokenize().unwrap();
        Parser::new(tokens).parse()
    }

    fn initializer_of(program: &Program) -> &Expr {
        match &program.statements[0] {
            Stmt::VarDecl {
                initializer: Some(expr),
                ..
            } => expr,
            other => panic!("expected initialized declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_token_sequence() {
        let err = Parser::new(Vec::new()).parse().unwrap_err();
        assert_eq!(err, ParseError::EmptyInput);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let err = parse_source("  \n\n\t ").unwrap_err();
        assert_eq!(err, ParseError::EmptyInput);
    }

    #[test]
    fn test_comment_only_file_is_not_empty() {
        let program = parse_source("# puna lang").unwrap();
        assert_eq!(
            program.statements,
            vec![Stmt::Comment {
                text: " puna lang".to_string(),
                line: 1,
            }]
        );
    }

    #[test]
    fn test_left_associative_fold() {
        let program = parse_source("Numero t = a > b > c").unwrap();
        assert_eq!(
            initializer_of(&program),
            &Expr::Binary {
                operator: BinaryOp::Greater,
                left: Box::new(Expr::Binary {
                    operator: BinaryOp::Greater,
                    left: Box::new(Expr::Identifier("a".to_string())),
                    right: Box::new(Expr::Identifier("b".to_string())),
                }),
                right: Box::new(Expr::Identifier("c".to_string())),
            }
        );
    }

    #[test]
    fn test_flat_precedence_mixes_arithmetic_and_comparison() {
        // a + b > c folds left to right; there is no precedence split
        let program = parse_source("Numero t = a + b > c").unwrap();
        assert_eq!(
            initializer_of(&program),
            &Expr::Binary {
                operator: BinaryOp::Greater,
                left: Box::new(Expr::Binary {
                    operator: BinaryOp::Add,
                    left: Box::new(Expr::Identifier("a".to_string())),
                    right: Box::new(Expr::Identifier("b".to_string())),
                }),
                right: Box::new(Expr::Identifier("c".to_string())),
            }
        );
    }

    #[test]
    fn test_parenthesized_term_unwraps() {
        let program = parse_source("Numero t = (a + b)").unwrap();
        assert_eq!(
            initializer_of(&program),
            &Expr::Binary {
                operator: BinaryOp::Add,
                left: Box::new(Expr::Identifier("a".to_string())),
                right: Box::new(Expr::Identifier("b".to_string())),
            }
        );
    }

    #[test]
    fn test_block_valued_term() {
        let program = parse_source("Bagay t = { x = 5 }").unwrap();
        assert_eq!(
            initializer_of(&program),
            &Expr::Block(vec![Stmt::Assignment {
                name: "x".to_string(),
                value: Expr::Literal(Literal::Integer(5)),
                line: 1,
            }])
        );
    }

    #[test]
    fn test_property_access_chain_in_term() {
        let program = parse_source("Bagay t = luto.ulam.presyo").unwrap();
        assert_eq!(
            initializer_of(&program),
            &Expr::PropertyAccess {
                object: Box::new(Expr::PropertyAccess {
                    object: Box::new(Expr::Identifier("luto".to_string())),
                    property: "ulam".to_string(),
                }),
                property: "presyo".to_string(),
            }
        );
    }

    #[test]
    fn test_times_is_rejected() {
        // `*` is tokenized but no rule consumes it
        let err = parse_source("Numero t = a * b").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken { token, .. } if token.kind == TokenKind::Times
        ));
    }

    #[test]
    fn test_divide_is_rejected_in_term_position() {
        let err = parse_source("Numero t = / b").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken { token, .. } if token.kind == TokenKind::Divide
        ));
    }

    #[test]
    fn test_dispatcher_rejects_unknown_start() {
        let err = parse_source("+").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken { token, line: 1 } if token.kind == TokenKind::Plus
        ));
    }

    #[test]
    fn test_eat_mismatch_reports_expected() {
        // `Kung` without its parenthesized condition
        let err = parse_source("Kung { }").unwrap_err();
        assert!(matches!(
            err,
            ParseError::ExpectedToken {
                expected: TokenKind::LParen,
                ..
            }
        ));
    }

    #[test]
    fn test_arguments_mix_identifiers_and_literals() {
        let program = parse_source("luto(ulam, 5, \"init\", Tama, kusina.apoy)").unwrap();
        assert_eq!(
            program.statements,
            vec![Stmt::Call {
                name: "luto".to_string(),
                arguments: vec![
                    Expr::Identifier("ulam".to_string()),
                    Expr::Literal(Literal::Integer(5)),
                    Expr::Literal(Literal::Str("init".to_string())),
                    Expr::Literal(Literal::Boolean("Tama".to_string())),
                    Expr::PropertyAccess {
                        object: Box::new(Expr::Identifier("kusina".to_string())),
                        property: "apoy".to_string(),
                    },
                ],
                line: 1,
            }]
        );
    }

    #[test]
    fn test_empty_argument_list() {
        let program = parse_source("simula()").unwrap();
        assert_eq!(
            program.statements,
            vec![Stmt::Call {
                name: "simula".to_string(),
                arguments: Vec::new(),
                line: 1,
            }]
        );
    }
}
