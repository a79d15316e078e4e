//! Statement-kind grammar rules
//!
//! One rule per statement shape. Each rule consumes its leading
//! keyword, the fixed punctuation of its shape, and recurses into
//! `expression` / `statements` for its payload.

use super::ast::*;
use super::parser::Parser;
use crate::error::ParseResult;
use crate::lexer::TokenKind;

impl Parser {
    /// `BASIC_TYPE IDENTIFIER ['=' (list-literal | expression)]`
    ///
    /// A list literal is accepted in place of a general expression only
    /// when the declared type is `Lista` and a `[` follows the `=`.
    pub(crate) fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let type_token = self.eat(TokenKind::BasicType)?;
        let line = type_token.line;
        let basic_type = type_token.text().to_string();
        let name = self.eat(TokenKind::Identifier)?.text().to_string();

        let mut initializer = None;
        if self.current().kind == TokenKind::Equals {
            self.eat(TokenKind::Equals)?;
            initializer = Some(
                if basic_type == "Lista" && self.current().kind == TokenKind::LBracket {
                    self.list_literal()?
                } else {
                    self.expression()?
                },
            );
        }

        Ok(Stmt::VarDecl {
            basic_type,
            name,
            initializer,
            line,
        })
    }

    /// Wrap a comment token as a statement node
    pub(crate) fn comment_statement(&mut self) -> ParseResult<Stmt> {
        let token = self.eat(TokenKind::Comment)?;
        Ok(Stmt::Comment {
            text: token.text().to_string(),
            line: token.line,
        })
    }

    /// Assignment or bare expression in statement position
    ///
    /// The identifier path stops after the identifier on purpose: a
    /// bare `a.b` or `a > b` statement is not reachable here, and the
    /// dangling operator is rejected by the dispatcher instead.
    pub(crate) fn expression_statement(&mut self) -> ParseResult<Stmt> {
        if self.current().kind == TokenKind::Identifier {
            let ident = self.eat(TokenKind::Identifier)?;
            if self.current().kind == TokenKind::Equals {
                self.eat(TokenKind::Equals)?;
                let value = self.expression()?;
                Ok(Stmt::Assignment {
                    name: ident.text().to_string(),
                    value,
                    line: ident.line,
                })
            } else {
                Ok(Stmt::Expression {
                    expr: Expr::Identifier(ident.text().to_string()),
                    line: ident.line,
                })
            }
        } else {
            let line = self.current().line;
            let expr = self.expression()?;
            Ok(Stmt::Expression { expr, line })
        }
    }

    /// `Kung '(' expression ')' '{' statements '}'` — no else branch
    pub(crate) fn kung_statement(&mut self) -> ParseResult<Stmt> {
        let line = self.eat(TokenKind::Kung)?.line;
        self.eat(TokenKind::LParen)?;
        let condition = self.expression()?;
        self.eat(TokenKind::RParen)?;

        self.eat(TokenKind::LBrace)?;
        let body = self.statements()?;
        self.eat(TokenKind::RBrace)?;

        Ok(Stmt::If {
            condition,
            body,
            line,
        })
    }

    /// `Kapag '(' expression ')' '{' (Kaso expression ':' statements
    /// Hinto)* '}'`
    ///
    /// Every case is closed by an explicit `Hinto`; a missing
    /// terminator is a hard parse error, never a fall-through.
    pub(crate) fn kapag_statement(&mut self) -> ParseResult<Stmt> {
        let line = self.eat(TokenKind::Kapag)?.line;
        self.eat(TokenKind::LParen)?;
        let condition = self.expression()?;
        self.eat(TokenKind::RParen)?;

        self.eat(TokenKind::LBrace)?;
        let mut cases = Vec::new();
        while self.current().kind == TokenKind::Kaso {
            self.eat(TokenKind::Kaso)?;
            let expression = self.expression()?;
            self.eat(TokenKind::Colon)?;
            let body = self.statements()?;
            self.eat(TokenKind::Hinto)?;
            cases.push(CaseClause { expression, body });
        }
        self.eat(TokenKind::RBrace)?;

        Ok(Stmt::Switch {
            condition,
            cases,
            line,
        })
    }

    /// `Habang '(' expression ')' '{' statements '}'`
    pub(crate) fn habang_statement(&mut self) -> ParseResult<Stmt> {
        let line = self.eat(TokenKind::Habang)?.line;
        self.eat(TokenKind::LParen)?;
        let condition = self.expression()?;
        self.eat(TokenKind::RParen)?;

        self.eat(TokenKind::LBrace)?;
        let body = self.statements()?;
        self.eat(TokenKind::RBrace)?;

        Ok(Stmt::While {
            condition,
            body,
            line,
        })
    }

    /// `Bawat '(' IDENTIFIER Sa IDENTIFIER ')' '{' statements '}'`
    ///
    /// Both the loop variable and the iterable must be bare
    /// identifiers.
    pub(crate) fn bawat_statement(&mut self) -> ParseResult<Stmt> {
        let line = self.eat(TokenKind::Bawat)?.line;
        self.eat(TokenKind::LParen)?;
        let iterator = self.eat(TokenKind::Identifier)?.text().to_string();
        self.eat(TokenKind::Sa)?;
        let iterable = self.eat(TokenKind::Identifier)?.text().to_string();
        self.eat(TokenKind::RParen)?;

        self.eat(TokenKind::LBrace)?;
        let body = self.statements()?;
        self.eat(TokenKind::RBrace)?;

        Ok(Stmt::ForEach {
            iterator,
            iterable,
            body,
            line,
        })
    }

    /// `Gawa IDENTIFIER '(' parameters ')' '{' statements '}'`
    pub(crate) fn gawa_declaration(&mut self) -> ParseResult<Stmt> {
        let line = self.eat(TokenKind::Gawa)?.line;
        let name = self.eat(TokenKind::Identifier)?.text().to_string();

        self.eat(TokenKind::LParen)?;
        let parameters = self.parameters()?;
        self.eat(TokenKind::RParen)?;

        self.eat(TokenKind::LBrace)?;
        let body = self.statements()?;
        self.eat(TokenKind::RBrace)?;

        Ok(Stmt::FunctionDecl {
            name,
            parameters,
            body,
            line,
        })
    }

    /// `IDENTIFIER '(' arguments ')'` in statement position
    pub(crate) fn invocation(&mut self) -> ParseResult<Stmt> {
        let ident = self.eat(TokenKind::Identifier)?;
        self.eat(TokenKind::LParen)?;
        let arguments = self.arguments()?;
        self.eat(TokenKind::RParen)?;

        Ok(Stmt::Call {
            name: ident.text().to_string(),
            arguments,
            line: ident.line,
        })
    }
}
