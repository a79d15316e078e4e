//! Syntax tree rendering
//!
//! Indented textual rendering of a parsed program, consumed by the CLI
//! after a successful parse.

use crate::parser::ast::{CaseClause, Expr, Literal, Program, Stmt};

/// Render a program as a two-space-indented tree
pub fn render(program: &Program) -> String {
    let mut out = String::new();
    for stmt in &program.statements {
        write_stmt(&mut out, stmt, 0);
    }
    out
}

fn push_line(out: &mut String, level: usize, text: &str) {
    for _ in 0..level {
        out.push_str("  ");
    }
    out.push_str(text);
    out.push('\n');
}

fn write_stmt(out: &mut String, stmt: &Stmt, level: usize) {
    match stmt {
        Stmt::VarDecl {
            basic_type,
            name,
            initializer,
            ..
        } => {
            push_line(out, level, "var_declaration:");
            push_line(out, level + 1, &format!("basic_type: {}", basic_type));
            push_line(out, level + 1, &format!("identifier: {}", name));
            if let Some(expr) = initializer {
                push_line(out, level + 1, "expression:");
                write_expr(out, expr, level + 2);
            }
        }
        Stmt::Assignment { name, value, .. } => {
            push_line(out, level, "assignment:");
            push_line(out, level + 1, &format!("identifier: {}", name));
            push_line(out, level + 1, "expression:");
            write_expr(out, value, level + 2);
        }
        Stmt::Expression { expr, .. } => {
            push_line(out, level, "expression:");
            write_expr(out, expr, level + 1);
        }
        Stmt::Comment { text, .. } => {
            push_line(out, level, &format!("comment:{}", text));
        }
        Stmt::If {
            condition, body, ..
        } => {
            push_line(out, level, "kung_statement:");
            push_line(out, level + 1, "condition:");
            write_expr(out, condition, level + 2);
            push_line(out, level + 1, "statements:");
            write_body(out, body, level + 2);
        }
        Stmt::Switch {
            condition, cases, ..
        } => {
            push_line(out, level, "kapag_statement:");
            push_line(out, level + 1, "condition:");
            write_expr(out, condition, level + 2);
            push_line(out, level + 1, "cases:");
            for CaseClause { expression, body } in cases {
                push_line(out, level + 2, "kaso:");
                push_line(out, level + 3, "expression:");
                write_expr(out, expression, level + 4);
                push_line(out, level + 3, "statements:");
                write_body(out, body, level + 4);
            }
        }
        Stmt::While {
            condition, body, ..
        } => {
            push_line(out, level, "habang_statement:");
            push_line(out, level + 1, "condition:");
            write_expr(out, condition, level + 2);
            push_line(out, level + 1, "statements:");
            write_body(out, body, level + 2);
        }
        Stmt::ForEach {
            iterator,
            iterable,
            body,
            ..
        } => {
            push_line(out, level, "bawat_statement:");
            push_line(out, level + 1, &format!("iterator: {}", iterator));
            push_line(out, level + 1, &format!("iterable: {}", iterable));
            push_line(out, level + 1, "body:");
            write_body(out, body, level + 2);
        }
        Stmt::FunctionDecl {
            name,
            parameters,
            body,
            ..
        } => {
            push_line(out, level, "gawa_declaration:");
            push_line(out, level + 1, &format!("name: {}", name));
            push_line(out, level + 1, "parameters:");
            for parameter in parameters {
                match &parameter.basic_type {
                    Some(basic_type) => push_line(
                        out,
                        level + 2,
                        &format!("{} {}", basic_type, parameter.name),
                    ),
                    None => push_line(out, level + 2, &parameter.name),
                }
            }
            push_line(out, level + 1, "body:");
            write_body(out, body, level + 2);
        }
        Stmt::Call {
            name, arguments, ..
        } => {
            push_line(out, level, "gawa_invocation:");
            push_line(out, level + 1, &format!("name: {}", name));
            push_line(out, level + 1, "arguments:");
            for argument in arguments {
                write_expr(out, argument, level + 2);
            }
        }
    }
}

fn write_body(out: &mut String, body: &[Stmt], level: usize) {
    for stmt in body {
        write_stmt(out, stmt, level);
    }
}

fn write_expr(out: &mut String, expr: &Expr, level: usize) {
    match expr {
        Expr::Literal(literal) => {
            let text = match literal {
                Literal::Integer(n) => n.to_string(),
                Literal::Float(x) => x.to_string(),
                Literal::Str(s) => s.clone(),
                Literal::Boolean(raw) => raw.clone(),
            };
            push_line(out, level, &text);
        }
        Expr::Identifier(name) => {
            push_line(out, level, name);
        }
        Expr::Binary {
            operator,
            left,
            right,
        } => {
            push_line(out, level, "binary_op:");
            push_line(out, level + 1, &format!("operator: {}", operator));
            push_line(out, level + 1, "left:");
            write_expr(out, left, level + 2);
            push_line(out, level + 1, "right:");
            write_expr(out, right, level + 2);
        }
        Expr::PropertyAccess { object, property } => {
            push_line(out, level, "property_access:");
            push_line(out, level + 1, "object:");
            write_expr(out, object, level + 2);
            push_line(out, level + 1, &format!("property: {}", property));
        }
        Expr::Block(statements) => {
            push_line(out, level, "block:");
            write_body(out, statements, level + 1);
        }
        Expr::List { items } => {
            push_line(out, level, "list:");
            for item in items {
                write_expr(out, item, level + 1);
            }
        }
        Expr::Object { properties } => {
            push_line(out, level, "object:");
            for (key, value) in properties {
                push_line(out, level + 1, &format!("{}:", key));
                write_expr(out, value, level + 2);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Scanner;
    use crate::parser::Parser;

    fn render_source(source: &str) -> String {
        let tokens = Scanner::new(source).tokenize().unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        render(&program)
    }

    #[test]
    fn test_render_var_declaration() {
        let output = render_source("Numero bilang = 42");
        assert_eq!(
            output,
            "var_declaration:\n  basic_type: Numero\n  identifier: bilang\n  expression:\n    42\n"
        );
    }

    #[test]
    fn test_render_kung_statement() {
        let output = render_source("Kung (x > 5) { y = 1 }");
        assert!(output.contains("kung_statement:"));
        assert!(output.contains("operator: >"));
        assert!(output.contains("assignment:"));
    }

    #[test]
    fn test_render_nesting_is_indented() {
        let output = render_source("Habang (x < 3) { x = x + 1 }");
        assert!(output.starts_with("habang_statement:\n  condition:\n"));
        assert!(output.contains("\n  statements:\n    assignment:\n"));
    }
}
