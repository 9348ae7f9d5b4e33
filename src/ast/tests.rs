//! Unit tests for the AST module.
//!
//! These tests construct nodes by hand and check the textual rendering
//! contract that diagnostics and the shell rely on.

use crate::lexer::tokens::{Token, TokenKind};

use super::{
    ast::{ExprWrapper, Stmt, StmtWrapper},
    expressions::Identifier,
    statements::{ExpressionStatement, LetStatement, Program, ReturnStatement},
};

fn identifier(name: &str) -> Identifier {
    Identifier {
        token: Token {
            kind: TokenKind::Identifier,
            value: name.to_string(),
        },
        value: name.to_string(),
    }
}

#[test]
fn test_render_let_statement() {
    let program = Program {
        statements: vec![StmtWrapper::new(LetStatement {
            token: Token {
                kind: TokenKind::Let,
                value: "let".to_string(),
            },
            name: identifier("myVar"),
            value: Some(ExprWrapper::new(identifier("anotherVar"))),
        })],
    };

    assert_eq!(program.render(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_render_return_statement() {
    let program = Program {
        statements: vec![StmtWrapper::new(ReturnStatement {
            token: Token {
                kind: TokenKind::Return,
                value: "return".to_string(),
            },
            value: Some(ExprWrapper::new(identifier("myVar"))),
        })],
    };

    assert_eq!(program.render(), "return myVar;");
}

#[test]
fn test_render_expression_statement() {
    let stmt = ExpressionStatement {
        token: Token {
            kind: TokenKind::Identifier,
            value: "foobar".to_string(),
        },
        expression: Some(ExprWrapper::new(identifier("foobar"))),
    };

    assert_eq!(stmt.render(), "foobar");

    let empty = ExpressionStatement {
        token: Token {
            kind: TokenKind::Identifier,
            value: "foobar".to_string(),
        },
        expression: None,
    };

    assert_eq!(empty.render(), "");
}

#[test]
fn test_empty_program_token_literal() {
    let program = Program::default();

    assert_eq!(program.token_literal(), "");
    assert_eq!(program.render(), "");
}

#[test]
fn test_clone_is_deep() {
    let stmt = StmtWrapper::new(LetStatement {
        token: Token {
            kind: TokenKind::Let,
            value: "let".to_string(),
        },
        name: identifier("x"),
        value: Some(ExprWrapper::new(identifier("y"))),
    });

    let cloned = stmt.clone();

    assert_eq!(cloned.render(), stmt.render());
    assert_eq!(cloned.token_literal(), "let");
}
