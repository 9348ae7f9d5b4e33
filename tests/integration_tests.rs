//! Integration tests for the front end.
//!
//! These tests drive the public surface end-to-end: raw source text in,
//! (Program, diagnostics) out.

use minilang::ast::ast::{Stmt, StmtType};
use minilang::ast::statements::LetStatement;
use minilang::lexer::lexer::Lexer;
use minilang::lexer::tokens::TokenKind;
use minilang::parser::parser::{parse, Parser};

#[test]
fn test_parse_program_from_source() {
    let source = "let x = 5;\nlet y = 10;\nlet foobar = 838383;".to_string();
    let (program, errors) = parse(source);

    assert!(errors.is_empty(), "parser has errors: {:?}", errors);
    assert_eq!(program.statements.len(), 3);
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_parse_recovers_after_malformed_statement() {
    // The bad let statement is dropped and recorded; parsing picks up
    // again and the following statements come through intact.
    let source = "let x 5;\nlet y = 10;\nreturn 7;".to_string();
    let (program, errors) = parse(source);

    assert_eq!(errors.len(), 1);

    let let_names: Vec<String> = program
        .iter()
        .filter_map(|stmt| stmt.as_any().downcast_ref::<LetStatement>())
        .map(|let_stmt| let_stmt.name.value.clone())
        .collect();
    assert_eq!(let_names, vec!["y"]);

    assert!(program
        .iter()
        .any(|stmt| stmt.get_stmt_type() == StmtType::ReturnStmt));
}

#[test]
fn test_parse_accepts_illegal_tokens_from_lexer() {
    // Unrecognized bytes surface as Illegal tokens; the parser turns the
    // statement around them into an empty expression statement rather
    // than failing the whole parse.
    let (program, _errors) = parse("@;".to_string());

    assert_eq!(program.statements.len(), 1);
    assert_eq!(
        program.statements[0].get_stmt_type(),
        StmtType::ExpressionStmt
    );
}

#[test]
fn test_line_by_line_framing() {
    // The shell feeds one line at a time; the core makes no assumption
    // about framing, so per-line parses behave like a whole-buffer parse.
    let lines = ["let x = 5;", "let y = 10;"];

    let mut total = 0;
    for line in lines {
        let (program, errors) = parse(line.to_string());
        assert!(errors.is_empty());
        total += program.statements.len();
    }

    assert_eq!(total, 2);
}

#[test]
fn test_parser_over_exhausted_lexer() {
    let mut lexer = Lexer::new("x".to_string());
    while lexer.next_token().kind != TokenKind::EOF {}

    // A parser over an exhausted lexer just sees EOF and produces an
    // empty program, not an error.
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.statements.len(), 0);
}
