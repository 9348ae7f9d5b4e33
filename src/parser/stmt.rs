use crate::{
    ast::{
        ast::StmtWrapper,
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::Precedence},
};

use super::parser::Parser;

/// Dispatches on the current token kind. Anything that is not a `let` or
/// `return` keyword is treated as an expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    match parser.cur_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let let_token = parser.cur_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }

    let name = Identifier {
        token: parser.cur_token().clone(),
        value: parser.cur_token().value.clone(),
    };

    if !parser.expect_peek(TokenKind::Assignment) {
        return None;
    }

    // The value expression is not captured yet: scan to the statement
    // boundary and leave the slot empty.
    while parser.cur_token_kind() != TokenKind::Semicolon
        && parser.cur_token_kind() != TokenKind::EOF
    {
        parser.next_token();
    }

    Some(StmtWrapper::new(LetStatement {
        token: let_token,
        name,
        value: None,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let return_token = parser.cur_token().clone();

    parser.next_token();

    // The return value is not captured yet; same boundary scan as let.
    while parser.cur_token_kind() != TokenKind::Semicolon
        && parser.cur_token_kind() != TokenKind::EOF
    {
        parser.next_token();
    }

    Some(StmtWrapper::new(ReturnStatement {
        token: return_token,
        value: None,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let token = parser.cur_token().clone();

    let expression = parse_expr(parser, Precedence::Lowest);

    // Trailing semicolon is optional so the shell can take bare expressions.
    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.next_token();
    }

    Some(StmtWrapper::new(ExpressionStatement { token, expression }))
}
