use crate::{
    ast::{ast::ExprWrapper, expressions::Identifier},
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser};

/// Precedence-climbing expression parser.
///
/// Looks up a prefix handler for the current token, then keeps folding
/// infix operators into the left-hand side while the lookahead operator
/// binds tighter than `precedence`. A token kind with no prefix handler
/// yields `None`; callers treat that as "no expression producible here".
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<ExprWrapper> {
    let prefix = match parser.get_prefix_lookup().get(&parser.cur_token_kind()) {
        Some(prefix) => *prefix,
        None => return None,
    };

    let mut left = prefix(parser)?;

    while parser.peek_token_kind() != TokenKind::Semicolon && precedence < parser.peek_precedence()
    {
        let infix = match parser.get_infix_lookup().get(&parser.peek_token_kind()) {
            Some(infix) => *infix,
            None => return Some(left),
        };

        parser.next_token();
        left = infix(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<ExprWrapper> {
    Some(ExprWrapper::new(Identifier {
        token: parser.cur_token().clone(),
        value: parser.cur_token().value.clone(),
    }))
}
