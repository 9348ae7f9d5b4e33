use std::collections::HashMap;

use crate::{ast::ast::ExprWrapper, lexer::tokens::TokenKind};

use super::{expr::parse_identifier, parser::Parser};

/// Operator precedence, lowest first. Higher binds tighter during
/// expression climbing.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,      // ==
    LessGreater, // > or <
    Sum,         // +
    Product,     // *
    Prefix,      // -x or !x
    Call,        // my_function(x)
}

pub type PrefixHandler = fn(&mut Parser) -> Option<ExprWrapper>;
pub type InfixHandler = fn(&mut Parser, ExprWrapper) -> Option<ExprWrapper>;

// Lookup tables inside parser struct, so it's easier
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;

/// Registers every grammar handler. Growing the grammar means adding a
/// registration here, not branching deeper in the dispatch core.
pub fn create_token_lookups(parser: &mut Parser) {
    // Literals and symbols
    parser.prefix(TokenKind::Identifier, parse_identifier);
}
