//! Parser state and the top-level program loop.
//!
//! The parser pulls tokens lazily from the lexer through a two-token
//! window (current + peek) and dispatches on the current token kind. It
//! maintains lookup tables for:
//!
//! - Prefix handlers for tokens that can begin an expression
//! - Infix handlers for tokens that combine a left-hand expression
//! - Binding powers for operator precedence
//!
//! Failures never abort the parse: peek mismatches are recorded as
//! diagnostics, the offending statement is dropped, and the loop resumes
//! at the next statement boundary.

use std::collections::HashMap;

use crate::{
    ast::statements::Program,
    errors::errors::Diagnostic,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, InfixHandler, InfixLookup, Precedence, PrecedenceLookup,
        PrefixHandler, PrefixLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The token source, consumed on demand
    lexer: Lexer,
    /// The token being parsed
    cur_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Accumulated diagnostics, in parse order
    errors: Vec<Diagnostic>,
    /// Lookup table for prefix expression handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix expression handlers
    infix_lookup: InfixLookup,
    /// Lookup table for infix binding powers (precedence)
    precedence_lookup: PrecedenceLookup,
}

impl Parser {
    /// Creates a new Parser over the given lexer.
    ///
    /// Pre-reads two tokens so that the current and peek slots are both
    /// populated, then installs the grammar registries.
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            cur_token,
            peek_token,
            errors: vec![],
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Shifts peek into current and pulls a fresh token from the lexer.
    /// There is no pushback; one token of lookahead is all the grammar gets.
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    /// Returns the current token without advancing.
    pub fn cur_token(&self) -> &Token {
        &self.cur_token
    }

    /// Returns the kind of the current token.
    pub fn cur_token_kind(&self) -> TokenKind {
        self.cur_token.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Returns the binding power of the lookahead token, `Lowest` when it
    /// has no registered infix handler.
    pub fn peek_precedence(&self) -> Precedence {
        *self
            .precedence_lookup
            .get(&self.peek_token.kind)
            .unwrap_or(&Precedence::Lowest)
    }

    /// Advances if the lookahead token has the expected kind; otherwise
    /// records a peek-mismatch diagnostic and stays put.
    pub fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek_token.kind == expected {
            self.next_token();
            true
        } else {
            self.peek_error(expected);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.errors.push(Diagnostic::PeekMismatch {
            expected,
            found: self.peek_token.kind,
        });
    }

    /// Read-only view of the accumulated diagnostics. A non-empty list
    /// means the returned Program is not fully trustworthy.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Returns a reference to the prefix handler lookup table.
    pub fn get_prefix_lookup(&self) -> &PrefixLookup {
        &self.prefix_lookup
    }

    /// Returns a reference to the infix handler lookup table.
    pub fn get_infix_lookup(&self) -> &InfixLookup {
        &self.infix_lookup
    }

    /// Registers a prefix handler for a token kind.
    pub fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers an infix handler for a token kind along with its
    /// binding power.
    pub fn infix(&mut self, kind: TokenKind, precedence: Precedence, infix_fn: InfixHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.infix_lookup.insert(kind, infix_fn);
    }

    /// Parses statements until EOF and returns the resulting Program.
    ///
    /// Always returns a Program, possibly with zero statements; callers
    /// must inspect `errors()` to decide whether to trust it. Statements
    /// that fail to parse are dropped from the output.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.cur_token.kind != TokenKind::EOF {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        program
    }
}

/// Parses a source buffer into an AST.
///
/// This is the main entry point: it wires a lexer to a fresh parser and
/// returns the Program together with every diagnostic the parse produced.
pub fn parse(source: String) -> (Program, Vec<Diagnostic>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let errors = parser.errors.clone();

    (program, errors)
}
