use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A recorded parse-time problem.
///
/// Appended to the parser's error list in the order encountered; never
/// thrown. Lexical problems do not appear here - the tokenizer surfaces
/// unrecognized bytes as `Illegal` tokens instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("expected next token to be {expected}, got {found} instead")]
    PeekMismatch {
        expected: TokenKind,
        found: TokenKind,
    },
}
