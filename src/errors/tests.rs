//! Unit tests for diagnostics.

use crate::errors::errors::Diagnostic;
use crate::lexer::tokens::TokenKind;

#[test]
fn test_peek_mismatch_message() {
    let diagnostic = Diagnostic::PeekMismatch {
        expected: TokenKind::Identifier,
        found: TokenKind::Int,
    };

    assert_eq!(
        diagnostic.to_string(),
        "expected next token to be Identifier, got Int instead"
    );
}

#[test]
fn test_diagnostics_compare_by_value() {
    let a = Diagnostic::PeekMismatch {
        expected: TokenKind::Assignment,
        found: TokenKind::Int,
    };
    let b = a.clone();

    assert_eq!(a, b);
}
