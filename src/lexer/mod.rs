//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Lazy tokenization, one token per `next_token` call
//! - Recognition of keywords, identifiers, integer literals, and operators
//! - Whitespace handling
//! - Unrecognized bytes, surfaced as illegal tokens rather than errors

pub mod lexer;
pub mod tokens;
