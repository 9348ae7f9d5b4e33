//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! and handles:
//!
//! - Statement parsing (let, return, expression statements)
//! - Expression parsing driven by per-token-kind handler registries
//! - Operator precedence via binding powers
//! - Diagnostic accumulation and per-statement error recovery
//!
//! Prefix handlers parse a token kind at the start of an expression; infix
//! handlers combine an already-parsed left-hand side with what follows.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
