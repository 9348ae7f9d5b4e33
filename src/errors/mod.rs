//! Diagnostic types for the parser.
//!
//! Diagnostics are accumulated on the parser rather than raised as
//! control flow: a parse always completes and the caller inspects the
//! list afterwards to decide success or failure.

pub mod errors;

#[cfg(test)]
mod tests;
