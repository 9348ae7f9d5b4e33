use std::any::Any;

use crate::lexer::tokens::Token;

use super::ast::{Expr, ExprType, ExprWrapper};

/// Identifier Expression
/// A bare name in expression position, e.g. `foobar`.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Expr for Identifier {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Identifier
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.value.clone()
    }
    fn render(&self) -> String {
        self.value.clone()
    }
}
