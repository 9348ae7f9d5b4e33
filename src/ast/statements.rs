use std::{any::Any, slice::Iter};

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, ExprWrapper, Stmt, StmtType, StmtWrapper},
    expressions::Identifier,
};

/// The root node of every AST the parser produces.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<StmtWrapper>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.statements.iter()
    }

    /// Returns the defining-token literal of the first statement, or the
    /// empty string for an empty program.
    pub fn token_literal(&self) -> String {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => String::new(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for stmt in self.iter() {
            out.push_str(&stmt.render());
        }
        out
    }
}

#[derive(Debug)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    /// Not yet populated by the parser; the value expression is skipped
    /// until the grammar covers it.
    pub value: Option<ExprWrapper>,
}

impl Stmt for LetStatement {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::LetStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(LetStatement {
            token: self.token.clone(),
            name: self.name.clone(),
            value: self.value.as_ref().map(|value| value.clone_wrapper()),
        })
    }
    fn token_literal(&self) -> String {
        self.token.value.clone()
    }
    fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.token_literal());
        out.push(' ');
        out.push_str(&self.name.render());
        out.push_str(" = ");
        if let Some(value) = &self.value {
            out.push_str(&value.render());
        }
        out.push(';');
        out
    }
}

#[derive(Debug)]
pub struct ReturnStatement {
    pub token: Token,
    /// Not yet populated by the parser; see LetStatement.
    pub value: Option<ExprWrapper>,
}

impl Stmt for ReturnStatement {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ReturnStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(ReturnStatement {
            token: self.token.clone(),
            value: self.value.as_ref().map(|value| value.clone_wrapper()),
        })
    }
    fn token_literal(&self) -> String {
        self.token.value.clone()
    }
    fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.token_literal());
        out.push(' ');
        if let Some(value) = &self.value {
            out.push_str(&value.render());
        }
        out.push(';');
        out
    }
}

#[derive(Debug)]
pub struct ExpressionStatement {
    /// The first token of the expression.
    pub token: Token,
    pub expression: Option<ExprWrapper>,
}

impl Stmt for ExpressionStatement {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(ExpressionStatement {
            token: self.token.clone(),
            expression: self
                .expression
                .as_ref()
                .map(|expression| expression.clone_wrapper()),
        })
    }
    fn token_literal(&self) -> String {
        self.token.value.clone()
    }
    fn render(&self) -> String {
        match &self.expression {
            Some(expression) => expression.render(),
            None => String::new(),
        }
    }
}
