use std::{any::Any, fmt::Display, slice::Iter};

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{ExprWrapper, Node, Stmt, StmtType, StmtWrapper},
    expressions::Identifier,
};

/// Variable Declaration Statement
/// `let <name> = <value>;`
#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    /// The `let` token
    pub token: Token,
    pub name: Identifier,
    pub value: ExprWrapper,
}

impl Node for VarDeclStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
}

impl Stmt for VarDeclStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::VarDeclStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

impl Display for VarDeclStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {};", self.token_literal(), self.name, self.value)
    }
}

/// Return Statement
/// `return <value>;`
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    /// The `return` token
    pub token: Token,
    pub value: ExprWrapper,
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
}

impl Stmt for ReturnStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ReturnStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {};", self.token_literal(), self.value)
    }
}

/// Expression Statement
/// An expression used in statement position, e.g. `x + 10;`
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    /// The first token of the expression
    pub token: Token,
    pub expression: ExprWrapper,
}

impl Node for ExpressionStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Block Statement
/// `{ <statements> }`, the body of conditionals and function literals.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    /// The `{` token
    pub token: Token,
    pub statements: Vec<StmtWrapper>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.statements.iter()
    }
}

impl Node for BlockStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
}

impl Stmt for BlockStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BlockStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in self.iter() {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
