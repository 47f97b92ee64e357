use std::{any::Any, fmt::Display};

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{Expr, ExprType, ExprWrapper, Node},
    statements::BlockStmt,
};

// LITERALS

/// Identifier
/// A name, either bound by `let`/`fn` or referenced in an expression.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
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
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Expression
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
}

impl Expr for IntegerExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Integer
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token_literal())
    }
}

/// Boolean Expression
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub token: Token,
    pub value: bool,
}

impl Node for BooleanExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
}

impl Expr for BooleanExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Boolean
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token_literal())
    }
}

// OPERATORS

/// Prefix Expression
/// `<operator><right>`, e.g. `!ok` or `-5`.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    /// The operator token
    pub token: Token,
    pub operator: String,
    pub right: ExprWrapper,
}

impl Node for PrefixExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
}

impl Expr for PrefixExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Infix Expression
/// `<left> <operator> <right>`
#[derive(Debug, Clone)]
pub struct InfixExpr {
    /// The operator token
    pub token: Token,
    pub left: ExprWrapper,
    pub operator: String,
    pub right: ExprWrapper,
}

impl Node for InfixExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
}

impl Expr for InfixExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Infix
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

// COMPOUND

/// If Expression
/// `if (<condition>) { ... } else { ... }`
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub token: Token,
    pub condition: ExprWrapper,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

impl Node for IfExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
}

impl Expr for IfExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::If
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, "else {}", alternative)?;
        }
        Ok(())
    }
}

/// Function Literal
/// `fn(<parameters>) { <body> }`
#[derive(Debug, Clone)]
pub struct FunctionExpr {
    /// The `fn` token
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStmt,
}

impl Node for FunctionExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
}

impl Expr for FunctionExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Function
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for FunctionExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        write!(
            f,
            "{}({}) {}",
            self.token_literal(),
            parameters.join(", "),
            self.body
        )
    }
}

/// Call Expression
/// `<function>(<arguments>)`
#[derive(Debug, Clone)]
pub struct CallExpr {
    /// The `(` token
    pub token: Token,
    /// Identifier or function literal being called
    pub function: ExprWrapper,
    pub arguments: Vec<ExprWrapper>,
}

impl Node for CallExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
}

impl Expr for CallExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Call
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments: Vec<String> = self.arguments.iter().map(|a| a.to_string()).collect();
        write!(f, "{}({})", self.function, arguments.join(", "))
    }
}
