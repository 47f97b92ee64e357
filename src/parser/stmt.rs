use crate::{
    ast::{
        ast::StmtWrapper,
        statements::{BlockStmt, ExpressionStmt, ReturnStmt, VarDeclStmt},
    },
    errors::errors::{ErrorImpl, ParseError},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{expr::parse_identifier, parser::Parser};

/// Parses one statement starting at the current token. Statements without a
/// registered handler are expression statements.
pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    // let <name> = <value>;
    let token = parser.current_token().clone();

    parser.expect_lookahead(TokenKind::Ident)?;
    let name = parse_identifier(parser);

    parser.expect_lookahead(TokenKind::Eq)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.lookahead_token_is(TokenKind::Semi) {
        parser.advance();
    }

    Ok(StmtWrapper::new(VarDeclStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.lookahead_token_is(TokenKind::Semi) {
        parser.advance();
    }

    Ok(StmtWrapper::new(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    // Terminating semicolons are optional
    if parser.lookahead_token_is(TokenKind::Semi) {
        parser.advance();
    }

    Ok(StmtWrapper::new(ExpressionStmt { token, expression }))
}

/// Parses `{ <statements> }` with the current token on `{`. On return the
/// current token is the closing `}`.
///
/// Statements inside the block recover the same way top-level statements
/// do: the error is recorded and parsing resumes at the next token.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, ParseError> {
    let token = parser.current_token().clone();
    let mut statements = vec![];

    parser.advance();

    while !parser.current_token_is(TokenKind::RBrace) {
        if parser.current_token_is(TokenKind::EOF) {
            return Err(ParseError::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::RBrace,
                    found: TokenKind::EOF,
                },
                parser.current_token().span,
            ));
        }

        match parse_stmt(parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => parser.record_error(error),
        }
        parser.advance();
    }

    Ok(BlockStmt { token, statements })
}
