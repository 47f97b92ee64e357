use crate::{
    ast::{
        ast::ExprWrapper,
        expressions::{
            BooleanExpr, CallExpr, FunctionExpr, Identifier, IfExpr, InfixExpr, IntegerExpr,
            PrefixExpr,
        },
    },
    errors::errors::{ErrorImpl, ParseError},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::BindingPower,
    parser::{Parser, MAX_NESTING_DEPTH},
    stmt::parse_block_stmt,
};

/// Parses an expression starting at the current token.
///
/// On return the current token is the last token of the expression.
/// Nesting deeper than [`MAX_NESTING_DEPTH`] is a `NestingTooDeep` error.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, ParseError> {
    parser.enter_nesting()?;
    let result = parse_nested_expr(parser, bp);
    parser.leave_nesting();

    result
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, ParseError> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(ParseError::new(
            ErrorImpl::NoPrefixParseFn { kind: token_kind },
            parser.current_token().span,
        ));
    };

    let mut left = nud_fn(parser)?;

    // While the lookahead is an infix operator binding tighter than bp, keep extending lhs
    loop {
        let Some(led_fn) = parser.get_led_lookup().get(&parser.lookahead_token_kind()).copied() else {
            break;
        };

        let operator_bp = parser.lookahead_binding_power();
        if operator_bp <= bp {
            break;
        }

        parser.advance();
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    Ok(ExprWrapper::new(parse_identifier(parser)))
}

pub(crate) fn parse_identifier(parser: &Parser) -> Identifier {
    let token = parser.current_token().clone();
    Identifier {
        value: token.value.clone(),
        token,
    }
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Ok(ExprWrapper::new(IntegerExpr { token, value })),
        Err(_) => Err(ParseError::new(
            ErrorImpl::InvalidInteger {
                literal: token.value.clone(),
            },
            token.span,
        )),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    Ok(ExprWrapper::new(BooleanExpr {
        value: parser.current_token_is(TokenKind::True),
        token: parser.current_token().clone(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let operator_token = parser.current_token().clone();
    parser.advance();
    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(ExprWrapper::new(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right,
    }))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    bp: BindingPower,
) -> Result<ExprWrapper, ParseError> {
    let operator_token = parser.current_token().clone();
    parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(InfixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        left,
        right,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_lookahead(TokenKind::RParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    // if (<condition>) { ... } else { ... }
    let token = parser.current_token().clone();

    parser.expect_lookahead(TokenKind::LParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_lookahead(TokenKind::RParen)?;

    parser.expect_lookahead(TokenKind::LBrace)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.lookahead_token_is(TokenKind::Else) {
        parser.advance();
        parser.expect_lookahead(TokenKind::LBrace)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(ExprWrapper::new(IfExpr {
        token,
        condition,
        consequence,
        alternative,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let token = parser.current_token().clone();

    parser.expect_lookahead(TokenKind::LParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_lookahead(TokenKind::LBrace)?;
    let body = parse_block_stmt(parser)?;

    Ok(ExprWrapper::new(FunctionExpr {
        token,
        parameters,
        body,
    }))
}

fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, ParseError> {
    let mut parameters = vec![];

    if parser.lookahead_token_is(TokenKind::RParen) {
        parser.advance();
        return Ok(parameters);
    }

    parser.expect_lookahead(TokenKind::Ident)?;
    parameters.push(parse_identifier(parser));

    while parser.lookahead_token_is(TokenKind::Comma) {
        parser.advance();
        parser.expect_lookahead(TokenKind::Ident)?;
        parameters.push(parse_identifier(parser));
    }

    parser.expect_lookahead(TokenKind::RParen)?;

    Ok(parameters)
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, ParseError> {
    let token = parser.current_token().clone();
    let mut arguments = vec![];

    if parser.lookahead_token_is(TokenKind::RParen) {
        parser.advance();
    } else {
        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Lowest)?);

        while parser.lookahead_token_is(TokenKind::Comma) {
            parser.advance();
            parser.advance();
            arguments.push(parse_expr(parser, BindingPower::Lowest)?);
        }

        parser.expect_lookahead(TokenKind::RParen)?;
    }

    Ok(ExprWrapper::new(CallExpr {
        token,
        function: left,
        arguments,
    }))
}
