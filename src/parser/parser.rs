//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program entry points.
//! The parser pulls tokens from a [`Lexer`] two at a time (current and
//! lookahead) and uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Syntax errors never stop the parse. Each failed statement leaves one
//! [`ParseError`] behind and parsing resumes at the next token.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{ErrorImpl, ParseError},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// How many expressions may enclose each other before the parser gives up.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// The token under examination
    current_token: Token,
    /// The token after `current_token`
    lookahead_token: Token,
    /// Syntax errors recorded so far, in source order
    errors: Vec<ParseError>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Number of `parse_expr` calls currently on the stack
    depth: usize,
}

impl Parser {
    /// Creates a new Parser reading from `lexer`, with every handler
    /// registered and both token slots primed.
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let lookahead_token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current_token,
            lookahead_token,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
        };

        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    /// Returns the kind of the lookahead token.
    pub fn lookahead_token_kind(&self) -> TokenKind {
        self.lookahead_token.kind
    }

    pub fn lookahead_token_is(&self, kind: TokenKind) -> bool {
        self.lookahead_token.kind == kind
    }

    /// Shifts the lookahead token into the current slot and pulls a fresh
    /// lookahead token from the lexer.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.lookahead_token, next);
    }

    /// Advances onto the lookahead token if it has the expected kind.
    ///
    /// # Returns
    ///
    /// The token that is now current, or an `UnexpectedToken` error located
    /// at the lookahead token. On error the parser does not move.
    pub fn expect_lookahead(&mut self, expected_kind: TokenKind) -> Result<Token, ParseError> {
        if self.lookahead_token_is(expected_kind) {
            self.advance();
            Ok(self.current_token.clone())
        } else {
            Err(ParseError::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.lookahead_token.kind,
                },
                self.lookahead_token.span,
            ))
        }
    }

    /// Binding power of the lookahead token, `Lowest` if it is not an infix
    /// operator.
    pub fn lookahead_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.lookahead_token.kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Enters one more level of expression nesting, failing at the current
    /// token once [`MAX_NESTING_DEPTH`] is reached.
    pub(crate) fn enter_nesting(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.current_token.span,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave_nesting(&mut self) {
        self.depth -= 1;
    }

    /// Syntax errors recorded so far.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub(crate) fn record_error(&mut self, error: ParseError) {
        tracing::debug!(
            line = error.get_span().line,
            column = error.get_span().column,
            "{}",
            error
        );
        self.errors.push(error);
    }

    /// Parses statements until `EOF`.
    ///
    /// A statement that fails to parse is dropped and its error recorded.
    /// The parser always advances one token after each attempt, so malformed
    /// input cannot stall the loop.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => self.record_error(error),
            }
            self.advance();
        }

        program
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses `source` into a program.
///
/// This is the main entry point for parsing. It lexes and parses the whole
/// input; the returned parser holds the recorded errors.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing)
/// - The root Program, possibly empty
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (parser, program)
}
