//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Code point by code point scanning with one character of lookahead
//! - Recognition of keywords, identifiers, numbers, and operators
//! - Token position tracking (line and column) for error reporting
//! - Unknown characters, which become `UNKNOWN` tokens instead of errors

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
