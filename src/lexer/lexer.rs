use lazy_static::lazy_static;
use regex::Regex;

use crate::{Span, MK_CHAR_TOKEN, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind, DELIMITER_LOOKUP, OPERATOR_LOOKUP};

lazy_static! {
    static ref IDENTIFIER_CHAR: Regex = Regex::new(r"^[\p{L}\p{S}_]$").unwrap();
}

/// Returns true if `ch` may start or continue an identifier: a letter, a
/// symbol (`∆`, `$`, `^`) or `_`.
///
/// Symbols that are operators (`+ < = >`) keep their own token kind, so
/// `a+b` still lexes as three tokens.
pub fn is_identifier_char(ch: char) -> bool {
    if ch.is_ascii_alphabetic() || ch == '_' {
        return true;
    }

    if OPERATOR_LOOKUP.contains_key(&ch) || DELIMITER_LOOKUP.contains_key(&ch) {
        return false;
    }

    let mut buf = [0u8; 4];
    IDENTIFIER_CHAR.is_match(ch.encode_utf8(&mut buf))
}

/// A pull-based scanner over the code points of a source string.
///
/// Each call to [`Lexer::next_token`] produces one token in document order.
/// Once the input is exhausted every further call returns an `EOF` token.
#[derive(Debug, Clone)]
pub struct Lexer {
    input: Vec<char>,
    /// Index of the code point under examination
    position: usize,
    /// Index of the code point after `ch`
    read_position: usize,
    /// The code point under examination, `'\0'` once the input is exhausted
    ch: char,
    line: usize,
    /// Offset of the first code point of the current line
    line_start: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let mut lexer = Lexer {
            input: source.chars().collect(),
            position: 0,
            read_position: 0,
            ch: '\0',
            line: 1,
            line_start: 0,
        };

        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        if self.ch == '\n' && !self.at_eof() {
            self.line += 1;
            self.line_start = self.read_position;
        }

        self.ch = self.input.get(self.read_position).copied().unwrap_or('\0');
        self.position = self.read_position;
        self.read_position += 1;
    }

    pub fn peek(&self) -> char {
        self.input.get(self.read_position).copied().unwrap_or('\0')
    }

    pub fn at(&self) -> char {
        self.ch
    }

    pub fn at_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// The location of the code point under the cursor.
    pub fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.position - self.line_start,
            offset: self.position,
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, ' ' | '\t' | '\n' | '\r') && !self.at_eof() {
            self.read_char();
        }
    }

    /// Produces the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            return self.emit(MK_TOKEN!(TokenKind::EOF, String::new(), self.span()));
        }

        let ch = self.ch;
        let token = if ch == ';' {
            MK_CHAR_TOKEN!(TokenKind::Semi, self)
        } else if ch == ',' {
            MK_CHAR_TOKEN!(TokenKind::Comma, self)
        } else if let Some(kind) = DELIMITER_LOOKUP.get(&ch) {
            MK_CHAR_TOKEN!(*kind, self)
        } else if let Some(kind) = OPERATOR_LOOKUP.get(&ch) {
            self.operator_token(*kind)
        } else if is_identifier_char(ch) {
            let token = self.read_identifier();
            return self.emit(token);
        } else if ch.is_ascii_digit() {
            let token = self.read_number();
            return self.emit(token);
        } else {
            MK_CHAR_TOKEN!(TokenKind::Unknown, self)
        };

        self.read_char();
        self.emit(token)
    }

    /// Builds an operator token, folding `==` and `!=` into one token. The
    /// cursor is left on the last code point of the operator.
    fn operator_token(&mut self, kind: TokenKind) -> Token {
        let two_char_kind = match (self.ch, self.peek()) {
            ('=', '=') => Some(TokenKind::EqEq),
            ('!', '=') => Some(TokenKind::Ne),
            _ => None,
        };

        match two_char_kind {
            Some(kind) => {
                let span = self.span();
                let first = self.ch;
                self.read_char();
                MK_TOKEN!(kind, format!("{}{}", first, self.ch), span)
            }
            None => MK_CHAR_TOKEN!(kind, self),
        }
    }

    fn read_identifier(&mut self) -> Token {
        let span = self.span();
        let start = self.position;
        while !self.at_eof() && is_identifier_char(self.ch) {
            self.read_char();
        }

        let ident: String = self.input[start..self.position].iter().collect();
        MK_TOKEN!(lookup_ident(&ident), ident, span)
    }

    fn read_number(&mut self) -> Token {
        let span = self.span();
        let start = self.position;
        while !self.at_eof() && self.ch.is_ascii_digit() {
            self.read_char();
        }

        MK_TOKEN!(
            TokenKind::Number,
            self.input[start..self.position].iter().collect::<String>(),
            span
        )
    }

    fn emit(&self, token: Token) -> Token {
        tracing::trace!(
            kind = %token.kind,
            literal = %token.value,
            line = token.span.line,
            column = token.span.column,
            "token"
        );
        token
    }
}

/// Lexes `source` to completion. The returned tokens end with exactly one
/// `EOF` token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
