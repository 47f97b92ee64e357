use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Function);
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };

    pub static ref OPERATOR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('=', TokenKind::Eq);
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('!', TokenKind::Not);
        map.insert('*', TokenKind::Asterisk);
        map.insert('/', TokenKind::Slash);
        map.insert('<', TokenKind::Lt);
        map.insert('>', TokenKind::Gt);
        map
    };

    pub static ref DELIMITER_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('(', TokenKind::LParen);
        map.insert(')', TokenKind::RParen);
        map.insert('{', TokenKind::LBrace);
        map.insert('}', TokenKind::RBrace);
        map.insert('[', TokenKind::LBracket);
        map.insert(']', TokenKind::RBracket);
        map
    };
}

/// Looks up a keyword, falling back to [`TokenKind::Ident`].
pub fn lookup_ident(ident: &str) -> TokenKind {
    RESERVED_LOOKUP.get(ident).copied().unwrap_or(TokenKind::Ident)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Unknown,
    EOF,

    Ident,
    Number,

    // Operators
    Eq,       // =
    Plus,     // +
    Minus,    // -
    Not,      // !
    Asterisk, // *
    Slash,    // /
    Lt,       // <
    Gt,       // >
    EqEq,     // ==
    Ne,       // !=

    // Delimiters
    Comma,
    Semi,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Reserved
    Function,
    Let,
    If,
    Else,
    True,
    False,
    Return,
}

impl TokenKind {
    /// The stable name of the kind, as used in diagnostics and token dumps.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::EOF => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Number => "NUMBER",
            TokenKind::Eq => "EQ",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Not => "NOT",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::EqEq => "EQEQ",
            TokenKind::Ne => "NE",
            TokenKind::Comma => "COMMA",
            TokenKind::Semi => "SEMI",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Return => "RETURN",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            value: value.into(),
            span,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<8} {:?} @ {}:{}",
            self.kind, self.value, self.span.line, self.span.column
        )
    }
}
