//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_CHAR_TOKEN!` - Creates a one code point token at the lexer cursor
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's literal text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token::new($kind, $value, $span)
    };
}

/// Creates a token of the given kind whose literal is the code point under
/// the lexer cursor. The cursor is not moved.
///
/// # Example
///
/// ```ignore
/// let token = MK_CHAR_TOKEN!(TokenKind::Semi, self);
/// ```
#[macro_export]
macro_rules! MK_CHAR_TOKEN {
    ($kind:expr, $lexer:expr) => {
        $crate::MK_TOKEN!($kind, String::from($lexer.at()), $lexer.span())
    };
}
