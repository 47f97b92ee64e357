//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers (ASCII and Unicode)
//! - Numbers
//! - Operators and delimiters
//! - Spans
//! - Unknown characters and end of input

use super::{
    lexer::{is_identifier_char, tokenize, Lexer},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_simple_declaration() {
    let tokens = tokenize("let five = 5;");

    let got: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.value.as_str())).collect();
    assert_eq!(
        got,
        vec![
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "five"),
            (TokenKind::Eq, "="),
            (TokenKind::Number, "5"),
            (TokenKind::Semi, ";"),
            (TokenKind::EOF, ""),
        ]
    );
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let if else return true false");

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::If);
    assert_eq!(tokens[3].kind, TokenKind::Else);
    assert_eq!(tokens[4].kind, TokenKind::Return);
    assert_eq!(tokens[5].kind, TokenKind::True);
    assert_eq!(tokens[6].kind, TokenKind::False);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_baz _underscore CamelCase lets iff");

    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[1].value, "bar_baz");
    assert_eq!(tokens[2].kind, TokenKind::Ident);
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].kind, TokenKind::Ident);
    assert_eq!(tokens[3].value, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::Ident);
    assert_eq!(tokens[4].value, "lets");
    assert_eq!(tokens[5].kind, TokenKind::Ident);
    assert_eq!(tokens[5].value, "iff");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unicode_identifiers() {
    let tokens = tokenize("let ∆ = 9;\nlet śńięg = 9;");

    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[1].value, "∆");
    assert_eq!(tokens[6].kind, TokenKind::Ident);
    assert_eq!(tokens[6].value, "śńięg");
    assert_eq!(tokens[6].span.line, 2);
    assert_eq!(tokens[6].span.column, 4);
    assert_eq!(tokens[7].span.column, 10);
}

#[test]
fn test_identifier_char_class() {
    assert!(is_identifier_char('a'));
    assert!(is_identifier_char('_'));
    assert!(is_identifier_char('ś'));
    assert!(is_identifier_char('∆'));
    assert!(is_identifier_char('λ'));
    assert!(!is_identifier_char('1'));
    assert!(!is_identifier_char('+'));
    assert!(!is_identifier_char('='));
    assert!(!is_identifier_char(' '));
    assert!(is_identifier_char('$'));
    assert!(is_identifier_char('^'));
    assert!(is_identifier_char('|'));
    assert!(is_identifier_char('~'));
    assert!(!is_identifier_char('<'));
    assert!(!is_identifier_char('('));
    assert!(!is_identifier_char('@'));
}

#[test]
fn test_ascii_symbols_in_identifiers() {
    let tokens = tokenize("$foo a^b x|y ~");

    let got: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.value.as_str())).collect();
    assert_eq!(
        got,
        vec![
            (TokenKind::Ident, "$foo"),
            (TokenKind::Ident, "a^b"),
            (TokenKind::Ident, "x|y"),
            (TokenKind::Ident, "~"),
            (TokenKind::EOF, ""),
        ]
    );

    // Operator symbols still split identifiers
    let tokens = tokenize("$a+b<c");
    assert_eq!(tokens[0].value, "$a");
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].value, "b");
    assert_eq!(tokens[3].kind, TokenKind::Lt);
    assert_eq!(tokens[4].value, "c");
}

#[test]
fn test_digits_end_identifier() {
    let tokens = tokenize("abc123");

    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].value, "abc");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "123");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 838383 3.14");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "838383");
    // No floating point: `3.14` is NUMBER, UNKNOWN, NUMBER
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "3");
    assert_eq!(tokens[4].kind, TokenKind::Unknown);
    assert_eq!(tokens[4].value, ".");
    assert_eq!(tokens[5].kind, TokenKind::Number);
    assert_eq!(tokens[5].value, "14");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("= + - ! * / < > == !=");

    assert_eq!(tokens[0].kind, TokenKind::Eq);
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].kind, TokenKind::Minus);
    assert_eq!(tokens[3].kind, TokenKind::Not);
    assert_eq!(tokens[4].kind, TokenKind::Asterisk);
    assert_eq!(tokens[5].kind, TokenKind::Slash);
    assert_eq!(tokens[6].kind, TokenKind::Lt);
    assert_eq!(tokens[7].kind, TokenKind::Gt);
    assert_eq!(tokens[8].kind, TokenKind::EqEq);
    assert_eq!(tokens[8].value, "==");
    assert_eq!(tokens[9].kind, TokenKind::Ne);
    assert_eq!(tokens[9].value, "!=");
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_double_equals_is_one_token() {
    let tokens = tokenize("10 == 10;");

    assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eq).count(), 0);
    assert_eq!(tokens[1].kind, TokenKind::EqEq);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].span.column, 6);
}

#[test]
fn test_operators_without_spaces() {
    let tokens = tokenize("!-/*5;a+b!=c");

    assert_eq!(tokens[0].kind, TokenKind::Not);
    assert_eq!(tokens[1].kind, TokenKind::Minus);
    assert_eq!(tokens[2].kind, TokenKind::Slash);
    assert_eq!(tokens[3].kind, TokenKind::Asterisk);
    assert_eq!(tokens[4].kind, TokenKind::Number);
    assert_eq!(tokens[5].kind, TokenKind::Semi);
    assert_eq!(tokens[6].kind, TokenKind::Ident);
    assert_eq!(tokens[7].kind, TokenKind::Plus);
    assert_eq!(tokens[8].kind, TokenKind::Ident);
    assert_eq!(tokens[9].kind, TokenKind::Ne);
    assert_eq!(tokens[10].kind, TokenKind::Ident);
    assert_eq!(tokens[11].kind, TokenKind::EOF);
}

#[test]
fn test_bang_at_end_of_input() {
    let tokens = tokenize("x !");

    assert_eq!(tokens[1].kind, TokenKind::Not);
    assert_eq!(tokens[1].value, "!");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_delimiters() {
    let tokens = tokenize("( ) { } [ ] , ;");

    assert_eq!(tokens[0].kind, TokenKind::LParen);
    assert_eq!(tokens[1].kind, TokenKind::RParen);
    assert_eq!(tokens[2].kind, TokenKind::LBrace);
    assert_eq!(tokens[3].kind, TokenKind::RBrace);
    assert_eq!(tokens[4].kind, TokenKind::LBracket);
    assert_eq!(tokens[5].kind, TokenKind::RBracket);
    assert_eq!(tokens[6].kind, TokenKind::Comma);
    assert_eq!(tokens[7].kind, TokenKind::Semi);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unknown_characters() {
    let tokens = tokenize("let x = @ # 5;");

    assert_eq!(tokens[3].kind, TokenKind::Unknown);
    assert_eq!(tokens[3].value, "@");
    assert_eq!(tokens[4].kind, TokenKind::Unknown);
    assert_eq!(tokens[4].value, "#");
    assert_eq!(tokens[5].kind, TokenKind::Number);
    assert_eq!(tokens[6].kind, TokenKind::Semi);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_spans_track_lines_and_columns() {
    let tokens = tokenize("let x = 5;\n\n  return x;");

    assert_eq!((tokens[0].span.line, tokens[0].span.column), (1, 0));
    assert_eq!((tokens[1].span.line, tokens[1].span.column), (1, 4));
    assert_eq!((tokens[3].span.line, tokens[3].span.column), (1, 8));
    assert_eq!((tokens[5].span.line, tokens[5].span.column), (3, 2));
    assert_eq!(tokens[5].span.offset, 14);
    assert_eq!((tokens[6].span.line, tokens[6].span.column), (3, 9));
    assert_eq!(tokens[8].kind, TokenKind::EOF);
    assert_eq!((tokens[8].span.line, tokens[8].span.column), (3, 11));
}

#[test]
fn test_crlf_line_endings() {
    let tokens = tokenize("a\r\nb\r\n");

    assert_eq!(tokens[0].span.line, 1);
    assert_eq!(tokens[1].span.line, 2);
    assert_eq!(tokens[1].span.column, 0);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_eof_repeats() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.value, "");
    }
}

#[test]
fn test_empty_and_whitespace_only_input() {
    assert_eq!(tokenize("").len(), 1);
    assert_eq!(tokenize(" \t\r\n ").len(), 1);
    assert_eq!(tokenize(" \t\r\n ")[0].span.line, 2);
}

#[test]
fn test_tokenize_program() {
    let source = r#"let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 4;
if (5 < 10) {
return true;
} else {
return false;
}
10 == 10;
10 != 9;
"#;

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "five"),
        (TokenKind::Eq, "="),
        (TokenKind::Number, "5"),
        (TokenKind::Semi, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "ten"),
        (TokenKind::Eq, "="),
        (TokenKind::Number, "10"),
        (TokenKind::Semi, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "add"),
        (TokenKind::Eq, "="),
        (TokenKind::Function, "fn"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "y"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Ident, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Ident, "y"),
        (TokenKind::Semi, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Semi, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "result"),
        (TokenKind::Eq, "="),
        (TokenKind::Ident, "add"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "ten"),
        (TokenKind::RParen, ")"),
        (TokenKind::Semi, ";"),
        (TokenKind::Not, "!"),
        (TokenKind::Minus, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Asterisk, "*"),
        (TokenKind::Number, "5"),
        (TokenKind::Semi, ";"),
        (TokenKind::Number, "5"),
        (TokenKind::Lt, "<"),
        (TokenKind::Number, "10"),
        (TokenKind::Gt, ">"),
        (TokenKind::Number, "4"),
        (TokenKind::Semi, ";"),
        (TokenKind::If, "if"),
        (TokenKind::LParen, "("),
        (TokenKind::Number, "5"),
        (TokenKind::Lt, "<"),
        (TokenKind::Number, "10"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semi, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semi, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Number, "10"),
        (TokenKind::EqEq, "=="),
        (TokenKind::Number, "10"),
        (TokenKind::Semi, ";"),
        (TokenKind::Number, "10"),
        (TokenKind::Ne, "!="),
        (TokenKind::Number, "9"),
        (TokenKind::Semi, ";"),
        (TokenKind::EOF, ""),
    ];

    let mut lexer = Lexer::new(source);
    for (i, (kind, literal)) in expected.iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(token.kind, *kind, "tests[{}] - kind wrong", i);
        assert_eq!(token.value, *literal, "tests[{}] - literal wrong", i);
    }
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::EqEq.to_string(), "EQEQ");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
    assert_eq!(format!("{:<6}|", TokenKind::Let), "LET   |");
}
