#![allow(clippy::module_inception)]

use crate::errors::errors::{ErrorTip, ParseError};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Start location of a token.
///
/// `line` is 1-based, `column` counts code points from the start of the line
/// and `offset` counts code points from the start of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Span {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Span { line, column, offset }
    }

    pub fn null() -> Self {
        Span { line: 1, column: 0, offset: 0 }
    }
}

pub fn get_line_at_position(source: &str, span: Span) -> Option<(usize, String, usize)> {
    let line = source.split('\n').nth(span.line.checked_sub(1)?)?;
    let line = line.strip_suffix('\r').unwrap_or(line);

    Some((span.line, line.to_string(), span.column))
}


/// Renders a parse error with the offending source line and a caret under
/// the token that caused it.
pub fn format_error(error: &ParseError, source: &str, file: &str) -> String {
    /*
        Error: message
        -> main.mk
           |
        20 | let = 5;
           | ----^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_span()) else {
        out.push_str(&format!("   {}\n", error));
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out.push_str(&format!("{:>padding$} {}\n", "=", error));
    out
}

pub fn display_error(error: &ParseError, source: &str, file: &str) {
    eprint!("{}", format_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
