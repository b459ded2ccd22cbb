#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::functions::TopLevel,
    errors::errors::{Error, ErrorTip},
    lexer::{lexer::tokenize, source::TokenStream},
    parser::{functions::parse, operators::OperatorTable},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod shell;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses a whole source text.
///
/// Custom operators declared by `binary` prototypes are written into
/// `operators` and stay there for later calls.
pub fn parse_source(
    source: &str,
    file: Option<String>,
    operators: &mut OperatorTable,
) -> Result<Vec<TopLevel>, Error> {
    let tokens = tokenize(source.to_string(), file)?;
    let mut stream = TokenStream::new(tokens);

    parse(&mut stream, operators)
}

/// Finds the 1-based line containing byte offset `position`.
///
/// Returns the line number, the line text and the offset inside that line.
/// Offsets at or past the end of `content` resolve to the last line.
pub fn get_line_at_position(content: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        last = (line_number, line.to_string(), line.trim_end_matches('\n').len());
        start = end;
        line_number += 1;
    }

    last
}

/// Renders an error against the source it came from.
///
/// ```text
/// Error: UnmatchedParen (expected `)` to close `(`)
/// -> main.sel
///    |
/// 20 | (1 + 2
///    | ------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    out
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

    (String::from(&string[start..]), start)
}
