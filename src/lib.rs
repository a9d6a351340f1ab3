#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// The text of the 1-based `line` of `source`, without its line terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    source
        .split('\n')
        .nth(index)
        .map(|text| text.trim_end_matches('\r'))
}


/// Formats a lexical error with the offending source line.
///
/// ```text
/// Error: UnrecognisedToken
/// -> line 20
///    |
/// 20 | a = #;
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let line_string = error.get_line().to_string();
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
    out.push_str(&format!("-> line {}\n", error.get_line()));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let line_text = get_line(source, error.get_line()).unwrap_or_default();
    out.push_str(&format!("{} | {}\n", line_string, line_text.trim()));

    out
}
