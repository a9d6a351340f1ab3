use crate::{
    ast::ast::{Node, NodeSubType, NodeType},
    errors::diagnostic::{Diagnostic, ErrorKind},
    lexer::tokens::TokenKind,
};

use super::{
    parser::{ParseResult, Parser, Production},
    stmt::parse_statement,
};

/// A parenthesized group. The tokens between the brackets must form exactly
/// one argument, which becomes the result.
pub fn parse_parentheses(parser: &Parser, cursor: &mut usize, end: usize, depth: usize) -> ParseResult {
    let token = parser.enter("parentheses", *cursor, end, depth)?;
    let start = *cursor;

    if token.kind != TokenKind::OpenParen {
        return Err(Diagnostic::weak(ErrorKind::InvalidArgument, "No open parenth")
            .at_line(Some(token.line)));
    }

    let close = parser.find_closing(start, end).ok_or_else(|| {
        Diagnostic::strong(ErrorKind::SyntaxError, "Missing closing parenthesis")
            .at_line(Some(token.line))
    })?;

    let mut inner = start + 1;
    match parse_argument(parser, &mut inner, close, depth + 1) {
        Ok(node) => {
            *cursor = close + 1;
            Ok(node)
        }
        Err(diagnostic) => {
            *cursor = start;
            Err(Diagnostic::weak(ErrorKind::InvalidArgument, "Bad inner parentheses statement")
                .with_strength(diagnostic.is_strong())
                .at_line(Some(token.line))
                .with_children(vec![diagnostic]))
        }
    }
}

/// Something usable on either side of an operator: a value, a variable or a
/// nested statement, wrapped in an operand node.
pub fn parse_operand(parser: &Parser, cursor: &mut usize, end: usize, depth: usize) -> ParseResult {
    let token = parser.enter("operand", *cursor, end, depth)?;
    let start = *cursor;

    let alternatives: [(&str, Production); 3] = [
        ("value", parse_value),
        ("variable", parse_variable),
        ("statement", parse_statement),
    ];

    let mut attempts = vec![];
    for (name, production) in alternatives {
        match production(parser, cursor, end, depth + 1) {
            Ok(node) => return Ok(Node::operand(node)),
            Err(diagnostic) if diagnostic.is_strong() => {
                *cursor = start;
                return Err(Diagnostic::wrap_strong(diagnostic));
            }
            Err(diagnostic) => {
                parser.discard(name, &diagnostic);
                *cursor = start;
                attempts.push(diagnostic);
            }
        }
    }

    Err(Diagnostic::weak(ErrorKind::InvalidArgument, "No valid operand found")
        .at_line(Some(token.line))
        .with_children(attempts))
}

/// Parses `cursor..end` as a single value, variable, operand or statement.
///
/// Unlike the other productions an argument must consume its whole range;
/// an alternative that stops short counts as a failed attempt.
pub fn parse_argument(parser: &Parser, cursor: &mut usize, end: usize, depth: usize) -> ParseResult {
    parser.check_depth(depth)?;
    let start = *cursor;

    if start >= end {
        return Err(Diagnostic::strong(ErrorKind::SyntaxError, "Argument with size <1")
            .at_line(parser.line_at(start)));
    }

    let alternatives: [(&str, Production); 4] = [
        ("value", parse_value),
        ("variable", parse_variable),
        ("operand", parse_operand),
        ("statement", parse_statement),
    ];

    let mut attempts = vec![];
    for (name, production) in alternatives {
        match production(parser, cursor, end, depth + 1) {
            Ok(node) if *cursor == end => return Ok(node),
            Ok(_) => {
                let stopped = parser.line_at(*cursor);
                *cursor = start;
                attempts.push(
                    Diagnostic::weak(
                        ErrorKind::UnexpectedToken,
                        format!("{} ended before the end of the range", name),
                    )
                    .at_line(stopped),
                );
            }
            Err(diagnostic) if diagnostic.is_strong() => {
                *cursor = start;
                return Err(Diagnostic::wrap_strong(diagnostic));
            }
            Err(diagnostic) => {
                parser.discard(name, &diagnostic);
                *cursor = start;
                attempts.push(diagnostic);
            }
        }
    }

    Err(Diagnostic::weak(ErrorKind::InvalidArgument, "No valid argument found")
        .at_line(parser.line_at(start))
        .with_children(attempts))
}

/// An identifier followed by any number of bracketed indexes.
pub fn parse_variable(parser: &Parser, cursor: &mut usize, end: usize, depth: usize) -> ParseResult {
    let token = parser.enter("variable", *cursor, end, depth)?;
    let start = *cursor;

    if token.kind != TokenKind::Identifier {
        return Err(Diagnostic::weak(ErrorKind::ExpectedIdentifier, "Expected identifier")
            .at_line(Some(token.line)));
    }

    let mut node = Node::with_token(NodeType::Variable, token.clone());
    *cursor += 1;

    while parser.kind_at(*cursor, end) == Some(TokenKind::OpenBracket) {
        let open = *cursor;
        let Some(close) = parser.find_closing(open, end) else {
            *cursor = start;
            return Err(Diagnostic::strong(ErrorKind::SyntaxError, "Missing closing bracket")
                .at_line(parser.line_at(open)));
        };

        let mut inner = open + 1;
        match parse_argument(parser, &mut inner, close, depth + 1) {
            Ok(index) => node.children.push(index),
            Err(diagnostic) if diagnostic.is_strong() => {
                *cursor = start;
                return Err(Diagnostic::wrap_strong(diagnostic));
            }
            Err(diagnostic) => {
                *cursor = start;
                return Err(Diagnostic::strong(ErrorKind::InvalidArgument, "Malformed array index")
                    .at_line(parser.line_at(open))
                    .with_children(vec![diagnostic]));
            }
        }

        *cursor = close + 1;
    }

    if !node.children.is_empty() {
        node.subtype = NodeSubType::ArrayAccess;
    }

    Ok(node)
}

pub fn parse_value(parser: &Parser, cursor: &mut usize, end: usize, depth: usize) -> ParseResult {
    let token = parser.enter("value", *cursor, end, depth)?;

    if token.kind != TokenKind::IntLiteral {
        return Err(Diagnostic::weak(ErrorKind::ExpectedStatement, "Expected INT_LITERAL")
            .at_line(Some(token.line)));
    }

    *cursor += 1;
    Ok(Node::with_token(NodeType::Value, token.clone()))
}
