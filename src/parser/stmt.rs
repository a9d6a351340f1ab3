use tracing::trace;

use crate::{
    ast::ast::{Node, NodeSubType, NodeType},
    errors::diagnostic::{Diagnostic, ErrorKind},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    expr::{parse_operand, parse_parentheses},
    parser::{ParseResult, Parser},
};

/// Statement production.
///
/// Alternatives, first success wins: `return`, a parenthesized group, a
/// prefix unary operator, then an operand followed by a binary or postfix
/// operator. A strong failure from any alternative is returned immediately.
pub fn parse_statement(parser: &Parser, cursor: &mut usize, end: usize, depth: usize) -> ParseResult {
    let start = *cursor;
    let result = parse_statement_alternatives(parser, cursor, end, depth);
    if result.is_err() {
        *cursor = start;
    }
    result
}

fn parse_statement_alternatives(
    parser: &Parser,
    cursor: &mut usize,
    end: usize,
    depth: usize,
) -> ParseResult {
    let token = parser.enter("statement", *cursor, end, depth)?;

    if token.is_reserved("return") {
        return parse_return_stmt(parser, token, cursor, end, depth);
    }

    if token.kind == TokenKind::OpenParen {
        let group = parse_parenthesized_stmt(parser, cursor, end, depth)?;
        return extend_chain(parser, group, cursor, end, depth);
    }

    let mut attempts = vec![];

    if token.kind == TokenKind::UnaryOperator {
        match parse_prefix_stmt(parser, token, cursor, end, depth) {
            Ok(node) => return extend_chain(parser, node, cursor, end, depth),
            Err(diagnostic) if diagnostic.is_strong() => return Err(diagnostic),
            Err(diagnostic) => {
                parser.discard("statement", &diagnostic);
                attempts.push(diagnostic);
            }
        }
    }

    match parse_operator_stmt(parser, cursor, end, depth) {
        Ok(node) => Ok(node),
        Err(diagnostic) if diagnostic.is_strong() => Err(diagnostic),
        Err(diagnostic) => {
            attempts.push(diagnostic);
            Err(Diagnostic::weak(ErrorKind::ExpectedStatement, "bad statement")
                .at_line(Some(token.line))
                .with_children(attempts))
        }
    }
}

/// `(1+2)+3`, `!x+1`: a complete group or prefix statement followed by an
/// operator becomes the left operand of an operator chain. If the chain does
/// not apply, `node` is kept as is.
fn extend_chain(parser: &Parser, node: Node, cursor: &mut usize, end: usize, depth: usize) -> ParseResult {
    if !parser.kind_at(*cursor, end).is_some_and(|kind| kind.is_operator()) {
        return Ok(node);
    }

    let after_node = *cursor;
    match parse_operator_tail(parser, into_operand(node.clone()), cursor, end, depth) {
        Ok(chained) => Ok(chained),
        Err(diagnostic) if diagnostic.is_strong() => Err(diagnostic),
        Err(diagnostic) => {
            parser.discard("statement", &diagnostic);
            *cursor = after_node;
            Ok(node)
        }
    }
}

fn parse_return_stmt(
    parser: &Parser,
    return_token: &Token,
    cursor: &mut usize,
    end: usize,
    depth: usize,
) -> ParseResult {
    let start = *cursor;
    *cursor += 1;
    let after_return = *cursor;

    let mut node = Node {
        token: Some(return_token.clone()),
        ..Node::statement(NodeSubType::Return, vec![])
    };

    let statement_attempt = match parse_statement(parser, cursor, end, depth + 1) {
        Ok(value) => {
            node.children.push(value);
            return Ok(node);
        }
        Err(diagnostic) if diagnostic.is_strong() => {
            *cursor = start;
            return Err(diagnostic);
        }
        Err(diagnostic) => diagnostic,
    };

    *cursor = after_return;
    match parse_operand(parser, cursor, end, depth + 1) {
        Ok(value) => {
            parser.discard("statement", &statement_attempt);
            node.children.push(value);
            Ok(node)
        }
        Err(diagnostic) if diagnostic.is_strong() => {
            *cursor = start;
            Err(diagnostic)
        }
        Err(_) if parser.config().allow_empty_return => {
            trace!(line = return_token.line, "return without a value");
            *cursor = after_return;
            Ok(node)
        }
        Err(diagnostic) => {
            *cursor = start;
            Err(Diagnostic::weak(ErrorKind::ExpectedStatement, "expected a value after return")
                .at_line(Some(return_token.line))
                .with_children(vec![statement_attempt, diagnostic]))
        }
    }
}

fn parse_parenthesized_stmt(parser: &Parser, cursor: &mut usize, end: usize, depth: usize) -> ParseResult {
    let start = *cursor;

    match parse_parentheses(parser, cursor, end, depth + 1) {
        Ok(group) => Ok(group),
        Err(diagnostic) if diagnostic.is_strong() => Err(diagnostic),
        Err(diagnostic) => Err(Diagnostic::weak(ErrorKind::InvalidArgument, "bad inside of parentheses")
            .at_line(parser.line_at(start))
            .with_children(vec![diagnostic])),
    }
}

fn parse_prefix_stmt(
    parser: &Parser,
    operator: &Token,
    cursor: &mut usize,
    end: usize,
    depth: usize,
) -> ParseResult {
    let start = *cursor;
    *cursor += 1;

    match parse_operand(parser, cursor, end, depth + 1) {
        Ok(operand) => Ok(Node::statement(
            NodeSubType::PrefixUnary,
            vec![Node::operator(operator.clone()), operand],
        )),
        Err(diagnostic) => {
            *cursor = start;
            if diagnostic.is_strong() {
                return Err(diagnostic);
            }
            Err(Diagnostic::weak(ErrorKind::InvalidArgument, "bad operand of prefix operator")
                .at_line(Some(operator.line))
                .with_children(vec![diagnostic]))
        }
    }
}

fn parse_operator_stmt(parser: &Parser, cursor: &mut usize, end: usize, depth: usize) -> ParseResult {
    let start = *cursor;

    let left = match parse_operand(parser, cursor, end, depth + 1) {
        Ok(left) => left,
        Err(diagnostic) => {
            *cursor = start;
            return Err(diagnostic);
        }
    };

    match parse_operator_tail(parser, left, cursor, end, depth) {
        Ok(node) => Ok(node),
        Err(diagnostic) => {
            *cursor = start;
            Err(diagnostic)
        }
    }
}

/// Folds the operators following `first` into statements, left to right.
///
/// A binary operator takes the next operand as its right side. A unary
/// operator applies as postfix to the latest right operand, or to `first`
/// before any binary operator. Every completed binary statement becomes the
/// left operand of the next binary operator. At least one operator must apply.
fn parse_operator_tail(
    parser: &Parser,
    first: Node,
    cursor: &mut usize,
    end: usize,
    depth: usize,
) -> ParseResult {
    let start = *cursor;
    let mut accumulated = first;
    let mut chained = false;
    let mut after_binary = false;

    while let Some(token) = parser.token(*cursor, end) {
        match token.kind {
            TokenKind::BinaryOperator => {
                *cursor += 1;
                let right = match parse_operand(parser, cursor, end, depth + 1) {
                    Ok(right) => right,
                    Err(diagnostic) if diagnostic.is_strong() => {
                        *cursor = start;
                        return Err(Diagnostic::wrap_strong(diagnostic));
                    }
                    Err(diagnostic) => {
                        *cursor = start;
                        return Err(Diagnostic::weak(
                            ErrorKind::InvalidArgument,
                            "bad 2nd operand of binary operator",
                        )
                        .at_line(Some(token.line))
                        .with_children(vec![diagnostic]));
                    }
                };

                let left = chain_operand(accumulated, chained);
                accumulated = Node::statement(
                    NodeSubType::BinaryOp,
                    vec![left, Node::operator(token.clone()), right],
                );
                after_binary = true;
            }
            TokenKind::UnaryOperator if after_binary => {
                *cursor += 1;
                // `1 + x++` increments `x`, not the sum
                if let Some(right) = accumulated.children.pop() {
                    let postfix = Node::statement(
                        NodeSubType::PostfixUnary,
                        vec![right, Node::operator(token.clone())],
                    );
                    accumulated.children.push(Node::operand(postfix));
                }
            }
            TokenKind::UnaryOperator => {
                *cursor += 1;
                let operand = chain_operand(accumulated, chained);
                accumulated = Node::statement(
                    NodeSubType::PostfixUnary,
                    vec![operand, Node::operator(token.clone())],
                );
            }
            _ => break,
        }

        chained = true;
    }

    if !chained {
        *cursor = start;
        return Err(Diagnostic::weak(
            ErrorKind::ExpectedStatement,
            "expected an operator after operand",
        )
        .at_line(parser.line_at(start)));
    }

    Ok(accumulated)
}

fn chain_operand(node: Node, chained: bool) -> Node {
    if chained {
        Node::operand(node)
    } else {
        node
    }
}

fn into_operand(node: Node) -> Node {
    if node.node_type == NodeType::Operand {
        node
    } else {
        Node::operand(node)
    }
}
