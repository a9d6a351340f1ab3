//! Integration tests for the full pipeline.
//!
//! These tests run source text through tokenization and parsing and check
//! the resulting trees and diagnostics.

use nicotine::{
    ast::ast::{NodeSubType, NodeType},
    display_error,
    errors::{diagnostic::ErrorKind, errors::ErrorImpl},
    lexer::lexer::tokenize,
    parser::parser::{parse, parse_with_config, ParserConfig},
};

#[test]
fn test_parse_program() {
    let source = "/// header\n\
                  comment ///\n\
                  i = 0;\n\
                  a[i] = a[i - 1] * 2; // double\n\
                  i++;\n\
                  return a[i];\n";
    let tokens = tokenize(source).unwrap();
    let output = parse(&tokens);

    assert!(output.is_success());
    assert_eq!(output.len(), 4);

    let trees: Vec<_> = output.trees().collect();
    assert!(trees[0].is(NodeType::Statement, NodeSubType::BinaryOp));
    assert!(trees[1].is(NodeType::Statement, NodeSubType::BinaryOp));
    assert!(trees[2].is(NodeType::Statement, NodeSubType::PostfixUnary));
    assert!(trees[3].is(NodeType::Statement, NodeSubType::Return));
    assert_eq!(trees[3].token.as_ref().unwrap().line, 6);
}

#[test]
fn test_parse_reports_every_segment() {
    let source = "x = 1;\ny = (x + ;\nz = x[;\nw;";
    let output = parse(&tokenize(source).unwrap());

    assert_eq!(output.len(), 4);
    assert!(output.outcomes[0].is_ok());
    assert!(output.outcomes[3].is_ok());

    let failures: Vec<_> = output.failures().collect();
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].0, 1);
    assert_eq!(failures[1].0, 2);
    assert!(failures[1].1.is_strong());
    assert_eq!(failures[1].1.root_cause().kind, ErrorKind::SyntaxError);
}

#[test]
fn test_lexical_error_stops_pipeline() {
    let source = "x = 1;\ny = 2.5;";
    let error = tokenize(source).unwrap_err();

    assert_eq!(error.get_line(), 2);
    assert!(matches!(error.get_impl(), ErrorImpl::UnsupportedLiteral { .. }));
    assert!(display_error(&error, source).contains("2 | y = 2.5;"));
}

#[test]
fn test_unrecognised_token() {
    let error = tokenize("x = @;").unwrap_err();

    assert!(matches!(error.get_impl(), ErrorImpl::UnrecognisedToken { token } if token == "@"));
    assert_eq!(error.kind(), ErrorKind::UnexpectedToken);
}

#[test]
fn test_strict_return() {
    let tokens = tokenize("return;").unwrap();

    assert!(parse(&tokens).is_success());
    let strict = ParserConfig {
        allow_empty_return: false,
        ..ParserConfig::default()
    };
    assert!(!parse_with_config(&tokens, strict).is_success());
}

#[test]
fn test_diagnostic_trace_output() {
    let output = parse(&tokenize("(1+2;").unwrap());
    let diagnostic = output.failures().next().unwrap().1;

    assert_eq!(
        diagnostic.to_string(),
        "SYNTAX_ERROR: Missing closing parenthesis (strong) [line 1], 0 children\n"
    );
}
