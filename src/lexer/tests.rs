//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Reserved words and identifiers
//! - Integer literals
//! - Operators and punctuation
//! - Comments and line numbering
//! - Error cases

use crate::errors::{diagnostic::ErrorKind, errors::ErrorImpl};

use super::{
    lexer::tokenize,
    tokens::{format_tokens, Token, TokenKind},
};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens
        .iter()
        .map(|token| token.text.as_deref().unwrap_or(""))
        .collect()
}

#[test]
fn test_tokenize_simple_statement() {
    let tokens = tokenize("1+2;").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token { line: 1, ..Token::int(1) },
            Token { line: 1, ..Token::with_text(TokenKind::BinaryOperator, "+") },
            Token { line: 1, ..Token::int(2) },
            Token { line: 1, ..Token::new(TokenKind::Semicolon) },
        ]
    );
}

#[test]
fn test_tokenize_reserved_and_identifiers() {
    let tokens = tokenize("return foo _bar baz_123 returned").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Reserved,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
        ]
    );
    assert_eq!(texts(&tokens), vec!["return", "foo", "_bar", "baz_123", "returned"]);
    assert!(tokens[0].is_reserved("return"));
    assert!(!tokens[4].is_reserved("return"));
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("42 0 007").unwrap();

    assert_eq!(kinds(&tokens), vec![TokenKind::IntLiteral; 3]);
    assert_eq!(tokens[0].int_value, Some(42));
    assert_eq!(tokens[1].int_value, Some(0));
    assert_eq!(tokens[2].int_value, Some(7));
    assert!(tokens.iter().all(|token| token.text.is_none()));
}

#[test]
fn test_tokenize_assignment_operators() {
    let tokens = tokenize("+= -= *= /= %= == <= >=").unwrap();

    assert_eq!(kinds(&tokens), vec![TokenKind::BinaryOperator; 8]);
    assert_eq!(texts(&tokens), vec!["+=", "-=", "*=", "/=", "%=", "==", "<=", ">="]);
}

#[test]
fn test_tokenize_repeated_operators() {
    let tokens = tokenize("++ -- << >>").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::UnaryOperator,
            TokenKind::UnaryOperator,
            TokenKind::BinaryOperator,
            TokenKind::BinaryOperator,
        ]
    );
    assert_eq!(texts(&tokens), vec!["++", "--", "<<", ">>"]);
}

#[test]
fn test_tokenize_single_operators() {
    let tokens = tokenize("+ - * / % = < >").unwrap();

    assert_eq!(kinds(&tokens), vec![TokenKind::BinaryOperator; 8]);
    assert_eq!(texts(&tokens), vec!["+", "-", "*", "/", "%", "=", "<", ">"]);
}

#[test]
fn test_tokenize_logical_operators() {
    let tokens = tokenize("! != && || & |").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::UnaryOperator,
            TokenKind::BinaryOperator,
            TokenKind::BinaryOperator,
            TokenKind::BinaryOperator,
            TokenKind::BinaryOperator,
            TokenKind::BinaryOperator,
        ]
    );
    assert_eq!(texts(&tokens), vec!["!", "!=", "&&", "||", "&", "|"]);
}

#[test]
fn test_tokenize_operator_without_spaces() {
    let tokens = tokenize("a+++b<<=c").unwrap();

    assert_eq!(texts(&tokens), vec!["a", "++", "+", "b", "<<", "=", "c"]);
    assert_eq!(tokens[1].kind, TokenKind::UnaryOperator);
    assert_eq!(tokens[2].kind, TokenKind::BinaryOperator);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("( ) [ ] { } ;").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("x = 5; // this is a comment\ny = 10;").unwrap();

    assert_eq!(texts(&tokens), vec!["x", "=", "", "", "y", "=", "", ""]);
    assert_eq!(tokens[3].line, 1);
    assert_eq!(tokens[4].line, 2);
}

#[test]
fn test_tokenize_multiline_comment() {
    let tokens = tokenize("a /// one\ntwo\n /// b").unwrap();

    assert_eq!(texts(&tokens), vec!["a", "b"]);
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 3);
}

#[test]
fn test_tokenize_unterminated_multiline_comment() {
    let error = tokenize("x;\n/// never\nclosed\n").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::SyntaxError);
    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_tokenize_line_numbers() {
    let tokens = tokenize("a;\n\nb;\r\nc;").unwrap();

    let lines: Vec<u32> = tokens.iter().map(|token| token.line).collect();
    assert_eq!(lines, vec![1, 1, 3, 3, 4, 4]);
    assert!(tokens.iter().all(|token| token.kind != TokenKind::EndOfLine));
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize("  \tx   =\t  42  ").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Identifier, TokenKind::BinaryOperator, TokenKind::IntLiteral]
    );
}

#[test]
fn test_tokenize_empty_source() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("// only a comment").unwrap().is_empty());
}

#[test]
fn test_tokenize_float_literal_rejected() {
    let error = tokenize("x = 3.14;").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnsupportedLiteral {
            token: "3.14".to_string()
        }
    );
}

#[test]
fn test_tokenize_integer_overflow() {
    let error = tokenize("99999999999999999999").unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_tokenize_unrecognized_token() {
    let error = tokenize("x;\ny = @;").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_relex_spellings_keeps_kinds() {
    let source = "x += 1; return a[b]++ << --c; (!d && e) || f != 10;";
    let tokens = tokenize(source).unwrap();

    let spelled: Vec<String> = tokens.iter().filter_map(|token| token.spelling()).collect();
    let relexed = tokenize(&spelled.join(" ")).unwrap();

    assert_eq!(kinds(&relexed), kinds(&tokens));
    assert_eq!(texts(&relexed), texts(&tokens));
}

#[test]
fn test_format_tokens_groups_lines() {
    let tokens = tokenize("x++;\nreturn 1;").unwrap();

    assert_eq!(
        format_tokens(&tokens),
        "[IDENTIFIER = x] [UNARY_OPERATOR = ++] [SEMI]\n[RESERVED = return] [INT_LITERAL = 1] [SEMI]"
    );
}
