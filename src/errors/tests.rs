//! Unit tests for error handling.
//!
//! This module contains tests for lexical error types and the diagnostic tree.

use crate::errors::diagnostic::{Diagnostic, ErrorKind};
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        3,
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_line(), 3);
}

#[test]
fn test_syntax_error_kind() {
    let error = Error::new(
        ErrorImpl::SyntaxError {
            message: "expected end of multiline comment".to_string(),
        },
        2,
    );

    assert_eq!(error.kind(), ErrorKind::SyntaxError);
    assert_eq!(error.to_string(), "syntax error: expected end of multiline comment on line 2");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        1,
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnsupportedLiteral {
            token: "3.14".to_string(),
        },
        1,
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("3.14")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_diagnostic_strength() {
    assert!(!Diagnostic::weak(ErrorKind::MaxDepth, "").is_strong());
    assert!(Diagnostic::strong(ErrorKind::SyntaxError, "").is_strong());
    assert!(Diagnostic::weak(ErrorKind::InvalidArgument, "")
        .with_strength(true)
        .is_strong());
}

#[test]
fn test_diagnostic_root_cause() {
    let cause = Diagnostic::strong(ErrorKind::SyntaxError, "Missing closing bracket");
    let wrapped = Diagnostic::wrap_strong(Diagnostic::wrap_strong(cause.clone()));

    assert_eq!(wrapped.kind, ErrorKind::None);
    assert!(wrapped.is_strong());
    assert_eq!(wrapped.root_cause(), &cause);
}

#[test]
fn test_diagnostic_iter_is_preorder() {
    let tree = Diagnostic::weak(ErrorKind::InvalidArgument, "No valid operand found").with_children(vec![
        Diagnostic::weak(ErrorKind::ExpectedStatement, "Expected INT_LITERAL"),
        Diagnostic::weak(ErrorKind::ExpectedIdentifier, "Expected identifier")
            .with_children(vec![Diagnostic::weak(ErrorKind::MaxDepth, "")]),
    ]);

    let kinds: Vec<ErrorKind> = tree.iter().map(|diagnostic| diagnostic.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::InvalidArgument,
            ErrorKind::ExpectedStatement,
            ErrorKind::ExpectedIdentifier,
            ErrorKind::MaxDepth,
        ]
    );
    assert!(tree.contains(ErrorKind::MaxDepth));
    assert!(!tree.contains(ErrorKind::SyntaxError));
}

#[test]
fn test_diagnostic_display() {
    let tree = Diagnostic::strong(ErrorKind::InvalidArgument, "Malformed array index")
        .at_line(Some(4))
        .with_children(vec![Diagnostic::weak(ErrorKind::UnexpectedEof, "")]);

    assert_eq!(
        tree.to_string(),
        "INVALID_ARGUMENT: Malformed array index (strong) [line 4], 1 children\n -UNEXPECTED_EOF: , 0 children\n"
    );
}
