//! Utility macros for the lexer.
//!
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for fixed punctuation
//! - `MK_OPERATOR_HANDLER!` - Creates a lexer handler for operators that keep
//!   their spelling
//!
//! These macros reduce boilerplate in the lexer pattern table. The expansion
//! site must have `Lexer`, `Regex`, `Token` and `Error` in scope.

/// Creates a lexer handler for a fixed, payload-free token.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal string value (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\(").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "("),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| -> Result<(), Error> {
            lexer.push(Token::new($kind));
            lexer.advance_n($value.len());
            Ok(())
        }
    };
}

/// Creates a lexer handler for an operator token whose spelling is whatever
/// the pattern matched (`+`, `+=`, `<<`, ...).
///
/// # Arguments
///
/// * `$kind` - Either `TokenKind::UnaryOperator` or `TokenKind::BinaryOperator`
#[macro_export]
macro_rules! MK_OPERATOR_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, regex: &Regex| -> Result<(), Error> {
            let matched = lexer.matched(regex);
            lexer.advance_n(matched.len());
            lexer.push(Token::with_text($kind, matched));
            Ok(())
        }
    };
}
