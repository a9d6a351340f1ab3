use std::fmt::Display;

use thiserror::Error;

use super::diagnostic::ErrorKind;

/// A lexical error, positioned on the source line where it was detected.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Maps the lexical error onto the shared error kind vocabulary used by
    /// parser diagnostics.
    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::SyntaxError { .. } => ErrorKind::SyntaxError,
            ErrorImpl::UnrecognisedToken { .. } => ErrorKind::UnexpectedToken,
            ErrorImpl::NumberParseError { .. } => ErrorKind::InvalidArgument,
            ErrorImpl::UnsupportedLiteral { .. } => ErrorKind::InvalidArgument,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnsupportedLiteral { .. } => "UnsupportedLiteral",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SyntaxError { message } => ErrorTip::Suggestion(message.clone()),
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnsupportedLiteral { token } => ErrorTip::Suggestion(format!(
                "Literal `{}` is not supported, only integer literals are",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on line {}", self.internal_error, self.line)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("syntax error: {message}")]
    SyntaxError { message: String },
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unsupported literal: {token:?}")]
    UnsupportedLiteral { token: String },
}
