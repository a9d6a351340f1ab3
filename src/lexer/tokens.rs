use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("return");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    IntLiteral,
    Reserved,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    UnaryOperator,  // ++ -- !
    BinaryOperator, // + - * / % = < > += << && ...

    Semicolon,
    // Only lives until line numbers are stamped
    EndOfLine,
}

impl TokenKind {
    pub fn is_operator(&self) -> bool {
        matches!(self, TokenKind::UnaryOperator | TokenKind::BinaryOperator)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntLiteral => "INT_LITERAL",
            TokenKind::Reserved => "RESERVED",
            TokenKind::OpenParen => "OPEN_PARENTH",
            TokenKind::CloseParen => "CLOSE_PARENTH",
            TokenKind::OpenBracket => "OPEN_BRACKET",
            TokenKind::CloseBracket => "CLOSE_BRACKET",
            TokenKind::OpenCurly => "OPEN_CURLY",
            TokenKind::CloseCurly => "CLOSE_CURLY",
            TokenKind::UnaryOperator => "UNARY_OPERATOR",
            TokenKind::BinaryOperator => "BINARY_OPERATOR",
            TokenKind::Semicolon => "SEMI",
            TokenKind::EndOfLine => "NEWLINE",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Set for integer literals only.
    pub int_value: Option<i64>,
    /// Literal spelling of identifiers, reserved words and operators.
    pub text: Option<String>,
    /// 1-based, stamped once the whole input has been scanned.
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Token {
            kind,
            int_value: None,
            text: None,
            line: 0,
        }
    }

    pub fn with_text(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            text: Some(text.into()),
            ..Token::new(kind)
        }
    }

    pub fn int(value: i64) -> Self {
        Token {
            int_value: Some(value),
            ..Token::new(TokenKind::IntLiteral)
        }
    }

    /// True if this is the reserved word `word`.
    pub fn is_reserved(&self, word: &str) -> bool {
        self.kind == TokenKind::Reserved && self.text.as_deref() == Some(word)
    }

    /// The surface text that lexes back into this token.
    pub fn spelling(&self) -> Option<String> {
        match self.kind {
            TokenKind::IntLiteral => self.int_value.map(|value| value.to_string()),
            TokenKind::Identifier
            | TokenKind::Reserved
            | TokenKind::UnaryOperator
            | TokenKind::BinaryOperator => self.text.clone(),
            TokenKind::OpenParen => Some(String::from("(")),
            TokenKind::CloseParen => Some(String::from(")")),
            TokenKind::OpenBracket => Some(String::from("[")),
            TokenKind::CloseBracket => Some(String::from("]")),
            TokenKind::OpenCurly => Some(String::from("{")),
            TokenKind::CloseCurly => Some(String::from("}")),
            TokenKind::Semicolon => Some(String::from(";")),
            TokenKind::EndOfLine => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}", self.kind)?;
        if let Some(value) = self.int_value {
            write!(f, " = {}", value)?;
        }
        if let Some(text) = &self.text {
            write!(f, " = {}", text)?;
        }
        write!(f, "]")
    }
}

/// Lists tokens one source line per output line.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut result = String::new();
    let mut current_line = tokens.first().map(|token| token.line).unwrap_or(1);

    for token in tokens {
        if token.line != current_line {
            result.push('\n');
            current_line = token.line;
        } else if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(&token.to_string());
    }

    result
}
