use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_DEFAULT_HANDLER, MK_OPERATOR_HANDLER,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).unwrap(),
            handler,
        }
    }
}

lazy_static! {
    // Tried top to bottom at every position; the first anchored match wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^///", multiline_comment_handler),
        RegexPattern::new("^//[^\n]*", skip_handler),
        RegexPattern::new("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new("^\n", newline_handler),
        RegexPattern::new("^[ \t\r]+", skip_handler),
        RegexPattern::new("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new("^\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        RegexPattern::new("^\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        RegexPattern::new("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        RegexPattern::new("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        RegexPattern::new("^[+\\-*/%=<>]=", MK_OPERATOR_HANDLER!(TokenKind::BinaryOperator)),
        RegexPattern::new("^(\\+\\+|--)", MK_OPERATOR_HANDLER!(TokenKind::UnaryOperator)),
        RegexPattern::new("^(<<|>>)", MK_OPERATOR_HANDLER!(TokenKind::BinaryOperator)),
        RegexPattern::new("^[+\\-*/%=<>]", MK_OPERATOR_HANDLER!(TokenKind::BinaryOperator)),
        RegexPattern::new("^!=", MK_OPERATOR_HANDLER!(TokenKind::BinaryOperator)),
        RegexPattern::new("^(&&|\\|\\|)", MK_OPERATOR_HANDLER!(TokenKind::BinaryOperator)),
        RegexPattern::new("^!", MK_OPERATOR_HANDLER!(TokenKind::UnaryOperator)),
        RegexPattern::new("^[&|]", MK_OPERATOR_HANDLER!(TokenKind::BinaryOperator)),
        RegexPattern::new("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new("^[0-9.]+", number_handler),
    ];
}

const MULTILINE_COMMENT: &str = "///";

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Text matched by `regex` at the current position.
    pub fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|found| found.as_str().to_string())
            .unwrap_or_default()
    }

    fn newline(&mut self) {
        self.push(Token::new(TokenKind::EndOfLine));
        self.line += 1;
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let skipped = lexer.matched(regex).len();
    lexer.advance_n(skipped);
    Ok(())
}

fn newline_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    lexer.newline();
    lexer.advance_n(1);
    Ok(())
}

fn multiline_comment_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    let start_line = lexer.line;
    lexer.advance_n(MULTILINE_COMMENT.len());

    let Some(length) = lexer.remainder().find(MULTILINE_COMMENT) else {
        return Err(Error::new(
            ErrorImpl::SyntaxError {
                message: String::from("expected end of multiline comment"),
            },
            start_line,
        ));
    };

    let newlines = lexer.remainder()[..length].matches('\n').count();
    for _ in 0..newlines {
        lexer.newline();
    }

    lexer.advance_n(length + MULTILINE_COMMENT.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let value = lexer.matched(regex);
    lexer.advance_n(value.len());

    if RESERVED_LOOKUP.contains(value.as_str()) {
        lexer.push(Token::with_text(TokenKind::Reserved, value));
    } else {
        lexer.push(Token::with_text(TokenKind::Identifier, value));
    }

    Ok(())
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);

    if matched.contains('.') {
        return Err(Error::new(
            ErrorImpl::UnsupportedLiteral { token: matched },
            lexer.line,
        ));
    }

    let value = matched.parse::<i64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: matched.clone(),
            },
            lexer.line,
        )
    })?;

    lexer.advance_n(matched.len());
    lexer.push(Token::int(value));
    Ok(())
}

/// Stamps a running line number onto every token and drops the end-of-line
/// markers that carried it.
fn stamp_lines(tokens: &mut Vec<Token>) {
    let mut line = 1;

    for token in tokens.iter_mut() {
        if token.kind == TokenKind::EndOfLine {
            line += 1;
        }
        token.line = line;
    }

    tokens.retain(|token| token.kind != TokenKind::EndOfLine);
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source.to_string());

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex)?,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken {
                        token: lex.at().to_string(),
                    },
                    lex.line,
                ))
            }
        }
    }

    let mut tokens = lex.tokens;
    stamp_lines(&mut tokens);

    debug!(count = tokens.len(), lines = lex.line, "tokenized source");
    Ok(tokens)
}
