//! Parser state and the per-statement driver.
//!
//! The parser never owns or mutates the token stream. Every production
//! receives a cursor into the shared slice, an exclusive end boundary and a
//! depth; it advances the cursor on success and restores it on failure, so
//! backtracking is a matter of copying a `usize`.

use tracing::{debug, trace};

use crate::{
    ast::ast::Node,
    errors::diagnostic::{Diagnostic, ErrorKind},
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::parse_argument, stmt::parse_statement};

/// Depth at which productions give up with `MaxDepth`.
pub const DEFAULT_MAX_DEPTH: usize = 15;

/// Outcome of one production: the matched subtree or why it did not match.
pub type ParseResult = Result<Node, Diagnostic>;

/// Signature shared by every grammar production.
pub type Production = fn(&Parser, &mut usize, usize, usize) -> ParseResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParserConfig {
    /// Productions deeper than this fail with `MaxDepth`.
    pub max_depth: usize,
    /// Whether `return` may stand without a value.
    pub allow_empty_return: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_empty_return: true,
        }
    }
}

/// Read-only view over the token stream shared by all productions.
pub struct Parser<'a> {
    tokens: &'a [Token],
    config: ParserConfig,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], config: ParserConfig) -> Self {
        Parser { tokens, config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// The token at `pos`, if `pos` lies before `end`.
    pub fn token(&self, pos: usize, end: usize) -> Option<&'a Token> {
        if pos < end {
            self.tokens.get(pos)
        } else {
            None
        }
    }

    pub fn kind_at(&self, pos: usize, end: usize) -> Option<TokenKind> {
        self.token(pos, end).map(|token| token.kind)
    }

    pub fn line_at(&self, pos: usize) -> Option<u32> {
        self.tokens.get(pos).map(|token| token.line)
    }

    /// Index of the token closing the bracket opened at `open`, honoring
    /// nesting, or `None` if it is not closed before `end`.
    pub fn find_closing(&self, open: usize, end: usize) -> Option<usize> {
        let open_kind = self.kind_at(open, end)?;
        let close_kind = match open_kind {
            TokenKind::OpenParen => TokenKind::CloseParen,
            TokenKind::OpenBracket => TokenKind::CloseBracket,
            _ => return None,
        };

        let mut nesting = 0;
        for pos in open..end {
            let kind = self.tokens[pos].kind;
            if kind == open_kind {
                nesting += 1;
            } else if kind == close_kind {
                nesting -= 1;
                if nesting == 0 {
                    return Some(pos);
                }
            }
        }

        None
    }

    pub fn check_depth(&self, depth: usize) -> Result<(), Diagnostic> {
        if depth > self.config.max_depth {
            return Err(Diagnostic::weak(
                ErrorKind::MaxDepth,
                format!("maximum parse depth of {} exceeded", self.config.max_depth),
            ));
        }

        Ok(())
    }

    /// Common entry check of a production: depth bound, then a non-empty
    /// range. Returns the token under the cursor.
    pub fn enter(
        &self,
        production: &'static str,
        cursor: usize,
        end: usize,
        depth: usize,
    ) -> Result<&'a Token, Diagnostic> {
        trace!(production, depth, cursor, end, "attempt");
        self.check_depth(depth)?;

        self.token(cursor, end).ok_or_else(|| {
            Diagnostic::weak(
                ErrorKind::UnexpectedEof,
                format!("{} reached the end of its range", production),
            )
            .at_line(self.line_at(cursor))
        })
    }

    /// Records an alternative that failed and was superseded or abandoned.
    pub fn discard(&self, production: &'static str, diagnostic: &Diagnostic) {
        trace!(
            production,
            kind = %diagnostic.kind,
            message = %diagnostic.message,
            "alternative discarded"
        );
    }

    /// Parses the tokens in `start..end` as one statement, which must consume
    /// the whole range.
    pub fn parse_segment(&self, start: usize, end: usize) -> ParseResult {
        let mut cursor = start;

        let statement_attempt = match parse_statement(self, &mut cursor, end, 0) {
            Ok(node) if cursor == end => return Ok(node),
            Ok(_) => return Err(self.trailing_tokens(cursor)),
            Err(diagnostic) if diagnostic.is_strong() || start == end => return Err(diagnostic),
            Err(diagnostic) => diagnostic,
        };

        // A bare expression such as `a[1];` is accepted the way the inside of
        // a pair of parentheses is.
        cursor = start;
        match parse_argument(self, &mut cursor, end, 0) {
            Ok(node) => {
                self.discard("statement", &statement_attempt);
                Ok(node)
            }
            Err(diagnostic) if diagnostic.is_strong() => Err(diagnostic),
            Err(diagnostic) => Err(Diagnostic::weak(ErrorKind::ExpectedStatement, "bad statement")
                .at_line(self.line_at(start))
                .with_children(vec![statement_attempt, diagnostic])),
        }
    }

    fn trailing_tokens(&self, pos: usize) -> Diagnostic {
        let found = self
            .tokens
            .get(pos)
            .and_then(Token::spelling)
            .unwrap_or_default();

        Diagnostic::strong(
            ErrorKind::UnexpectedToken,
            format!("unexpected `{}` after complete statement", found),
        )
        .at_line(self.line_at(pos))
    }
}

/// The result of parsing a whole token stream: one outcome per
/// semicolon-terminated segment, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub outcomes: Vec<ParseResult>,
}

impl ParseOutput {
    /// True iff every segment parsed.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(Result::is_ok)
    }

    pub fn trees(&self) -> impl Iterator<Item = &Node> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().ok())
    }

    /// Failed segments with their index.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &Diagnostic)> {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(index, outcome)| outcome.as_ref().err().map(|diagnostic| (index, diagnostic)))
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Parses a token stream with the default configuration.
pub fn parse(tokens: &[Token]) -> ParseOutput {
    parse_with_config(tokens, ParserConfig::default())
}

/// Splits the stream at every semicolon and parses each segment on its own.
pub fn parse_with_config(tokens: &[Token], config: ParserConfig) -> ParseOutput {
    let parser = Parser::new(tokens, config);
    let mut outcomes = vec![];
    let mut start = 0;

    for (index, token) in tokens.iter().enumerate() {
        if token.kind != TokenKind::Semicolon {
            continue;
        }

        let outcome = parser.parse_segment(start, index);
        match &outcome {
            Ok(node) => debug!(segment = outcomes.len(), nodes = node.size(), "parsed statement"),
            Err(diagnostic) => debug!(
                segment = outcomes.len(),
                kind = %diagnostic.kind,
                strong = diagnostic.strong,
                "failed to parse statement"
            ),
        }
        outcomes.push(outcome);

        start = index + 1;
    }

    if start < tokens.len() {
        outcomes.push(Err(Diagnostic::weak(
            ErrorKind::UnexpectedEof,
            "expected `;` after the last statement",
        )
        .at_line(parser.line_at(tokens.len() - 1))));
    }

    ParseOutput { outcomes }
}
