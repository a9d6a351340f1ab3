use std::fmt::Display;

/// Why a grammar production failed.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ErrorKind {
    /// Pure wrapper used when a strong failure is re-raised by an enclosing
    /// production.
    None,
    MaxDepth,
    UnexpectedEof,
    ExpectedStatement,
    ExpectedIdentifier,
    InvalidArgument,
    SyntaxError,
    UnexpectedToken,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::None => "NONE",
            ErrorKind::MaxDepth => "MAX_DEPTH",
            ErrorKind::UnexpectedEof => "UNEXPECTED_EOF",
            ErrorKind::ExpectedStatement => "EXPECTED_STATEMENT",
            ErrorKind::ExpectedIdentifier => "EXPECTED_IDENTIFIER",
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::SyntaxError => "SYNTAX_ERROR",
            ErrorKind::UnexpectedToken => "UNEXPECTED_TOKEN",
        };
        write!(f, "{}", name)
    }
}

/// A failed parsing attempt together with the failed attempts nested beneath
/// it.
///
/// The tree mirrors the recursive descent: a production that tried several
/// alternatives keeps each alternative's failure as a child, in the order
/// they were tried. A `strong` failure proves the input is malformed, and
/// callers must not try sibling alternatives after seeing one.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub message: String,
    pub strong: bool,
    /// Line of the token the failed attempt started on, if any.
    pub line: Option<u32>,
    pub children: Vec<Diagnostic>,
}

impl Diagnostic {
    pub fn weak(kind: ErrorKind, message: impl Into<String>) -> Self {
        Diagnostic {
            kind,
            message: message.into(),
            strong: false,
            line: None,
            children: vec![],
        }
    }

    pub fn strong(kind: ErrorKind, message: impl Into<String>) -> Self {
        Diagnostic {
            strong: true,
            ..Diagnostic::weak(kind, message)
        }
    }

    /// Re-raises a strong failure one level up without adding information.
    pub fn wrap_strong(inner: Diagnostic) -> Self {
        Diagnostic::strong(ErrorKind::None, "").with_children(vec![inner])
    }

    pub fn with_children(mut self, children: Vec<Diagnostic>) -> Self {
        self.children = children;
        self
    }

    pub fn with_strength(mut self, strong: bool) -> Self {
        self.strong = strong;
        self
    }

    pub fn at_line(mut self, line: Option<u32>) -> Self {
        self.line = line;
        self
    }

    pub fn is_strong(&self) -> bool {
        self.strong
    }

    /// Follows `None` wrappers down to the failure that was actually raised.
    pub fn root_cause(&self) -> &Diagnostic {
        let mut current = self;
        while current.kind == ErrorKind::None && current.children.len() == 1 {
            current = &current.children[0];
        }
        current
    }

    /// Depth-first, pre-order walk over this diagnostic and all descendants.
    pub fn iter(&self) -> DiagnosticIter<'_> {
        DiagnosticIter { stack: vec![self] }
    }

    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.iter().any(|diagnostic| diagnostic.kind == kind)
    }

    fn fmt_depth(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        write!(f, "{}", " -".repeat(depth))?;
        write!(f, "{}: {}", self.kind, self.message)?;
        if self.strong {
            write!(f, " (strong)")?;
        }
        if let Some(line) = self.line {
            write!(f, " [line {}]", line)?;
        }
        writeln!(f, ", {} children", self.children.len())?;

        for child in &self.children {
            child.fmt_depth(f, depth + 1)?;
        }

        Ok(())
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_depth(f, 0)
    }
}

pub struct DiagnosticIter<'a> {
    stack: Vec<&'a Diagnostic>,
}

impl<'a> Iterator for DiagnosticIter<'a> {
    type Item = &'a Diagnostic;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}
