use std::fmt::Display;

use crate::lexer::tokens::Token;

/// Node Types
///
/// The grammar category a node was produced by.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeType {
    Statement,
    Operand,
    Variable,
    Value,
    Operator,
}

impl Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeType::Statement => "statement",
            NodeType::Operand => "operand",
            NodeType::Variable => "variable",
            NodeType::Value => "value",
            NodeType::Operator => "operator",
        };
        write!(f, "{}", name)
    }
}

/// Node Sub Types
///
/// Refines a node's category, e.g. which statement shape matched.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeSubType {
    None,
    Return,
    PrefixUnary,
    PostfixUnary,
    BinaryOp,
    ArrayAccess,
}

impl Display for NodeSubType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeSubType::None => "none",
            NodeSubType::Return => "return",
            NodeSubType::PrefixUnary => "prefix_unary",
            NodeSubType::PostfixUnary => "postfix_unary",
            NodeSubType::BinaryOp => "binary_op",
            NodeSubType::ArrayAccess => "array_access",
        };
        write!(f, "{}", name)
    }
}

/// A parse tree element.
///
/// Children are ordered left to right as they appear in the source, so a
/// binary statement holds `[left, operator, right]` and a postfix statement
/// holds `[operand, operator]`. Every node owns its subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub node_type: NodeType,
    pub subtype: NodeSubType,
    pub token: Option<Token>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(node_type: NodeType) -> Self {
        Node {
            node_type,
            subtype: NodeSubType::None,
            token: None,
            children: vec![],
        }
    }

    pub fn with_token(node_type: NodeType, token: Token) -> Self {
        Node {
            token: Some(token),
            ..Node::new(node_type)
        }
    }

    /// A statement node of the given shape.
    pub fn statement(subtype: NodeSubType, children: Vec<Node>) -> Self {
        Node {
            subtype,
            children,
            ..Node::new(NodeType::Statement)
        }
    }

    /// An operand wrapping a single matched production.
    pub fn operand(inner: Node) -> Self {
        Node {
            children: vec![inner],
            ..Node::new(NodeType::Operand)
        }
    }

    pub fn operator(token: Token) -> Self {
        Node::with_token(NodeType::Operator, token)
    }

    pub fn is(&self, node_type: NodeType, subtype: NodeSubType) -> bool {
        self.node_type == node_type && self.subtype == subtype
    }

    /// Spelling of the anchoring token, if it has one.
    pub fn text(&self) -> Option<String> {
        self.token.as_ref().and_then(|token| token.spelling())
    }

    /// Number of nodes in this subtree, this node included.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Node::size).sum::<usize>()
    }

    fn fmt_depth(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        if depth > 0 {
            write!(f, "└{}", " -".repeat(depth))?;
        }
        write!(f, "({})", self.node_type)?;
        if self.subtype != NodeSubType::None {
            write!(f, " - {}", self.subtype)?;
        }
        if let Some(token) = &self.token {
            write!(f, " : {}", token.kind)?;
            if let Some(value) = token.int_value {
                write!(f, "({})", value)?;
            }
            if let Some(text) = &token.text {
                write!(f, "(\"{}\")", text)?;
            }
        }
        writeln!(f)?;

        for child in &self.children {
            child.fmt_depth(f, depth + 1)?;
        }

        Ok(())
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_depth(f, 0)
    }
}
