//! Surface rendering of parse trees.

use super::ast::{Node, NodeType};

impl Node {
    /// Renders the subtree back into source text, one space between tokens.
    ///
    /// Statements used as operands are parenthesized, so re-lexing and
    /// re-parsing the output yields a tree [`equivalent`](Node::equivalent) to
    /// this one. Redundant parentheses are not kept.
    pub fn render(&self) -> String {
        let mut parts = vec![];
        self.collect_spellings(&mut parts);
        parts.join(" ")
    }

    fn collect_spellings(&self, parts: &mut Vec<String>) {
        match self.node_type {
            NodeType::Value | NodeType::Operator => parts.extend(self.text()),
            NodeType::Variable => {
                parts.extend(self.text());
                for index in &self.children {
                    parts.push(String::from("["));
                    index.collect_spellings(parts);
                    parts.push(String::from("]"));
                }
            }
            NodeType::Operand => {
                for child in &self.children {
                    if child.node_type == NodeType::Statement {
                        parts.push(String::from("("));
                        child.collect_spellings(parts);
                        parts.push(String::from(")"));
                    } else {
                        child.collect_spellings(parts);
                    }
                }
            }
            NodeType::Statement => {
                // Return statements are anchored on the `return` token
                parts.extend(self.text());
                for child in &self.children {
                    child.collect_spellings(parts);
                }
            }
        }
    }

    /// Whether two trees have the same tokens and statement structure,
    /// ignoring the operand wrappers that redundant parentheses add or drop.
    pub fn equivalent(&self, other: &Node) -> bool {
        self.strip_operands() == other.strip_operands()
    }

    fn strip_operands(&self) -> Node {
        if self.node_type == NodeType::Operand && self.children.len() == 1 {
            return self.children[0].strip_operands();
        }

        Node {
            node_type: self.node_type,
            subtype: self.subtype,
            token: self.token.clone(),
            children: self.children.iter().map(Node::strip_operands).collect(),
        }
    }
}
