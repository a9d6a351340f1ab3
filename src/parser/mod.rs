//! Backtracking recursive-descent parser.
//!
//! The token stream is split at semicolons and each segment is parsed as one
//! statement. Productions try their alternatives in a fixed order and return
//! either a [`Node`](crate::ast::ast::Node) or a
//! [`Diagnostic`](crate::errors::diagnostic::Diagnostic) tree describing every
//! attempt that failed. A strong diagnostic stops all further backtracking.

pub mod expr;
pub mod parser;
pub mod stmt;
