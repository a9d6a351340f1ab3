//! Error types and error reporting for the front end.
//!
//! This module defines:
//!
//! - `Error`, the lexical error with the line it was found on
//! - `Diagnostic`, the tree-shaped record of failed grammar alternatives
//! - `ErrorKind`, the failure vocabulary shared by both
//! - Helpful error messages and suggestions

pub mod diagnostic;
pub mod errors;

#[cfg(test)]
mod tests;
