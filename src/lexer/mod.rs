//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Recognition of the `return` reserved word, identifiers and integer literals
//! - Operator folding (`+=`, `++`, `<<`, `&&`, `!=`, ...)
//! - Single-line (`//`) and multi-line (`///`) comments
//! - Line stamping for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
