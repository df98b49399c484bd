//! Calculator input parser
//!
//! This module transforms the raw input text into a [`ast::Calculation`]:
//! - [`lexer`]: Tokenization (input text → tokens)
//! - [`parse`]: Parsing (tokens → calculation)
//! - [`ast`]: Node definitions
//!
//! # Accepted Form
//!
//! Exactly three whitespace/newline-separated tokens, in order:
//! signed integer, signed integer, operator (`+`, `-`, `*`, `/`).
//! No prompt is printed and no input past the operator is consumed.
//!
//! # Parser Implementation
//!
//! Hand-written fixed-form parser pulling tokens from the lexer on demand.
//! No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parse;
