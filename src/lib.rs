//! # Introduction
//!
//! Tally reads a single fixed-form calculation from an input stream — two
//! signed integers followed by an operator character — evaluates it with
//! checked 32-bit arithmetic, and produces one integer result.
//!
//! ## Execution pipeline
//!
//! ```text
//! Input → Lexer → Parser → Calculation → Evaluator → Result
//! ```
//!
//! 1. [`parser`] — tokenises the input and builds a
//!    [`parser::ast::Calculation`] from exactly three tokens: integer,
//!    integer, operator.
//! 2. [`eval`] — applies the selected [`parser::ast::BinOp`] with overflow
//!    and division-by-zero checks.
//!
//! ## Supported operators
//!
//! `+`, `-`, `*`, `/` (integer division, truncation toward zero). Any other
//! operator character is rejected with a diagnostic rather than left
//! undefined.

pub mod eval;
pub mod parser;
