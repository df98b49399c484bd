//! Calculation evaluation engine
//!
//! This module provides the evaluation logic:
//! - [`engine`]: Checked application of an operator to two operands
//! - [`errors`]: Evaluation error types
//!
//! # Evaluation Model
//!
//! One [`crate::parser::ast::Calculation`] in, one `i32` out. Division by
//! zero and integer overflow are reported errors, never wraps or panics.

pub mod engine;
pub mod errors;
