//! Evaluation error types
//!
//! This module defines [`EvalError`], which represents the errors that can
//! occur while applying an operator to two operands (as opposed to lex or
//! parse errors).
//!
//! All evaluation errors are fatal - they halt the program without printing a
//! numeric result.

use crate::parser::ast::SourceLocation;
use thiserror::Error;

/// Errors that can occur while evaluating a calculation
#[derive(Debug, Clone, Error)]
pub enum EvalError {
    /// Division with a zero divisor.
    ///
    /// The diagnostic text is the program's output contract for this case and
    /// must be printed on stdout verbatim, so the message carries no location
    /// or formatting of its own.
    #[error("Cannot divide by 0!")]
    DivisionByZero { location: SourceLocation },

    /// Arithmetic result does not fit in a 32-bit signed integer
    #[error("Evaluation error at line {}, column {}: integer overflow in {operation}", location.line, location.column)]
    IntegerOverflow {
        operation: String,
        location: SourceLocation,
    },
}
