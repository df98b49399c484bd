//! Calculation evaluation
//!
//! Applies a [`BinOp`] to two `i32` operands with checked arithmetic. The
//! divisor is compared against zero before the division path executes, and
//! every operation reports overflow instead of wrapping.

use crate::eval::errors::EvalError;
use crate::parser::ast::{BinOp, Calculation};

/// Evaluate a parsed calculation to its integer result.
///
/// Division truncates toward zero. `i32::MIN / -1` is the one division that
/// overflows and is reported as such, not as a wrap.
pub fn evaluate(calc: &Calculation) -> Result<i32, EvalError> {
    let (a, b) = (calc.lhs, calc.rhs);
    let location = calc.op_location;

    let result = match calc.op {
        BinOp::Add => a.checked_add(b),
        BinOp::Sub => a.checked_sub(b),
        BinOp::Mul => a.checked_mul(b),
        BinOp::Div => {
            if b == 0 {
                return Err(EvalError::DivisionByZero { location });
            }
            a.checked_div(b)
        }
    };

    result.ok_or(EvalError::IntegerOverflow {
        operation: format!("{} {} {}", a, calc.op, b),
        location,
    })
}
