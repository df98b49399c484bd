// AST definitions for the calculator

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Binary operators recognised by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinOp::Add => write!(f, "+"),
            BinOp::Sub => write!(f, "-"),
            BinOp::Mul => write!(f, "*"),
            BinOp::Div => write!(f, "/"),
        }
    }
}

/// A single fixed-form calculation: two operands and one operator.
///
/// The operator's source location is retained so that evaluation errors
/// (division by zero, overflow) can point back at the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub lhs: i32,
    pub rhs: i32,
    pub op: BinOp,
    pub op_location: SourceLocation,
}
