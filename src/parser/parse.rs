//! Fixed-form calculation parser
//!
//! This module provides the [`Parser`] struct and its error type. The input
//! grammar is a fixed three-token form, consumed in order:
//!
//! ```text
//! calculation := integer integer operator
//! ```
//!
//! Tokens are pulled from the lexer on demand, so input after the operator is
//! never read. An integer where an operator is expected (or the reverse), or
//! the stream ending early, is a reported parse error rather than silently
//! ignored.

use crate::parser::ast::{BinOp, Calculation, SourceLocation};
use crate::parser::lexer::{LexError, Lexer, Token};
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("Parse error at line {}, column {}: expected integer operand, found {got}", location.line, location.column)]
    ExpectedInteger {
        got: String,
        location: SourceLocation,
    },

    #[error("Parse error at line {}, column {}: expected operator, found {got}", location.line, location.column)]
    ExpectedOperator {
        got: String,
        location: SourceLocation,
    },

    #[error("Parse error at line {}, column {}: invalid operator '{symbol}'", location.line, location.column)]
    InvalidOperator {
        symbol: char,
        location: SourceLocation,
    },

    #[error("Parse error at line {}, column {}: unexpected end of input, expected {expected}", location.line, location.column)]
    UnexpectedEnd {
        expected: &'static str,
        location: SourceLocation,
    },

    #[error(transparent)]
    Lex(#[from] LexError),
}

impl ParseError {
    /// True when the parse failed only because the stream ended before all
    /// three tokens arrived. More input may still complete the calculation.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, ParseError::UnexpectedEnd { .. })
    }
}

/// Parser for the fixed integer-integer-operator form
pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Self {
            lexer: Lexer::new(input),
        }
    }

    /// Parse one complete calculation: two integer operands and an operator.
    pub fn parse_calculation(&mut self) -> Result<Calculation, ParseError> {
        let lhs = self.expect_int()?;
        let rhs = self.expect_int()?;
        let (op, op_location) = self.expect_operator()?;

        Ok(Calculation {
            lhs,
            rhs,
            op,
            op_location,
        })
    }

    /// Consume the next token, requiring an integer literal.
    fn expect_int(&mut self) -> Result<i32, ParseError> {
        let token = self.lexer.next_token()?;
        match token {
            Token::IntLiteral(n, _) => Ok(n),
            Token::Eof(loc) => Err(ParseError::UnexpectedEnd {
                expected: "integer operand",
                location: loc,
            }),
            other => Err(ParseError::ExpectedInteger {
                got: other.to_string(),
                location: other.location(),
            }),
        }
    }

    /// Consume the next token, requiring one of the four operators.
    fn expect_operator(&mut self) -> Result<(BinOp, SourceLocation), ParseError> {
        let token = match self.lexer.next_token() {
            Ok(token) => token,
            // A stray symbol in operator position is an invalid operator,
            // not a generic scan failure
            Err(LexError::UnexpectedCharacter { symbol, location }) => {
                return Err(ParseError::InvalidOperator { symbol, location });
            }
            Err(e) => return Err(e.into()),
        };
        match token {
            Token::Plus(loc) => Ok((BinOp::Add, loc)),
            Token::Minus(loc) => Ok((BinOp::Sub, loc)),
            Token::Star(loc) => Ok((BinOp::Mul, loc)),
            Token::Slash(loc) => Ok((BinOp::Div, loc)),
            Token::Eof(loc) => Err(ParseError::UnexpectedEnd {
                expected: "operator",
                location: loc,
            }),
            other => Err(ParseError::ExpectedOperator {
                got: other.to_string(),
                location: other.location(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_addition() {
        let calc = Parser::new("5 3 +").parse_calculation().unwrap();

        assert_eq!(calc.lhs, 5);
        assert_eq!(calc.rhs, 3);
        assert_eq!(calc.op, BinOp::Add);
        assert_eq!(calc.op_location, SourceLocation::new(1, 5));
    }

    #[test]
    fn test_parse_all_operators() {
        let cases = [
            ("1 2 +", BinOp::Add),
            ("1 2 -", BinOp::Sub),
            ("1 2 *", BinOp::Mul),
            ("1 2 /", BinOp::Div),
        ];

        for (input, expected) in cases {
            let calc = Parser::new(input).parse_calculation().unwrap();
            assert_eq!(calc.op, expected, "input: {}", input);
        }
    }

    #[test]
    fn test_parse_negative_operands() {
        let calc = Parser::new("-7 -3 /").parse_calculation().unwrap();

        assert_eq!(calc.lhs, -7);
        assert_eq!(calc.rhs, -3);
        assert_eq!(calc.op, BinOp::Div);
    }

    #[test]
    fn test_newline_separated_input() {
        let calc = Parser::new("5\n3\n+\n").parse_calculation().unwrap();

        assert_eq!(calc.lhs, 5);
        assert_eq!(calc.rhs, 3);
        assert_eq!(calc.op, BinOp::Add);
    }

    #[test]
    fn test_trailing_input_is_ignored() {
        // Stream-extraction parity: nothing past the operator is read,
        // so trailing garbage cannot fail the parse
        let calc = Parser::new("5 3 + anything $ goes").parse_calculation().unwrap();

        assert_eq!(calc.lhs, 5);
        assert_eq!(calc.rhs, 3);
        assert_eq!(calc.op, BinOp::Add);
    }

    #[test]
    fn test_missing_operand() {
        let err = Parser::new("5 +").parse_calculation().unwrap_err();

        match err {
            ParseError::ExpectedInteger { got, .. } => assert_eq!(got, "'+'"),
            other => panic!("Expected ExpectedInteger, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_operator() {
        let err = Parser::new("5 3").parse_calculation().unwrap_err();

        match err {
            ParseError::UnexpectedEnd { expected, .. } => assert_eq!(expected, "operator"),
            other => panic!("Expected UnexpectedEnd, got {:?}", other),
        }
        assert!(Parser::new("5 3").parse_calculation().unwrap_err().is_incomplete());
    }

    #[test]
    fn test_empty_input() {
        let err = Parser::new("").parse_calculation().unwrap_err();

        assert!(matches!(err, ParseError::UnexpectedEnd { .. }));
        assert!(err.is_incomplete());
    }

    #[test]
    fn test_wrong_token_is_not_incomplete() {
        // A mistyped token can never be completed by more input
        assert!(!Parser::new("5 +").parse_calculation().unwrap_err().is_incomplete());
    }

    #[test]
    fn test_non_numeric_operand() {
        let err = Parser::new("a b +").parse_calculation().unwrap_err();

        // 'a' is not a literal or operator symbol; in operand position it
        // surfaces as the lexer's neutral diagnostic
        assert!(matches!(err, ParseError::Lex(LexError::UnexpectedCharacter { .. })));
        assert!(err.to_string().contains("unexpected character 'a'"));
    }

    #[test]
    fn test_unrecognized_operator() {
        let err = Parser::new("5 3 %").parse_calculation().unwrap_err();

        match &err {
            ParseError::InvalidOperator { symbol, location } => {
                assert_eq!(*symbol, '%');
                assert_eq!(location.column, 5);
            }
            other => panic!("Expected InvalidOperator, got {:?}", other),
        }
        assert!(err.to_string().contains("invalid operator '%'"));
    }
}
