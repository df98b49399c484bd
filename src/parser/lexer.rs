//! Lexer (tokenizer) for calculator input
//!
//! Produces location-tagged [`Token`]s on demand for the parser. Only two
//! kinds of token exist: signed integer literals and the four operator
//! symbols. A `-` immediately followed by a digit is lexed as a negative
//! literal, matching stream-extraction acceptance of signed operands; a `-`
//! followed by whitespace or end of input is the subtraction operator.
//!
//! Tokens are pulled one at a time so the parser never scans past the third
//! token of the fixed calculation form. Anything after the operator is left
//! unread, the way the original stream extraction left it in the buffer.

use super::ast::SourceLocation;
use std::fmt;
use thiserror::Error;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    IntLiteral(i32, SourceLocation),

    // Operators
    Plus(SourceLocation),  // +
    Minus(SourceLocation), // -
    Star(SourceLocation),  // *
    Slash(SourceLocation), // /

    // End of input
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::IntLiteral(_, loc)
            | Token::Plus(loc)
            | Token::Minus(loc)
            | Token::Star(loc)
            | Token::Slash(loc)
            | Token::Eof(loc) => *loc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::IntLiteral(n, _) => write!(f, "integer '{}'", n),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Minus(_) => write!(f, "'-'"),
            Token::Star(_) => write!(f, "'*'"),
            Token::Slash(_) => write!(f, "'/'"),
            Token::Eof(_) => write!(f, "end of input"),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, Error)]
pub enum LexError {
    #[error("Lexer error at line {}, column {}: unexpected character '{symbol}'", location.line, location.column)]
    UnexpectedCharacter {
        symbol: char,
        location: SourceLocation,
    },

    #[error("Lexer error at line {}, column {}: integer literal '{literal}' is out of range", location.line, location.column)]
    LiteralOutOfRange {
        literal: String,
        location: SourceLocation,
    },
}

/// Lexer for calculator input
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given input string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Get the next token, skipping leading whitespace.
    ///
    /// Returns [`Token::Eof`] once the input is exhausted; calling again after
    /// that keeps returning `Eof`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let loc = self.current_location();
        let ch = match self.advance() {
            Some(ch) => ch,
            None => return Ok(Token::Eof(loc)),
        };

        match ch {
            '0'..='9' => self.number_literal(ch, false, loc),

            '+' => Ok(Token::Plus(loc)),
            '-' => {
                // Negative literal when a digit follows directly
                if matches!(self.peek(), Some('0'..='9')) {
                    let first = self.advance().unwrap_or('0');
                    self.number_literal(first, true, loc)
                } else {
                    Ok(Token::Minus(loc))
                }
            }
            '*' => Ok(Token::Star(loc)),
            '/' => Ok(Token::Slash(loc)),

            other => Err(LexError::UnexpectedCharacter {
                symbol: other,
                location: loc,
            }),
        }
    }

    /// Scan a decimal integer literal starting with `first`.
    ///
    /// Digits accumulate in an `i64` so that both `i32::MAX` overflow and the
    /// asymmetric `i32::MIN` are range-checked exactly rather than wrapped.
    fn number_literal(
        &mut self,
        first: char,
        negative: bool,
        loc: SourceLocation,
    ) -> Result<Token, LexError> {
        let mut digits = String::new();
        digits.push(first);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let out_of_range = |digits: &str| LexError::LiteralOutOfRange {
            literal: if negative {
                format!("-{}", digits)
            } else {
                digits.to_string()
            },
            location: loc,
        };

        let magnitude: i64 = digits.parse().map_err(|_| out_of_range(&digits))?;
        let value = if negative { -magnitude } else { magnitude };

        i32::try_from(value)
            .map(|n| Token::IntLiteral(n, loc))
            .map_err(|_| out_of_range(&digits))
    }

    /// Skip whitespace, tracking line and column positions
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Consume and return current character
    fn advance(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied();
        if let Some(c) = ch {
            self.position += 1;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        ch
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}
