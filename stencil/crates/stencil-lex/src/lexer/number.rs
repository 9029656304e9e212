//! Number literal lexing.
//!
//! This module handles lexing of integer and floating-point literals.

use crate::error::{LexError, LexResult, NumericError};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Integer: `42`, `007`
    /// - Double: `12.`, `12.34`, `12e2`, `12.e2`, `1.5E-3`
    ///
    /// A `.` followed by another `.` is left for the range operator, so
    /// `1..5` is an integer, `..` and another integer. The literal ends at
    /// its last digit: `12abc` is the integer `12` and whatever follows is
    /// lexed on its own.
    ///
    /// # Returns
    ///
    /// Either a `TokenKind::Integer` token carrying an `i64` or a
    /// `TokenKind::Number` token carrying an `f64`.
    pub fn lex_number(&mut self) -> LexResult<Token> {
        let is_digit = |b: u8| b.is_ascii_digit();
        self.cursor.eat_while(is_digit);

        let mut is_double = false;

        if self.cursor.current() == Some(b'.') && self.cursor.peek(1) != Some(b'.') {
            is_double = true;
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
        }

        if matches!(self.cursor.current(), Some(b'e' | b'E')) {
            is_double = true;
            self.cursor.advance();
            if matches!(self.cursor.current(), Some(b'+' | b'-')) {
                self.cursor.advance();
            }
            if self.cursor.eat_while(is_digit) == 0 {
                return Err(self.numeric_error(NumericError::MissingExponentDigits));
            }
        }

        let text = self.cursor.slice_from(self.token_start.position);
        let location = self.token_start.location;

        if is_double {
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    Ok(Token::new(TokenKind::Number, location, value))
                },
                _ => Err(self.numeric_error(NumericError::NotFinite)),
            }
        } else {
            match text.parse::<i64>() {
                Ok(value) => Ok(Token::new(TokenKind::Integer, location, value)),
                Err(_) => Err(self.numeric_error(NumericError::Overflow)),
            }
        }
    }

    fn numeric_error(&self, reason: NumericError) -> LexError {
        LexError::InvalidNumericLiteral {
            location: self.cursor.location(),
            literal: self.cursor.slice_from(self.token_start.position).to_string(),
            reason,
        }
    }
}
