//! String literal lexing.
//!
//! This module handles lexing of single- and double-quoted strings.

use crate::error::{BlockKind, LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal delimited by `"` or `'`.
    ///
    /// A backslash makes the following unit literal, so `\\` is a backslash
    /// and `\"` is a quote; the backslash itself is dropped. The value is the
    /// opening quote followed by the decoded body. The closing quote is
    /// consumed but not stored.
    ///
    /// Reaching the closer of `block` or end of input before the closing
    /// quote is an error.
    pub fn lex_string(&mut self, block: BlockKind) -> LexResult<Token> {
        let location = self.token_start.location;
        let quote = match self.cursor.current() {
            Some(b) => b,
            None => return Err(self.unterminated_string('"')),
        };
        self.cursor.advance();

        let mut value = String::with_capacity(16);
        value.push(char::from(quote));
        let mut segment = self.cursor.position();

        loop {
            match self.cursor.current() {
                None => return Err(self.unterminated_string(char::from(quote))),
                Some(b) if b == quote => {
                    value.push_str(self.cursor.slice_from(segment));
                    self.cursor.advance();
                    return Ok(Token::new(TokenKind::String, location, value));
                },
                Some(b'\\') => {
                    value.push_str(self.cursor.slice_from(segment));
                    self.cursor.advance();
                    if self.cursor.is_at_end() {
                        return Err(self.unterminated_string(char::from(quote)));
                    }
                    // The escaped unit starts the next segment
                    segment = self.cursor.position();
                    self.cursor.advance();
                },
                Some(_) if self.cursor.starts_with(block.closer().as_bytes()) => {
                    return Err(self.unterminated_string(char::from(quote)));
                },
                Some(_) => self.cursor.advance(),
            }
        }
    }

    fn unterminated_string(&self, quote: char) -> LexError {
        LexError::UnterminatedString {
            location: self.cursor.location(),
            quote,
        }
    }
}
