//! Literal text scanning.
//!
//! Text runs extend up to the next region opener. Candidate openers are
//! located with `memchr`, so long runs of markup are skipped in bulk.

use memchr::memchr;

use crate::error::BlockKind;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a text run and the opener that ends it, if any.
    ///
    /// Emits one `Text` token for a non-empty run. A `{` that does not start
    /// `{{`, `{%` or `{#` is part of the run, as are stray closers.
    ///
    /// # Returns
    ///
    /// `false` when the run reached end of input.
    pub fn lex_text(&mut self) -> bool {
        self.start_token();

        loop {
            let remaining = self.cursor.remaining_bytes();
            let Some(offset) = memchr(b'{', remaining) else {
                self.cursor.advance_bytes(remaining.len());
                self.flush_text();
                return false;
            };

            self.cursor.advance_bytes(offset);
            let opener = match self.cursor.peek(1) {
                Some(b'{') => Some(BlockKind::Expansion),
                Some(b'%') => Some(BlockKind::Command),
                Some(b'#') => Some(BlockKind::Comment),
                _ => None,
            };

            match opener {
                Some(block) => {
                    self.flush_text();
                    self.open_region(block);
                    return true;
                },
                None => self.cursor.advance(),
            }
        }
    }

    /// Emits the pending run from the token start to the cursor.
    fn flush_text(&mut self) {
        let run = self.cursor.slice_from(self.token_start.position);
        if !run.is_empty() {
            let token = Token::new(TokenKind::Text, self.token_start.location, run);
            self.push(token);
        }
    }
}
