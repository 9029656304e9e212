//! Comment skipping.
//!
//! Comments produce no tokens and do not nest: the first `#}` closes them.

use memchr::memchr;

use crate::error::{BlockKind, LexError, LexResult};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips the body of a comment and its closer.
    ///
    /// Called with the cursor just past `{#`.
    pub fn skip_comment(&mut self) -> LexResult<()> {
        loop {
            let remaining = self.cursor.remaining_bytes();
            let Some(offset) = memchr(b'#', remaining) else {
                self.cursor.advance_bytes(remaining.len());
                return Err(LexError::UnterminatedBlock {
                    location: self.cursor.location(),
                    block: BlockKind::Comment,
                });
            };

            self.cursor.advance_bytes(offset);
            if self.cursor.peek(1) == Some(b'}') {
                self.close_region(BlockKind::Comment);
                return Ok(());
            }
            self.cursor.advance();
        }
    }
}
