//! Byte cursor for traversing template documents.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking a document one input unit at a time. Units are bytes: every
//! delimiter, operator and keyword of the template language is ASCII, and
//! columns are counted in the same unit that is used for matching.

use memchr::{memchr_iter, memrchr};
use stencil_util::Location;

/// A cursor for traversing a document byte by byte.
///
/// The cursor keeps the current byte offset together with the zero-based
/// row and column of that offset.
///
/// # Example
///
/// ```
/// use stencil_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("{{ x }}");
/// assert_eq!(cursor.current(), Some(b'{'));
/// cursor.advance_n(3);
/// assert_eq!(cursor.current(), Some(b'x'));
/// assert_eq!(cursor.location().column, 3);
/// ```
pub struct Cursor<'a> {
    /// The document being traversed.
    source: &'a str,

    /// Current byte position in the document.
    position: usize,

    /// Row and column of `position`.
    location: Location,
}

/// A saved cursor position used to stamp token starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    /// Byte position in the document.
    pub position: usize,
    /// Row and column at that position.
    pub location: Location,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            location: Location::START,
        }
    }

    /// Returns the byte at the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.peek(0)
    }

    /// Returns the byte `offset` units ahead without consuming anything.
    ///
    /// # Example
    ///
    /// ```
    /// use stencil_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek(0), Some(b'a'));
    /// assert_eq!(cursor.peek(1), Some(b'b'));
    /// assert_eq!(cursor.peek(2), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.position + offset).copied()
    }

    /// Decodes the character starting at the cursor.
    ///
    /// Only used for error reporting, so the slow path is fine.
    pub fn current_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes one unit, updating row and column.
    ///
    /// Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(b) = self.current() {
            self.position += 1;
            self.location = self.location.step(b);
        }
    }

    /// Consumes up to `count` units one at a time.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Consumes `count` bytes at once (clamped to the input).
    ///
    /// Row/column bookkeeping is identical to calling [`advance`] `count`
    /// times, but newlines are located with `memchr`.
    ///
    /// [`advance`]: Cursor::advance
    pub fn advance_bytes(&mut self, count: usize) {
        let end = self.position.saturating_add(count).min(self.source.len());
        let skipped = &self.source.as_bytes()[self.position..end];

        let newlines = clamp_u32(memchr_iter(b'\n', skipped).count());
        match memrchr(b'\n', skipped) {
            Some(last) => {
                self.location.row = self.location.row.saturating_add(newlines);
                self.location.column = clamp_u32(skipped.len() - last - 1);
            }
            None => {
                self.location.column = self.location.column.saturating_add(clamp_u32(skipped.len()))
            }
        }

        self.position = end;
    }

    /// Returns true if the cursor is at the end of the document.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes `expected` if it is the current byte.
    ///
    /// # Example
    ///
    /// ```
    /// use stencil_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<=");
    /// assert!(cursor.match_byte(b'<'));
    /// assert!(!cursor.match_byte(b'<'));
    /// assert!(cursor.match_byte(b'='));
    /// ```
    pub fn match_byte(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the unconsumed input begins with `pattern`.
    #[inline]
    pub fn starts_with(&self, pattern: &[u8]) -> bool {
        self.remaining_bytes().starts_with(pattern)
    }

    /// Consumes bytes while `predicate` holds; returns how many were eaten.
    pub fn eat_while(&mut self, predicate: impl Fn(u8) -> bool) -> usize {
        let start = self.position;
        while self.current().is_some_and(&predicate) {
            self.advance();
        }
        self.position - start
    }

    /// Row and column of the cursor.
    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Current byte position in the document.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Snapshot of position and location, for stamping a token start.
    #[inline]
    pub fn mark(&self) -> Mark {
        Mark {
            position: self.position,
            location: self.location,
        }
    }

    /// Returns the document text from `start` up to the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use stencil_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("endif %}");
    /// let start = cursor.position();
    /// cursor.advance_n(5);
    /// assert_eq!(cursor.slice_from(start), "endif");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the unconsumed part of the document.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the unconsumed part of the document as bytes.
    #[inline]
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.source.as_bytes()[self.position..]
    }
}

/// Row and column counts stop at `u32::MAX` instead of wrapping.
fn clamp_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
