//! Location module - Source position tracking.
//!
//! A [`Location`] is a zero-indexed `(row, column)` pair. Rows advance on
//! every newline; columns count input units (bytes) from the start of the
//! row. Every token and every lexical error carries one.
//!
//! # Examples
//!
//! ```
//! use stencil_util::location::Location;
//!
//! let loc = Location::new(2, 7);
//! assert_eq!(loc.to_string(), "2:7");
//! assert_eq!(loc.line_number(), 3);
//! assert_eq!(loc.column_number(), 8);
//! ```

mod source_file;

pub use source_file::SourceFile;

use std::fmt;

/// Zero-indexed position in a template document
///
/// Ordering is lexicographic: first by row, then by column, which is
/// exactly the order in which a scanner visits positions.
///
/// # Examples
///
/// ```
/// use stencil_util::location::Location;
///
/// assert!(Location::new(0, 9) < Location::new(1, 0));
/// assert!(Location::new(1, 2) < Location::new(1, 3));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// Row (0-based)
    pub row: u32,
    /// Column (0-based, in input units)
    pub column: u32,
}

static_assertions::assert_impl_all!(Location: Copy, Send, Sync);

impl Location {
    /// The first position of any document
    pub const START: Location = Location { row: 0, column: 0 };

    /// Create a new location
    ///
    /// # Examples
    ///
    /// ```
    /// use stencil_util::location::Location;
    ///
    /// let loc = Location::new(1, 4);
    /// assert_eq!(loc.row, 1);
    /// assert_eq!(loc.column, 4);
    /// ```
    #[inline]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Location one unit further along the same row
    #[inline]
    pub const fn next_column(self) -> Self {
        Self {
            row: self.row,
            column: self.column.saturating_add(1),
        }
    }

    /// Location at the start of the following row
    #[inline]
    pub const fn next_row(self) -> Self {
        Self {
            row: self.row.saturating_add(1),
            column: 0,
        }
    }

    /// Location reached after consuming `byte` from this one
    ///
    /// # Examples
    ///
    /// ```
    /// use stencil_util::location::Location;
    ///
    /// let loc = Location::START.step(b'a').step(b'\n');
    /// assert_eq!(loc, Location::new(1, 0));
    /// ```
    #[inline]
    pub const fn step(self, byte: u8) -> Self {
        if byte == b'\n' {
            self.next_row()
        } else {
            self.next_column()
        }
    }

    /// Human-facing line number (1-based)
    #[inline]
    pub const fn line_number(&self) -> usize {
        self.row as usize + 1
    }

    /// Human-facing column number (1-based)
    #[inline]
    pub const fn column_number(&self) -> usize {
        self.column as usize + 1
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

impl From<(u32, u32)> for Location {
    #[inline]
    fn from((row, column): (u32, u32)) -> Self {
        Self::new(row, column)
    }
}
