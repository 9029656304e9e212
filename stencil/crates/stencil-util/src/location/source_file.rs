//! Source files with row lookup.
//!
//! A [`SourceFile`] pairs a template's text with precomputed row starts so
//! that a [`Location`] can be turned back into a byte offset or a line of
//! text for diagnostics.

use std::sync::Arc;

use super::Location;
use crate::error::{LocationError, LocationResult};

/// A template document with its name and row table
///
/// # Examples
///
/// ```
/// use stencil_util::location::SourceFile;
///
/// let file = SourceFile::new("index.html", "<h1>{{ title }}</h1>");
/// assert_eq!(file.name(), "index.html");
/// assert_eq!(file.line_count(), 1);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Byte offset at which each row starts
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `name` - File name or path
    /// * `content` - File content
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute row start offsets; rows split on `\n` bytes only
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of rows
    ///
    /// # Examples
    ///
    /// ```
    /// use stencil_util::location::SourceFile;
    ///
    /// let file = SourceFile::new("t", "a\nb\nc");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where `row` starts, if the row exists
    #[inline]
    pub fn line_start(&self, row: u32) -> Option<usize> {
        self.line_starts.get(row as usize).copied()
    }

    /// Text of `row` without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use stencil_util::location::SourceFile;
    ///
    /// let file = SourceFile::new("t", "one\r\ntwo\n");
    /// assert_eq!(file.line(0), Some("one"));
    /// assert_eq!(file.line(1), Some("two"));
    /// assert_eq!(file.line(2), Some(""));
    /// assert_eq!(file.line(3), None);
    /// ```
    pub fn line(&self, row: u32) -> Option<&str> {
        let start = self.line_start(row)?;
        let end = self
            .line_start(row + 1)
            .unwrap_or(self.content.len());
        let text = self.content.get(start..end)?;
        Some(text.trim_end_matches(['\n', '\r']))
    }

    /// Convert a location into a byte offset
    ///
    /// The column may point one past the last unit of a row, which is
    /// where end-of-input errors are reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use stencil_util::location::{Location, SourceFile};
    ///
    /// let file = SourceFile::new("t", "ab\ncd");
    /// assert_eq!(file.offset_of(Location::new(1, 1)).unwrap(), 4);
    /// assert!(file.offset_of(Location::new(5, 0)).is_err());
    /// ```
    pub fn offset_of(&self, location: Location) -> LocationResult<usize> {
        let start = self
            .line_start(location.row)
            .ok_or(LocationError::RowOutOfBounds {
                row: location.row,
                rows: self.line_count(),
            })?;
        let end = self
            .line_start(location.row + 1)
            .map_or(self.content.len(), |next| next - 1);
        let width = end - start;
        if location.column as usize > width {
            return Err(LocationError::ColumnOutOfBounds {
                row: location.row,
                column: location.column,
                width,
            });
        }
        Ok(start + location.column as usize)
    }

    /// Convert a byte offset into a location
    ///
    /// # Examples
    ///
    /// ```
    /// use stencil_util::location::{Location, SourceFile};
    ///
    /// let file = SourceFile::new("t", "ab\ncd");
    /// assert_eq!(file.location_of(4).unwrap(), Location::new(1, 1));
    /// ```
    pub fn location_of(&self, offset: usize) -> LocationResult<Location> {
        if offset > self.content.len() {
            return Err(LocationError::OffsetOutOfBounds {
                offset,
                file_len: self.content.len(),
            });
        }
        let row = match self.line_starts.binary_search(&offset) {
            Ok(row) => row,
            Err(insert_point) => insert_point - 1,
        };
        let column = offset - self.line_starts[row];
        Ok(Location::new(row as u32, column as u32))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("len", &self.content.len())
            .field("lines", &self.line_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_has_one_row() {
        let file = SourceFile::new("empty", "");
        assert_eq!(file.line_count(), 1);
        assert_eq!(file.line(0), Some(""));
        assert_eq!(file.offset_of(Location::START).unwrap(), 0);
    }

    #[test]
    fn test_line_starts() {
        let file = SourceFile::new("t", "ab\n\ncd\n");
        assert_eq!(file.line_start(0), Some(0));
        assert_eq!(file.line_start(1), Some(3));
        assert_eq!(file.line_start(2), Some(4));
        assert_eq!(file.line_start(3), Some(7));
        assert_eq!(file.line_start(4), None);
    }

    #[test]
    fn test_offset_round_trip() {
        let file = SourceFile::new("t", "{{ a }}\n  {% if %}\nend");
        for offset in 0..=file.content().len() {
            let loc = file.location_of(offset).unwrap();
            assert_eq!(file.offset_of(loc).unwrap(), offset);
        }
    }

    #[test]
    fn test_column_past_row_end() {
        let file = SourceFile::new("t", "ab\ncd");
        // One past the end is allowed, two is not
        assert_eq!(file.offset_of(Location::new(0, 2)).unwrap(), 2);
        assert_eq!(
            file.offset_of(Location::new(0, 3)),
            Err(LocationError::ColumnOutOfBounds {
                row: 0,
                column: 3,
                width: 2
            })
        );
    }

    #[test]
    fn test_location_of_out_of_bounds() {
        let file = SourceFile::new("t", "abc");
        assert!(file.location_of(3).is_ok());
        assert_eq!(
            file.location_of(4),
            Err(LocationError::OffsetOutOfBounds {
                offset: 4,
                file_len: 3
            })
        );
    }

    #[test]
    fn test_debug_format() {
        let file = SourceFile::new("page.html", "a\nb");
        let debug = format!("{:?}", file);
        assert!(debug.contains("page.html"));
        assert!(debug.contains("lines: 2"));
    }
}
