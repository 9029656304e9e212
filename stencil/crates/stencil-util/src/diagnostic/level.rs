//! Diagnostic severity levels.
//!
//! # Examples
//!
//! ```
//! use stencil_util::diagnostic::Level;
//!
//! assert!(Level::Error.is_error());
//! assert!(!Level::Warning.is_error());
//! assert_eq!(Level::Note.to_string(), "note");
//! ```

use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A problem that makes the template unusable
    Error,
    /// A suspicious construct that still tokenizes
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Returns true for [`Level::Error`]
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns true for [`Level::Warning`]
    #[inline]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Level::Warning)
    }

    /// Lowercase name used in rendered output
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        }
    }

    /// ANSI SGR color code for terminal output
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "31",   // Red
            Level::Warning => "33", // Yellow
            Level::Note => "36",    // Cyan
            Level::Help => "32",    // Green
        }
    }

    /// Wrap `text` in this level's ANSI color (bold)
    pub fn paint(&self, text: &str) -> String {
        format!("\x1b[1;{}m{}\x1b[0m", self.color_code(), text)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
        assert_eq!(format!("{}", Level::Note), "note");
        assert_eq!(format!("{}", Level::Help), "help");
    }

    #[test]
    fn test_level_predicates() {
        assert!(Level::Error.is_error());
        assert!(!Level::Error.is_warning());
        assert!(Level::Warning.is_warning());
        assert!(!Level::Help.is_error());
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Error < Level::Warning);
        assert!(Level::Warning < Level::Note);
    }

    #[test]
    fn test_paint() {
        assert_eq!(Level::Error.paint("error"), "\x1b[1;31merror\x1b[0m");
    }
}
