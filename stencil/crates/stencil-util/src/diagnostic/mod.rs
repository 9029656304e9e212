//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! diagnostics about template documents.
//!
//! # Examples
//!
//! ```
//! use stencil_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use stencil_util::Location;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated comment block")
//!     .code(DiagnosticCode::E_UNTERMINATED_BLOCK)
//!     .location(Location::new(3, 0))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use level::Level;

use crate::location::Location;
use std::cell::RefCell;
use std::fmt::Write as _;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Primary location, if the diagnostic points into a document
    pub location: Option<Location>,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic without location
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            location: None,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the location
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Add a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help message
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Render the diagnostic for a terminal.
    ///
    /// `origin` is the file name shown in the `-->` line; `color` enables
    /// ANSI styling of the header.
    ///
    /// ```text
    /// error[E0102]: unterminated string literal
    ///   --> page.html:1:10
    ///   1 | {{ "oops }}
    ///     |          ^
    /// ```
    pub fn render(&self, origin: Option<&str>, color: bool) -> String {
        let mut header = self.level.name().to_string();
        if let Some(code) = self.code {
            header.push_str(&format!("[{}]", code));
        }
        if color {
            header = self.level.paint(&header);
        }

        let mut out = format!("{}: {}", header, self.message);

        if let Some(location) = self.location {
            let _ = write!(
                out,
                "\n  --> {}:{}:{}",
                origin.unwrap_or("<input>"),
                location.line_number(),
                location.column_number()
            );
        }
        for snippet in &self.snippets {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        for note in &self.notes {
            let _ = write!(out, "\n  = note: {}", note);
        }
        for help in &self.helps {
            let _ = write!(out, "\n  = help: {}", help);
        }
        out
    }
}

/// Collects diagnostics emitted while processing one or more documents
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create an empty handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Record a diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Start an error builder at `location`
    pub fn build_error(&self, location: Location, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).location(location)
    }

    /// Returns true if any error was recorded
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level.is_error())
    }

    /// Number of recorded errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Number of recorded warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_warning())
            .count()
    }

    /// Snapshot of all recorded diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Drop everything recorded so far
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(Level::Error, "test");
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "test");
        assert!(diag.location.is_none());
    }

    #[test]
    fn test_diagnostic_chain() {
        let diag = Diagnostic::warning("w")
            .with_code(DiagnosticCode::new("W", 3))
            .with_location(Location::new(1, 1))
            .with_note("n")
            .with_help("h");
        assert_eq!(diag.code, Some(DiagnosticCode::new("W", 3)));
        assert_eq!(diag.location, Some(Location::new(1, 1)));
        assert_eq!(diag.notes, vec!["n"]);
        assert_eq!(diag.helps, vec!["h"]);
    }

    #[test]
    fn test_render_plain() {
        let diag = Diagnostic::error("unterminated string literal")
            .with_code(DiagnosticCode::E_UNTERMINATED_STRING)
            .with_location(Location::new(0, 9))
            .with_snippet(SourceSnippet::point("{{ \"oops }}", 1, 9))
            .with_help("close the string with `\"`");

        let rendered = diag.render(Some("page.html"), false);
        assert_eq!(
            rendered,
            "error[E0102]: unterminated string literal\n  --> page.html:1:10\n  1 | {{ \"oops }}\n    |          ^\n  = help: close the string with `\"`"
        );
    }

    #[test]
    fn test_render_without_location() {
        let diag = Diagnostic::error("could not read file");
        assert_eq!(diag.render(None, false), "error: could not read file");
    }

    #[test]
    fn test_render_default_origin() {
        let diag = Diagnostic::error("x").with_location(Location::START);
        assert!(diag.render(None, false).contains("--> <input>:1:1"));
    }

    #[test]
    fn test_render_colored_header() {
        let diag = Diagnostic::error("x");
        assert!(diag.render(None, true).starts_with("\x1b[1;31merror\x1b[0m: x"));
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        assert!(!handler.has_errors());

        handler.emit_diagnostic(Diagnostic::error("e1"));
        handler.emit_diagnostic(Diagnostic::warning("w1"));
        handler
            .build_error(Location::new(0, 1), "e2")
            .emit(&handler);

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.diagnostics().len(), 3);
    }

    #[test]
    fn test_handler_clear() {
        let handler = Handler::default();
        handler.emit_diagnostic(Diagnostic::error("test"));
        handler.clear();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }
}
