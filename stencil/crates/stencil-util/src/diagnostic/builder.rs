//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for the quoted
//! source line shown under a diagnostic.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::location::{Location, SourceFile};

/// A source line with a caret marker under the offending columns
///
/// # Examples
///
/// ```
/// use stencil_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("{{ 12e }}", 1, 3, 6).with_label("here");
/// assert_eq!(snippet.format(), "  1 | {{ 12e }}\n    |    ^^^ here");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line text
    pub line: String,
    /// Line number (1-based, as displayed)
    pub line_number: usize,
    /// First underlined column (0-based byte column)
    pub start_column: usize,
    /// Column after the last underlined one
    pub end_column: usize,
    /// Optional label printed after the carets
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a snippet underlining `start_column..end_column`
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: None,
        }
    }

    /// Create a snippet pointing at a single column
    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self::new(line, line_number, column, column + 1)
    }

    /// Build a point snippet for `location` from the file's text
    ///
    /// Returns `None` if the row does not exist in the file.
    pub fn from_source(file: &SourceFile, location: Location) -> Option<Self> {
        let line = file.line(location.row)?;
        Some(Self::point(
            line,
            location.line_number(),
            location.column as usize,
        ))
    }

    /// Attach a label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Render the snippet as two lines: source and caret marker
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));

        // Keep tabs so the caret lines up with the rendered source
        for (offset, c) in self.line.char_indices() {
            if offset >= self.start_column {
                break;
            }
            result.push(if c == '\t' { '\t' } else { ' ' });
        }
        // Columns past the end of the line (end-of-input errors)
        let past_end = self.start_column.saturating_sub(self.line.len());
        result.extend(std::iter::repeat(' ').take(past_end));

        let carets = self.end_column.saturating_sub(self.start_column).max(1);
        result.extend(std::iter::repeat('^').take(carets));

        if let Some(ref label) = self.label {
            result.push(' ');
            result.push_str(label);
        }

        result
    }
}

/// Fluent builder for [`Diagnostic`]
///
/// # Examples
///
/// ```
/// use stencil_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use stencil_util::Location;
///
/// let diag = DiagnosticBuilder::error("unrecognized character '!'")
///     .code(DiagnosticCode::E_UNRECOGNIZED_CHARACTER)
///     .location(Location::new(0, 3))
///     .help("`!` is only valid as part of `!=`")
///     .build();
///
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.helps.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    location: Option<Location>,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Start a diagnostic with the given level
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

    /// Start an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the primary location
    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help message
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            location: self.location,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and hand the diagnostic to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
