//! Diagnostic codes for categorizing template errors.
//!
//! # Examples
//!
//! ```
//! use stencil_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 102);
//! assert_eq!(code.as_str(), "E0102");
//! ```

/// A unique code identifying a diagnostic message
///
/// Codes render as `{prefix}{number:04}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for errors, "W" for warnings)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Render the code, e.g. `E0101`
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // TOOLING ERRORS (E0001-E0099)
    // =========================================================================

    /// A template file could not be read
    pub const E_UNREADABLE_FILE: Self = Self::new("E", 1);
    /// A template file exceeds the configured size limit
    pub const E_FILE_TOO_LARGE: Self = Self::new("E", 2);

    // =========================================================================
    // LEXICAL ERRORS (E0101-E0199)
    // =========================================================================

    /// `{{`, `{%` or `{#` still open at end of input
    pub const E_UNTERMINATED_BLOCK: Self = Self::new("E", 101);
    /// String literal without its closing quote
    pub const E_UNTERMINATED_STRING: Self = Self::new("E", 102);
    /// Character no lexeme starts with
    pub const E_UNRECOGNIZED_CHARACTER: Self = Self::new("E", 103);
    /// Malformed number
    pub const E_INVALID_NUMERIC_LITERAL: Self = Self::new("E", 104);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
