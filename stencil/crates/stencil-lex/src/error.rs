//! Lexical errors.
//!
//! Tokenizing stops at the first error. Every variant carries the
//! [`Location`] at which scanning failed and converts into a
//! [`Diagnostic`] with a stable code.

use std::fmt;

use stencil_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Location, SourceFile, SourceSnippet};
use thiserror::Error;

/// The kind of embedded region left open at end of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `{{ ... }}`
    Expansion,
    /// `{% ... %}`
    Command,
    /// `{# ... #}`
    Comment,
}

impl BlockKind {
    /// The two-unit opener of this region.
    pub const fn opener(self) -> &'static str {
        match self {
            BlockKind::Expansion => "{{",
            BlockKind::Command => "{%",
            BlockKind::Comment => "{#",
        }
    }

    /// The two-unit closer of this region.
    pub const fn closer(self) -> &'static str {
        match self {
            BlockKind::Expansion => "}}",
            BlockKind::Command => "%}",
            BlockKind::Comment => "#}",
        }
    }

    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            BlockKind::Expansion => "expansion",
            BlockKind::Command => "command",
            BlockKind::Comment => "comment",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a numeric literal was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// `e`/`E` (and an optional sign) with no digits after it
    MissingExponentDigits,
    /// Integer does not fit in a signed 64-bit value
    Overflow,
    /// Double overflowed to infinity
    NotFinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NumericError::MissingExponentDigits => "exponent has no digits",
            NumericError::Overflow => "integer does not fit in 64 bits",
            NumericError::NotFinite => "value is not finite",
        })
    }
}

/// Error produced while tokenizing a document.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// End of input inside an expansion, command or comment
    #[error("unterminated {block} block at {location}: expected `{}`", .block.closer())]
    UnterminatedBlock {
        /// Where scanning stopped (end of input)
        location: Location,
        /// Region that was left open
        block: BlockKind,
    },

    /// String literal without its closing quote
    #[error("unterminated string literal at {location}")]
    UnterminatedString {
        /// Where scanning stopped
        location: Location,
        /// The opening quote
        quote: char,
    },

    /// A character no lexeme starts with
    #[error("unrecognized character {character:?} at {location}")]
    UnrecognizedCharacter {
        /// Location of the character
        location: Location,
        /// The offending character
        character: char,
    },

    /// Malformed number
    #[error("invalid numeric literal `{literal}` at {location}: {reason}")]
    InvalidNumericLiteral {
        /// Where scanning stopped
        location: Location,
        /// The text consumed so far
        literal: String,
        /// What was wrong with it
        reason: NumericError,
    },
}

/// Result type for lexing operations.
pub type LexResult<T> = std::result::Result<T, LexError>;

impl LexError {
    /// Location at which scanning failed.
    pub fn location(&self) -> Location {
        match self {
            LexError::UnterminatedBlock { location, .. }
            | LexError::UnterminatedString { location, .. }
            | LexError::UnrecognizedCharacter { location, .. }
            | LexError::InvalidNumericLiteral { location, .. } => *location,
        }
    }

    /// Stable diagnostic code of this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnterminatedBlock { .. } => DiagnosticCode::E_UNTERMINATED_BLOCK,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_UNTERMINATED_STRING,
            LexError::UnrecognizedCharacter { .. } => DiagnosticCode::E_UNRECOGNIZED_CHARACTER,
            LexError::InvalidNumericLiteral { .. } => DiagnosticCode::E_INVALID_NUMERIC_LITERAL,
        }
    }

    /// Headline message, without the location.
    pub fn message(&self) -> String {
        match self {
            LexError::UnterminatedBlock { block, .. } => {
                format!("unterminated {} block", block)
            },
            LexError::UnterminatedString { .. } => "unterminated string literal".to_string(),
            LexError::UnrecognizedCharacter { character, .. } => {
                format!("unrecognized character {:?}", character)
            },
            LexError::InvalidNumericLiteral { literal, reason, .. } => {
                format!("invalid numeric literal `{}`: {}", literal, reason)
            },
        }
    }

    fn help(&self) -> Option<String> {
        match self {
            LexError::UnterminatedBlock { block, .. } => {
                Some(format!("close the {} with `{}`", block, block.closer()))
            },
            LexError::UnterminatedString { quote, .. } => {
                Some(format!("close the string with `{}`", quote))
            },
            LexError::UnrecognizedCharacter { character: '!', .. } => {
                Some("`!` is only valid as part of `!=`; use `not` for negation".to_string())
            },
            LexError::UnrecognizedCharacter { .. } => None,
            LexError::InvalidNumericLiteral { reason, .. } => match reason {
                NumericError::MissingExponentDigits => {
                    Some("add digits after the exponent marker".to_string())
                },
                NumericError::Overflow | NumericError::NotFinite => None,
            },
        }
    }

    /// Converts the error into a [`Diagnostic`] without a source snippet.
    pub fn to_diagnostic(&self) -> Diagnostic {
        self.builder().build()
    }

    /// Converts the error into a [`Diagnostic`] quoting the offending line of
    /// `file` with a caret under the failing column.
    pub fn to_diagnostic_with_source(&self, file: &SourceFile) -> Diagnostic {
        let builder = self.builder();
        match SourceSnippet::from_source(file, self.location()) {
            Some(snippet) => builder.snippet(snippet).build(),
            None => builder.build(),
        }
    }

    fn builder(&self) -> DiagnosticBuilder {
        let builder = DiagnosticBuilder::error(self.message())
            .code(self.code())
            .location(self.location());
        match self.help() {
            Some(help) => builder.help(help),
            None => builder,
        }
    }
}
