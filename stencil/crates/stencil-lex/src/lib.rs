//! stencil-lex - Tokenizer for Stencil templates
//!
//! This crate turns a template document into a positioned token stream for
//! the template parser. Documents mix literal text with three kinds of
//! embedded regions:
//!
//! - **Expansions** `{{ ... }}` produce a value
//! - **Commands** `{% ... %}` drive control flow (`if`, `for`, `block`, ...)
//! - **Comments** `{# ... #}` are dropped entirely
//!
//! # Example Usage
//!
//! ```
//! use stencil_lex::{Tokenizer, TokenKind, Value};
//! use stencil_util::Location;
//!
//! let mut tokenizer = Tokenizer::new();
//! tokenizer.read("Hello {{ name }}!").unwrap();
//!
//! let text = tokenizer.next_token().unwrap();
//! assert_eq!(text.kind, TokenKind::Text);
//! assert_eq!(text.value, Value::Text("Hello ".into()));
//!
//! let begin = tokenizer.next_token().unwrap();
//! assert_eq!(begin.kind, TokenKind::ExpansionBegin);
//! assert_eq!(begin.location, Location::new(0, 6));
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - Byte cursor with row/column tracking
//! - [`chars`] - Byte classes for identifiers and whitespace
//! - [`token`] - Token kinds, tokens and the keyword table
//! - [`value`] - Values carried by tokens
//! - [`error`] - Lexical errors
//! - [`lexer`] - The region state machine and lexeme scanners
//! - [`stream`] - The reusable [`Tokenizer`]
//!
//! # Lexemes inside regions
//!
//! ## Keywords
//!
//! `set`, `extends`, `include`, `block`, `endblock`, `for`, `endfor`, `if`,
//! `endif`, `else`, `autoescape`, `endautoescape`, `spaceless`,
//! `endspaceless`, `in`, `not`, `true`, `false`
//!
//! ## Literals
//!
//! - **Integer**: `42`
//! - **Number**: `12.`, `12.34`, `12e2`, `1.5E-3`
//! - **String**: `"double"`, `'single'`, with `\` escaping the next unit
//!
//! ## Operators
//!
//! `==` `!=` `<=` `>=` `..` `.` `=` `<` `>` `[` `]` `(` `)` `,` `:` `|`
//!
//! Positions are zero-based rows and columns counted in bytes.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod stream;
pub mod token;
pub mod value;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{BlockKind, LexError, LexResult, NumericError};
pub use lexer::{Lexer, Mode};
pub use stream::{tokenize, Tokenizer};
pub use token::{keyword_from_ident, Token, TokenKind};
pub use value::Value;
