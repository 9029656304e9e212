//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Lexer struct, region state machine and code dispatch
//! - `text` - Literal text runs and region openers
//! - `comment` - Comment skipping
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `string` - String literal lexing
//! - `operator` - Operator and punctuation lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;
mod text;

pub use self::core::{Lexer, Mode};
