//! Token stream consumed by the parser.
//!
//! [`Tokenizer`] owns the tokens of the last document it read together with
//! a forward-only read cursor.

use static_assertions::assert_impl_all;
use tracing::{debug, trace};

use crate::error::{LexError, LexResult};
use crate::lexer::Lexer;
use crate::token::Token;

/// Reusable tokenizer with an eager token buffer.
///
/// # Example
///
/// ```
/// use stencil_lex::{Tokenizer, TokenKind};
///
/// let mut tokenizer = Tokenizer::new();
/// tokenizer.read("{% if %}{% endif %}").unwrap();
///
/// assert_eq!(tokenizer.len(), 6);
/// let first = tokenizer.next_token().unwrap();
/// assert_eq!(first.kind, TokenKind::CommandBegin);
/// assert_eq!(tokenizer.pos(), 1);
/// assert!(!tokenizer.at_end());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Tokenizer {
    tokens: Vec<Token>,
    pos: usize,
}

assert_impl_all!(Tokenizer: Send, Sync);
assert_impl_all!(Token: Send, Sync);
assert_impl_all!(LexError: Send, Sync, std::error::Error);

impl Tokenizer {
    /// Creates an empty tokenizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes `document`, replacing any previous tokens and rewinding the
    /// read cursor.
    ///
    /// On error the buffer is left empty.
    pub fn read(&mut self, document: &str) -> LexResult<()> {
        self.tokens.clear();
        self.pos = 0;

        trace!(bytes = document.len(), "tokenizing document");
        match Lexer::new(document).tokenize() {
            Ok(tokens) => {
                debug!(tokens = tokens.len(), bytes = document.len(), "tokenized document");
                self.tokens = tokens;
                Ok(())
            },
            Err(error) => {
                debug!(%error, "tokenizing failed");
                Err(error)
            },
        }
    }

    /// Returns the token at the read cursor and advances past it.
    ///
    /// Returns `None` once every token has been read.
    pub fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos)?.clone();
        self.pos += 1;
        Some(token)
    }

    /// Returns the token at the read cursor without consuming it.
    pub fn peek_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Number of tokens read so far.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns true once every token has been read.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// All tokens of the last document, regardless of the read cursor.
    pub fn all_tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Total number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the last document produced no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Moves the read cursor back to the first token.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Consumes the tokenizer and returns its tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.tokens.len().saturating_sub(self.pos);
        (left, Some(left))
    }
}

/// Tokenizes `document` in one shot.
///
/// # Example
///
/// ```
/// use stencil_lex::{tokenize, TokenKind, Value};
///
/// let tokens = tokenize("{{ 12.e2 }}").unwrap();
/// assert_eq!(tokens[1].kind, TokenKind::Number);
/// assert_eq!(tokens[1].value, Value::Double(1200.0));
/// ```
pub fn tokenize(document: &str) -> LexResult<Vec<Token>> {
    Lexer::new(document).tokenize()
}
