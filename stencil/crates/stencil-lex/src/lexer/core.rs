//! Core lexer implementation.
//!
//! This module contains the [`Lexer`] struct, the region state machine and
//! the dispatch for code regions.

use stencil_util::Location;

use crate::chars::{is_ident_start, is_quote, is_whitespace};
use crate::cursor::{Cursor, Mark};
use crate::error::{BlockKind, LexError, LexResult};
use crate::token::{Token, TokenKind};

/// What the lexer is currently scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Literal text outside any region
    Text,
    /// Inside `{{ }}`, `{% %}` or `{# #}`
    Block(BlockKind),
}

/// Tokenizer state machine for one document.
///
/// A lexer is single-use: [`tokenize`](Lexer::tokenize) consumes it and
/// returns the whole token sequence or the first error.
///
/// # Example
///
/// ```
/// use stencil_lex::{Lexer, TokenKind};
///
/// let tokens = Lexer::new("Hi {{ name }}!").tokenize().unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Text,
///         TokenKind::ExpansionBegin,
///         TokenKind::Symbol,
///         TokenKind::ExpansionEnd,
///         TokenKind::Text,
///     ]
/// );
/// ```
pub struct Lexer<'a> {
    /// Byte cursor over the document.
    pub(crate) cursor: Cursor<'a>,

    /// Current region.
    mode: Mode,

    /// Tokens produced so far.
    tokens: Vec<Token>,

    /// Start of the lexeme being scanned.
    pub(crate) token_start: Mark,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `source`, in text mode.
    pub fn new(source: &'a str) -> Self {
        let cursor = Cursor::new(source);
        let token_start = cursor.mark();
        Self {
            cursor,
            mode: Mode::Text,
            tokens: Vec::with_capacity(source.len() / 4),
            token_start,
        }
    }

    /// Scans the whole document.
    ///
    /// End of input in text mode is success. End of input inside a region
    /// is an [`UnterminatedBlock`](LexError::UnterminatedBlock) error.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        while self.step()? {}
        Ok(self.tokens)
    }

    /// Advances the state machine by one lexeme or one text run.
    ///
    /// Returns `false` once the document is exhausted in text mode.
    fn step(&mut self) -> LexResult<bool> {
        match self.mode {
            Mode::Text => Ok(self.lex_text()),
            Mode::Block(BlockKind::Comment) => {
                self.skip_comment()?;
                Ok(true)
            },
            Mode::Block(block) => {
                self.lex_code(block)?;
                Ok(true)
            },
        }
    }

    /// Scans one lexeme inside an expansion or command.
    fn lex_code(&mut self, block: BlockKind) -> LexResult<()> {
        self.cursor.eat_while(is_whitespace);
        self.start_token();

        let Some(byte) = self.cursor.current() else {
            return Err(LexError::UnterminatedBlock {
                location: self.cursor.location(),
                block,
            });
        };

        if self.cursor.starts_with(block.closer().as_bytes()) {
            self.close_region(block);
            return Ok(());
        }

        let token = match byte {
            b if is_quote(b) => self.lex_string(block)?,
            b'0'..=b'9' => self.lex_number()?,
            b if is_ident_start(b) => self.lex_identifier(),
            _ => self.lex_operator()?,
        };
        self.tokens.push(token);
        Ok(())
    }

    /// Consumes a two-unit opener and enters `block`.
    ///
    /// Comments produce no token.
    pub(crate) fn open_region(&mut self, block: BlockKind) {
        self.start_token();
        self.cursor.advance_n(2);
        let kind = match block {
            BlockKind::Expansion => Some(TokenKind::ExpansionBegin),
            BlockKind::Command => Some(TokenKind::CommandBegin),
            BlockKind::Comment => None,
        };
        if let Some(kind) = kind {
            self.push_bare(kind);
        }
        self.mode = Mode::Block(block);
    }

    /// Consumes a two-unit closer and returns to text mode.
    pub(crate) fn close_region(&mut self, block: BlockKind) {
        self.start_token();
        self.cursor.advance_n(2);
        let kind = match block {
            BlockKind::Expansion => Some(TokenKind::ExpansionEnd),
            BlockKind::Command => Some(TokenKind::CommandEnd),
            BlockKind::Comment => None,
        };
        if let Some(kind) = kind {
            self.push_bare(kind);
        }
        self.mode = Mode::Text;
    }

    /// Marks the cursor position as the start of the next token.
    #[inline]
    pub(crate) fn start_token(&mut self) {
        self.token_start = self.cursor.mark();
    }

    /// Appends a finished token.
    #[inline]
    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn push_bare(&mut self, kind: TokenKind) {
        self.tokens.push(Token::bare(kind, self.token_start.location));
    }

    /// Error for the character at the cursor, which is not consumed.
    pub(crate) fn unrecognized(&self) -> LexError {
        LexError::UnrecognizedCharacter {
            location: self.cursor.location(),
            character: self.cursor.current_char().unwrap_or(char::REPLACEMENT_CHARACTER),
        }
    }

    /// Current region.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Row and column of the next unit to be scanned.
    pub fn location(&self) -> Location {
        self.cursor.location()
    }

    /// Byte offset of the next unit to be scanned.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NumericError;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_new_lexer_starts_in_text_mode() {
        let lexer = Lexer::new("{{ x }}");
        assert_eq!(lexer.mode(), Mode::Text);
        assert_eq!(lexer.location(), Location::START);
        assert_eq!(lexer.position(), 0);
    }

    #[test]
    fn test_empty_document() {
        assert!(Lexer::new("").tokenize().unwrap().is_empty());
    }

    #[test]
    fn test_expansion_region() {
        assert_eq!(
            kinds("{{ a }}"),
            [
                TokenKind::ExpansionBegin,
                TokenKind::Symbol,
                TokenKind::ExpansionEnd
            ]
        );
    }

    #[test]
    fn test_command_region() {
        assert_eq!(
            kinds("{% set a = 1 %}"),
            [
                TokenKind::CommandBegin,
                TokenKind::Set,
                TokenKind::Symbol,
                TokenKind::Assign,
                TokenKind::Integer,
                TokenKind::CommandEnd
            ]
        );
    }

    #[test]
    fn test_empty_regions() {
        assert_eq!(
            kinds("{{}}{%%}"),
            [
                TokenKind::ExpansionBegin,
                TokenKind::ExpansionEnd,
                TokenKind::CommandBegin,
                TokenKind::CommandEnd
            ]
        );
    }

    #[test]
    fn test_whitespace_between_lexemes() {
        let tokens = Lexer::new("{{\t\r\n a \x0b\x0c}}").tokenize().unwrap();
        assert_eq!(tokens[1].location, Location::new(1, 1));
        assert_eq!(tokens[2].location, Location::new(1, 5));
    }

    #[test]
    fn test_command_closer_inside_expansion() {
        let err = Lexer::new("{{ a %}").tokenize().unwrap_err();
        assert_eq!(
            err,
            LexError::UnrecognizedCharacter {
                location: Location::new(0, 5),
                character: '%',
            }
        );
    }

    #[test]
    fn test_expansion_closer_inside_command() {
        let err = Lexer::new("{% a }}").tokenize().unwrap_err();
        assert_eq!(
            err,
            LexError::UnrecognizedCharacter {
                location: Location::new(0, 5),
                character: '}',
            }
        );
    }

    #[test]
    fn test_unterminated_regions() {
        assert_eq!(
            Lexer::new("{{ a").tokenize().unwrap_err(),
            LexError::UnterminatedBlock {
                location: Location::new(0, 4),
                block: BlockKind::Expansion,
            }
        );
        assert_eq!(
            Lexer::new("x\n{%").tokenize().unwrap_err(),
            LexError::UnterminatedBlock {
                location: Location::new(1, 2),
                block: BlockKind::Command,
            }
        );
    }

    #[test]
    fn test_dispatch_to_every_scanner() {
        let tokens = Lexer::new("{{ 'a' 1 x == }}").tokenize().unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::ExpansionBegin,
                TokenKind::String,
                TokenKind::Integer,
                TokenKind::Symbol,
                TokenKind::Equals,
                TokenKind::ExpansionEnd
            ]
        );
    }

    #[test]
    fn test_numeric_error_propagates() {
        let err = Lexer::new("{{ 1e }}").tokenize().unwrap_err();
        assert!(matches!(
            err,
            LexError::InvalidNumericLiteral {
                reason: NumericError::MissingExponentDigits,
                ..
            }
        ));
    }

    #[test]
    fn test_non_ascii_in_code_is_unrecognized() {
        let err = Lexer::new("{{ é }}").tokenize().unwrap_err();
        assert_eq!(
            err,
            LexError::UnrecognizedCharacter {
                location: Location::new(0, 3),
                character: 'é',
            }
        );
    }
}
