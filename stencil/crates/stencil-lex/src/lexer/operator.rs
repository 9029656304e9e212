//! Operator and punctuation lexing.
//!
//! Two-unit operators win over their one-unit prefixes.

use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator or punctuation mark at the cursor.
    ///
    /// Anything else is an unrecognized character, reported at its own
    /// location and left unconsumed.
    pub fn lex_operator(&mut self) -> LexResult<Token> {
        let kind = match self.cursor.current() {
            Some(b'=') => self.lex_equals(),
            Some(b'!') => self.lex_bang()?,
            Some(b'<') => self.lex_less(),
            Some(b'>') => self.lex_greater(),
            Some(b'.') => self.lex_period(),
            Some(b'[') => self.single(TokenKind::ArrayBegin),
            Some(b']') => self.single(TokenKind::ArrayEnd),
            Some(b'(') => self.single(TokenKind::ParenOpen),
            Some(b')') => self.single(TokenKind::ParenClose),
            Some(b',') => self.single(TokenKind::Comma),
            Some(b':') => self.single(TokenKind::Colon),
            Some(b'|') => self.single(TokenKind::Pipe),
            _ => return Err(self.unrecognized()),
        };
        Ok(Token::bare(kind, self.token_start.location))
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// Handles: `=`, `==`
    fn lex_equals(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_byte(b'=') {
            TokenKind::Equals
        } else {
            TokenKind::Assign
        }
    }

    /// Handles: `!=`
    ///
    /// A lone `!` is not an operator.
    fn lex_bang(&mut self) -> LexResult<TokenKind> {
        if self.cursor.peek(1) == Some(b'=') {
            self.cursor.advance_n(2);
            Ok(TokenKind::NotEquals)
        } else {
            Err(self.unrecognized())
        }
    }

    /// Handles: `<`, `<=`
    fn lex_less(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_byte(b'=') {
            TokenKind::LessEqual
        } else {
            TokenKind::Less
        }
    }

    /// Handles: `>`, `>=`
    fn lex_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_byte(b'=') {
            TokenKind::GreaterEqual
        } else {
            TokenKind::Greater
        }
    }

    /// Handles: `.`, `..`
    fn lex_period(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_byte(b'.') {
            TokenKind::PeriodPeriod
        } else {
            TokenKind::Period
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::{Lexer, TokenKind};
    use stencil_util::Location;

    fn lex_op(source: &str) -> (TokenKind, usize) {
        let mut lexer = Lexer::new(source);
        lexer.start_token();
        let token = lexer.lex_operator().unwrap();
        (token.kind, lexer.position())
    }

    #[test]
    fn test_single_unit_operators() {
        let cases = [
            ("=", TokenKind::Assign),
            ("<", TokenKind::Less),
            (">", TokenKind::Greater),
            (".", TokenKind::Period),
            ("[", TokenKind::ArrayBegin),
            ("]", TokenKind::ArrayEnd),
            ("(", TokenKind::ParenOpen),
            (")", TokenKind::ParenClose),
            (",", TokenKind::Comma),
            (":", TokenKind::Colon),
            ("|", TokenKind::Pipe),
        ];
        for (source, expected) in cases {
            assert_eq!(lex_op(source), (expected, 1), "{}", source);
        }
    }

    #[test]
    fn test_two_unit_operators() {
        let cases = [
            ("==", TokenKind::Equals),
            ("!=", TokenKind::NotEquals),
            ("<=", TokenKind::LessEqual),
            (">=", TokenKind::GreaterEqual),
            ("..", TokenKind::PeriodPeriod),
        ];
        for (source, expected) in cases {
            assert_eq!(lex_op(source), (expected, 2), "{}", source);
        }
    }

    #[test]
    fn test_maximal_munch_stops_after_two() {
        assert_eq!(lex_op("===").0, TokenKind::Equals);
        assert_eq!(lex_op("...").0, TokenKind::PeriodPeriod);
        assert_eq!(lex_op("<>").0, TokenKind::Less);
        assert_eq!(lex_op("=<").0, TokenKind::Assign);
    }

    #[test]
    fn test_lone_bang() {
        let mut lexer = Lexer::new("! x");
        lexer.start_token();
        assert_eq!(
            lexer.lex_operator(),
            Err(LexError::UnrecognizedCharacter {
                location: Location::START,
                character: '!',
            })
        );
        assert_eq!(lexer.position(), 0);
    }

    #[test]
    fn test_unrecognized() {
        for c in ['+', '-', '*', '/', '%', '~', '&', '}', '#', '@', '?'] {
            let source = c.to_string();
            let mut lexer = Lexer::new(&source);
            lexer.start_token();
            match lexer.lex_operator() {
                Err(LexError::UnrecognizedCharacter { character, .. }) => {
                    assert_eq!(character, c)
                },
                other => panic!("{:?} gave {:?}", c, other),
            }
        }
    }
}
