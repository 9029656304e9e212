//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with an ASCII letter or underscore, followed by
    /// ASCII letters, digits or underscores. Keywords carry their own text
    /// except `true` and `false`, which carry a boolean.
    pub fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start.position);
        let location = self.token_start.location;

        match keyword_from_ident(text) {
            Some(TokenKind::True) => Token::new(TokenKind::True, location, true),
            Some(TokenKind::False) => Token::new(TokenKind::False, location, false),
            Some(kind) => Token::new(kind, location, text),
            None => Token::new(TokenKind::Symbol, location, text),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::value::Value;
    use crate::{Lexer, Token, TokenKind};
    use stencil_util::Location;

    fn lex_ident(source: &str) -> Token {
        let mut lexer = Lexer::new(source);
        lexer.start_token();
        lexer.lex_identifier()
    }

    #[test]
    fn test_simple_identifier() {
        let token = lex_ident("yadda");
        assert_eq!(token, Token::new(TokenKind::Symbol, Location::START, "yadda"));
    }

    #[test]
    fn test_identifier_with_digits_and_underscore() {
        assert_eq!(lex_ident("_foo_bar_123").value.as_text(), Some("_foo_bar_123"));
    }

    #[test]
    fn test_identifier_stops_at_punctuation() {
        assert_eq!(lex_ident("user.name").value.as_text(), Some("user"));
        assert_eq!(lex_ident("foo(1)").value.as_text(), Some("foo"));
    }

    #[test]
    fn test_keyword_if() {
        let token = lex_ident("if");
        assert_eq!(token.kind, TokenKind::IfBegin);
        assert_eq!(token.value, Value::Text("if".into()));
    }

    #[test]
    fn test_keyword_endautoescape() {
        let token = lex_ident("endautoescape");
        assert_eq!(token.kind, TokenKind::AutoescapeEnd);
        assert_eq!(token.value.as_text(), Some("endautoescape"));
    }

    #[test]
    fn test_booleans() {
        assert_eq!(lex_ident("true").value, Value::Boolean(true));
        assert_eq!(lex_ident("false").kind, TokenKind::False);
        assert_eq!(lex_ident("false").value, Value::Boolean(false));
    }

    #[test]
    fn test_keyword_prefix_is_symbol() {
        assert_eq!(lex_ident("iffy").kind, TokenKind::Symbol);
        assert_eq!(lex_ident("endif_").kind, TokenKind::Symbol);
        assert_eq!(lex_ident("True").kind, TokenKind::Symbol);
    }

    #[test]
    fn test_operator_keywords() {
        assert_eq!(lex_ident("in").kind, TokenKind::In);
        assert_eq!(lex_ident("not").kind, TokenKind::Not);
    }
}
