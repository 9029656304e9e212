//! Edge case tests for stencil-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, BlockKind, LexError, NumericError, Token, TokenKind, Value};
    use stencil_util::Location;

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
    }

    fn lex_err(source: &str) -> LexError {
        tokenize(source).unwrap_err()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_symbol() {
        let t = lex_all("{{x}}");
        assert_eq!(t[1], Token::new(TokenKind::Symbol, Location::new(0, 2), "x"));
        assert_eq!(t[2].location, Location::new(0, 3));
    }

    #[test]
    fn test_edge_long_symbol() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("{{{{ {} }}}}", name));
        assert_eq!(t[1].value.as_text(), Some(name.as_str()));
        assert_eq!(t[2].location, Location::new(0, 10004));
    }

    #[test]
    fn test_edge_long_text() {
        let text = "<p>lorem ipsum</p>\n".repeat(1000);
        let t = lex_all(&format!("{}{{{{ x }}}}", text));
        assert_eq!(t[0].value.as_text(), Some(text.as_str()));
        assert_eq!(t[1].location, Location::new(1000, 0));
    }

    #[test]
    fn test_edge_keywords_adjacent_to_delimiters() {
        let t = lex_all("{%endif%}");
        assert_eq!(t[1].kind, TokenKind::IfEnd);
        assert_eq!(t[1].location, Location::new(0, 2));
        assert_eq!(t[2].location, Location::new(0, 7));
    }

    #[test]
    fn test_edge_keyword_in_expansion() {
        // Keywords are recognized in any code region
        let t = lex_all("{{ if }}");
        assert_eq!(t[1].kind, TokenKind::IfBegin);
    }

    #[test]
    fn test_edge_keyword_text_outside_regions() {
        let t = lex_all("if endif true");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Text);
    }

    #[test]
    fn test_edge_zero() {
        let t = lex_all("{{0}}");
        assert_eq!(t[1].value, Value::Integer(0));
    }

    #[test]
    fn test_edge_number_then_period_period() {
        let t = lex_all("{{ 1..n }}");
        assert_eq!(t[1].value, Value::Integer(1));
        assert_eq!(t[2].kind, TokenKind::PeriodPeriod);
        assert_eq!(t[2].location, Location::new(0, 4));
        assert_eq!(t[3].value.as_text(), Some("n"));
    }

    #[test]
    fn test_edge_number_then_closer() {
        let t = lex_all("{{12.}}");
        assert_eq!(t[1].value, Value::Double(12.0));
        assert_eq!(t[2].kind, TokenKind::ExpansionEnd);
        assert_eq!(t[2].location, Location::new(0, 5));
    }

    #[test]
    fn test_edge_period_then_number() {
        // A leading period is never part of a number
        let t = lex_all("{{ .5 }}");
        assert_eq!(t[1].kind, TokenKind::Period);
        assert_eq!(t[2].value, Value::Integer(5));
    }

    #[test]
    fn test_edge_negative_number_is_unrecognized() {
        assert_eq!(
            lex_err("{{ -1 }}"),
            LexError::UnrecognizedCharacter {
                location: Location::new(0, 3),
                character: '-',
            }
        );
    }

    #[test]
    fn test_edge_brace_inside_expansion() {
        assert!(matches!(
            lex_err("{{ { }}"),
            LexError::UnrecognizedCharacter { character: '{', .. }
        ));
    }

    #[test]
    fn test_edge_single_closer_unit() {
        // `}` alone is not a closer
        assert!(matches!(
            lex_err("{{ a } }}"),
            LexError::UnrecognizedCharacter { character: '}', .. }
        ));
    }

    #[test]
    fn test_edge_comment_inside_expansion_is_not_a_comment() {
        assert!(matches!(
            lex_err("{{ {# x #} }}"),
            LexError::UnrecognizedCharacter { character: '{', .. }
        ));
    }

    #[test]
    fn test_edge_string_with_braces() {
        let t = lex_all("{{ '{{ not an opener }' }}");
        assert_eq!(t.len(), 3);
        assert_eq!(t[1].value.as_text(), Some("'{{ not an opener }"));
    }

    #[test]
    fn test_edge_escaped_closer_in_string() {
        let t = lex_all("{{ 'a\\}}' }}");
        assert_eq!(t[1].value.as_text(), Some("'a}}"));
    }

    #[test]
    fn test_edge_unterminated_string_before_closer() {
        assert_eq!(
            lex_err("{% set s = 'oops %}"),
            LexError::UnterminatedString {
                location: Location::new(0, 17),
                quote: '\'',
            }
        );
    }

    #[test]
    fn test_edge_unterminated_string_at_eof() {
        assert_eq!(
            lex_err("{{ \"abc"),
            LexError::UnterminatedString {
                location: Location::new(0, 7),
                quote: '"',
            }
        );
    }

    #[test]
    fn test_edge_opener_at_eof() {
        assert_eq!(
            lex_err("text {{"),
            LexError::UnterminatedBlock {
                location: Location::new(0, 7),
                block: BlockKind::Expansion,
            }
        );
        assert_eq!(
            lex_err("{#"),
            LexError::UnterminatedBlock {
                location: Location::new(0, 2),
                block: BlockKind::Comment,
            }
        );
    }

    #[test]
    fn test_edge_trailing_whitespace_in_region_at_eof() {
        assert_eq!(
            lex_err("{% if x\n  "),
            LexError::UnterminatedBlock {
                location: Location::new(1, 2),
                block: BlockKind::Command,
            }
        );
    }

    #[test]
    fn test_edge_numeric_error_location() {
        assert_eq!(
            lex_err("{{ 3e+ }}"),
            LexError::InvalidNumericLiteral {
                location: Location::new(0, 6),
                literal: "3e+".into(),
                reason: NumericError::MissingExponentDigits,
            }
        );
    }

    #[test]
    fn test_edge_crlf_counts_carriage_return() {
        let t = lex_all("a\r\n{{ x }}\r\n");
        assert_eq!(t[1].location, Location::new(1, 0));
        assert_eq!(t[4].value.as_text(), Some("\r\n"));
        assert_eq!(t[4].location, Location::new(1, 7));
    }

    #[test]
    fn test_edge_multibyte_text_columns() {
        let t = lex_all("héllo {{ x }}");
        // `é` is two bytes
        assert_eq!(t[1].location, Location::new(0, 7));
    }

    #[test]
    fn test_edge_newlines_inside_string_move_rows() {
        let t = lex_all("{{ 'a\nb' c }}");
        assert_eq!(t[2].value.as_text(), Some("c"));
        assert_eq!(t[2].location, Location::new(1, 3));
    }

    #[test]
    fn test_edge_adjacent_regions() {
        let t = lex_all("{{a}}{%b%}{#c#}{{d}}");
        let kinds: Vec<_> = t.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::ExpansionBegin,
                TokenKind::Symbol,
                TokenKind::ExpansionEnd,
                TokenKind::CommandBegin,
                TokenKind::Symbol,
                TokenKind::CommandEnd,
                TokenKind::ExpansionBegin,
                TokenKind::Symbol,
                TokenKind::ExpansionEnd,
            ]
        );
        assert_eq!(t[6].location, Location::new(0, 15));
    }
}
