//! Token definitions for the template tokenizer.
//!
//! A [`Token`] is a [`TokenKind`] stamped with the [`Location`] of its first
//! unit and the [`Value`] it carries.

use std::fmt;
use std::sync::OnceLock;

use stencil_util::{FxHashMap, Location};

use crate::value::Value;

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // ===== Literals =====
    /// A run of literal text outside any embedded region
    Text,
    /// An identifier that is not a keyword
    Symbol,
    /// Integer literal
    Integer,
    /// Floating-point literal
    Number,
    /// String literal
    String,
    /// `true`
    True,
    /// `false`
    False,

    // ===== Region delimiters =====
    /// `{{`
    ExpansionBegin,
    /// `}}`
    ExpansionEnd,
    /// `{%`
    CommandBegin,
    /// `%}`
    CommandEnd,

    // ===== Operators and punctuation =====
    /// `=`
    Assign,
    /// `not`
    Not,
    /// `in`
    In,
    /// `==`
    Equals,
    /// `!=`
    NotEquals,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `[`
    ArrayBegin,
    /// `]`
    ArrayEnd,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `.`
    Period,
    /// `..`
    PeriodPeriod,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `|`
    Pipe,

    // ===== Command keywords =====
    /// `set`
    Set,
    /// `extends`
    Extends,
    /// `include`
    Include,
    /// `block`
    BlockBegin,
    /// `endblock`
    BlockEnd,
    /// `for`
    ForBegin,
    /// `endfor`
    ForEnd,
    /// `if`
    IfBegin,
    /// `endif`
    IfEnd,
    /// `else`
    Else,
    /// `autoescape`
    AutoescapeBegin,
    /// `endautoescape`
    AutoescapeEnd,
    /// `spaceless`
    SpacelessBegin,
    /// `endspaceless`
    SpacelessEnd,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 43] = [
        TokenKind::Text,
        TokenKind::Symbol,
        TokenKind::Integer,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::True,
        TokenKind::False,
        TokenKind::ExpansionBegin,
        TokenKind::ExpansionEnd,
        TokenKind::CommandBegin,
        TokenKind::CommandEnd,
        TokenKind::Assign,
        TokenKind::Not,
        TokenKind::In,
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::Less,
        TokenKind::LessEqual,
        TokenKind::Greater,
        TokenKind::GreaterEqual,
        TokenKind::ArrayBegin,
        TokenKind::ArrayEnd,
        TokenKind::ParenOpen,
        TokenKind::ParenClose,
        TokenKind::Period,
        TokenKind::PeriodPeriod,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::Pipe,
        TokenKind::Set,
        TokenKind::Extends,
        TokenKind::Include,
        TokenKind::BlockBegin,
        TokenKind::BlockEnd,
        TokenKind::ForBegin,
        TokenKind::ForEnd,
        TokenKind::IfBegin,
        TokenKind::IfEnd,
        TokenKind::Else,
        TokenKind::AutoescapeBegin,
        TokenKind::AutoescapeEnd,
        TokenKind::SpacelessBegin,
        TokenKind::SpacelessEnd,
    ];

    /// Canonical `TOK_*` name used in dumps and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Text => "TOK_TEXT",
            TokenKind::Symbol => "TOK_SYMBOL",
            TokenKind::Integer => "TOK_INTEGER",
            TokenKind::Number => "TOK_NUMBER",
            TokenKind::String => "TOK_STRING",
            TokenKind::True => "TOK_TRUE",
            TokenKind::False => "TOK_FALSE",
            TokenKind::ExpansionBegin => "TOK_EXPANSION_BEGIN",
            TokenKind::ExpansionEnd => "TOK_EXPANSION_END",
            TokenKind::CommandBegin => "TOK_COMMAND_BEGIN",
            TokenKind::CommandEnd => "TOK_COMMAND_END",
            TokenKind::Assign => "TOK_ASSIGN",
            TokenKind::Not => "TOK_NOT",
            TokenKind::In => "TOK_IN",
            TokenKind::Equals => "TOK_EQUALS",
            TokenKind::NotEquals => "TOK_NOT_EQUALS",
            TokenKind::Less => "TOK_LESS",
            TokenKind::LessEqual => "TOK_LESS_EQUAL",
            TokenKind::Greater => "TOK_GREATER",
            TokenKind::GreaterEqual => "TOK_GREATER_EQUAL",
            TokenKind::ArrayBegin => "TOK_ARRAY_BEGIN",
            TokenKind::ArrayEnd => "TOK_ARRAY_END",
            TokenKind::ParenOpen => "TOK_PAREN_OPEN",
            TokenKind::ParenClose => "TOK_PAREN_CLOSE",
            TokenKind::Period => "TOK_PERIOD",
            TokenKind::PeriodPeriod => "TOK_PERIOD_PERIOD",
            TokenKind::Comma => "TOK_COMMA",
            TokenKind::Colon => "TOK_COLON",
            TokenKind::Pipe => "TOK_PIPE",
            TokenKind::Set => "TOK_SET",
            TokenKind::Extends => "TOK_EXTENDS",
            TokenKind::Include => "TOK_INCLUDE",
            TokenKind::BlockBegin => "TOK_BLOCK_BEGIN",
            TokenKind::BlockEnd => "TOK_BLOCK_END",
            TokenKind::ForBegin => "TOK_FOR_BEGIN",
            TokenKind::ForEnd => "TOK_FOR_END",
            TokenKind::IfBegin => "TOK_IF_BEGIN",
            TokenKind::IfEnd => "TOK_IF_END",
            TokenKind::Else => "TOK_ELSE",
            TokenKind::AutoescapeBegin => "TOK_AUTOESCAPE_BEGIN",
            TokenKind::AutoescapeEnd => "TOK_AUTOESCAPE_END",
            TokenKind::SpacelessBegin => "TOK_SPACELESS_BEGIN",
            TokenKind::SpacelessEnd => "TOK_SPACELESS_END",
        }
    }

    /// The fixed source text of this kind, for kinds that have one.
    ///
    /// Returns `None` for [`Text`](TokenKind::Text),
    /// [`Symbol`](TokenKind::Symbol) and the numeric and string literals.
    pub const fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Text
            | TokenKind::Symbol
            | TokenKind::Integer
            | TokenKind::Number
            | TokenKind::String => return None,
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::ExpansionBegin => "{{",
            TokenKind::ExpansionEnd => "}}",
            TokenKind::CommandBegin => "{%",
            TokenKind::CommandEnd => "%}",
            TokenKind::Assign => "=",
            TokenKind::Not => "not",
            TokenKind::In => "in",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::ArrayBegin => "[",
            TokenKind::ArrayEnd => "]",
            TokenKind::ParenOpen => "(",
            TokenKind::ParenClose => ")",
            TokenKind::Period => ".",
            TokenKind::PeriodPeriod => "..",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Pipe => "|",
            TokenKind::Set => "set",
            TokenKind::Extends => "extends",
            TokenKind::Include => "include",
            TokenKind::BlockBegin => "block",
            TokenKind::BlockEnd => "endblock",
            TokenKind::ForBegin => "for",
            TokenKind::ForEnd => "endfor",
            TokenKind::IfBegin => "if",
            TokenKind::IfEnd => "endif",
            TokenKind::Else => "else",
            TokenKind::AutoescapeBegin => "autoescape",
            TokenKind::AutoescapeEnd => "endautoescape",
            TokenKind::SpacelessBegin => "spaceless",
            TokenKind::SpacelessEnd => "endspaceless",
        };
        Some(text)
    }

    /// Returns true for kinds produced from the keyword table.
    pub fn is_keyword(self) -> bool {
        self.lexeme().is_some_and(|text| keyword_from_ident(text) == Some(self))
    }

    /// Returns true for kinds that carry a literal value.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::Number
                | TokenKind::String
                | TokenKind::True
                | TokenKind::False
        )
    }

    /// Returns true for the four region delimiters.
    pub const fn is_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::ExpansionBegin
                | TokenKind::ExpansionEnd
                | TokenKind::CommandBegin
                | TokenKind::CommandEnd
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn keyword_table() -> &'static FxHashMap<&'static str, TokenKind> {
    static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    KEYWORDS.get_or_init(|| {
        [
            ("set", TokenKind::Set),
            ("extends", TokenKind::Extends),
            ("include", TokenKind::Include),
            ("block", TokenKind::BlockBegin),
            ("endblock", TokenKind::BlockEnd),
            ("for", TokenKind::ForBegin),
            ("endfor", TokenKind::ForEnd),
            ("if", TokenKind::IfBegin),
            ("endif", TokenKind::IfEnd),
            ("else", TokenKind::Else),
            ("autoescape", TokenKind::AutoescapeBegin),
            ("endautoescape", TokenKind::AutoescapeEnd),
            ("spaceless", TokenKind::SpacelessBegin),
            ("endspaceless", TokenKind::SpacelessEnd),
            ("in", TokenKind::In),
            ("not", TokenKind::Not),
            ("true", TokenKind::True),
            ("false", TokenKind::False),
        ]
        .into_iter()
        .collect()
    })
}

/// Looks up an identifier in the keyword table.
///
/// Matching is case-sensitive.
///
/// # Example
///
/// ```
/// use stencil_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("endif"), Some(TokenKind::IfEnd));
/// assert_eq!(keyword_from_ident("If"), None);
/// assert_eq!(keyword_from_ident("user"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    keyword_table().get(text).copied()
}

/// A positioned token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What was recognized
    pub kind: TokenKind,
    /// Row and column of the first unit of the lexeme
    pub location: Location,
    /// Payload, [`Value::None`] for delimiters and operators
    pub value: Value,
}

impl Token {
    /// Creates a token carrying `value`.
    pub fn new(kind: TokenKind, location: Location, value: impl Into<Value>) -> Self {
        Self {
            kind,
            location,
            value: value.into(),
        }
    }

    /// Creates a token without a value.
    pub fn bare(kind: TokenKind, location: Location) -> Self {
        Self {
            kind,
            location,
            value: Value::None,
        }
    }
}

impl fmt::Display for Token {
    /// `row:column TOK_KIND value`, without the trailing value when there is none.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.location, self.kind)?;
        if !self.value.is_none() {
            write!(f, " {}", self.value)?;
        }
        Ok(())
    }
}
