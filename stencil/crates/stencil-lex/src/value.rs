//! Literal values attached to tokens.

use std::fmt;

/// The value carried by a [`Token`](crate::Token).
///
/// Delimiters and operators carry [`Value::None`]. Symbols, strings, text
/// runs and keywords carry [`Value::Text`]; numbers and booleans carry their
/// decoded value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// No value
    #[default]
    None,
    /// Signed 64-bit integer
    Integer(i64),
    /// IEEE-754 double
    Double(f64),
    /// Text payload
    Text(String),
    /// Boolean
    Boolean(bool),
}

impl Value {
    /// Returns true for [`Value::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns the integer payload, if any.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the double payload, if any.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean payload, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Short lowercase name of the variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Integer(_) => "integer",
            Value::Double(_) => "double",
            Value::Text(_) => "text",
            Value::Boolean(_) => "boolean",
        }
    }
}

impl fmt::Display for Value {
    /// Texts are printed escaped (`{:?}` style) so that token dumps stay on
    /// one line; [`Value::None`] prints nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => Ok(()),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Double(d) => write!(f, "{:?}", d),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert!(Value::default().is_none());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Integer(5).as_integer(), Some(5));
        assert_eq!(Value::Integer(5).as_double(), None);
        assert_eq!(Value::Double(1.5).as_double(), Some(1.5));
        assert_eq!(Value::from("x").as_text(), Some("x"));
        assert_eq!(Value::Boolean(true).as_bool(), Some(true));
        assert_eq!(Value::None.as_text(), None);
    }

    #[test]
    fn test_from() {
        assert_eq!(Value::from(3i64), Value::Integer(3));
        assert_eq!(Value::from(2.0f64), Value::Double(2.0));
        assert_eq!(Value::from(false), Value::Boolean(false));
        assert_eq!(Value::from(String::from("s")), Value::Text("s".into()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::None.to_string(), "");
        assert_eq!(Value::Integer(-4).to_string(), "-4");
        assert_eq!(Value::Double(12.0).to_string(), "12.0");
        assert_eq!(Value::Double(0.5).to_string(), "0.5");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::from("a\nb").to_string(), "\"a\\nb\"");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::None.type_name(), "none");
        assert_eq!(Value::Double(0.0).type_name(), "double");
        assert_eq!(Value::from("").type_name(), "text");
    }
}
