//! Byte classes used inside code regions.
//!
//! Identifiers are ASCII only. Any byte outside these classes that does not
//! start a number, string or operator is an unrecognized character.

/// Checks if a byte can start an identifier: `[A-Za-z_]`.
///
/// # Example
///
/// ```
/// use stencil_lex::chars::is_ident_start;
///
/// assert!(is_ident_start(b'a'));
/// assert!(is_ident_start(b'_'));
/// assert!(!is_ident_start(b'1'));
/// assert!(!is_ident_start(b'-'));
/// ```
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphabetic()
}

/// Checks if a byte can continue an identifier: `[A-Za-z0-9_]`.
///
/// # Example
///
/// ```
/// use stencil_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue(b'a'));
/// assert!(is_ident_continue(b'7'));
/// assert!(!is_ident_continue(b'.'));
/// ```
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// Whitespace skipped between lexemes in expansions and commands.
///
/// Space, tab, carriage return, line feed, vertical tab and form feed.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0B | 0x0C)
}

/// Checks if a byte is a string delimiter.
#[inline]
pub fn is_quote(b: u8) -> bool {
    b == b'"' || b == b'\''
}
