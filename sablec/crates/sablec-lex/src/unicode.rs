//! Unicode utilities for the Sable lexer.
//!
//! This module classifies code points for identifier scanning. The sets are
//! the Unicode `XID_Start` / `XID_Continue` properties (UAX #31) looked up in
//! the tables of the `unicode-ident` crate, with an ASCII fast path in front.

use unicode_ident::{is_xid_continue, is_xid_start};

/// Where a code point may appear in an identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// May start or continue an identifier.
    Start,
    /// May only continue an identifier (digits, combining marks, connector
    /// punctuation, variation selectors, ...).
    Continue,
    /// Never part of an identifier.
    Other,
}

/// Checks if a character is valid as the start of an identifier.
///
/// Valid identifier start characters:
/// - ASCII letters: a-z, A-Z
/// - Underscore: _
/// - Letters (Lu, Ll, Lt, Lm, Lo), letter numbers (Nl) and the
///   `Other_ID_Start` code points, minus the characters whose NFKC form
///   could not itself start an identifier
///
/// # Arguments
///
/// * `c` - The character to check
///
/// # Example
///
/// ```
/// use sablec_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('µ'));
/// assert!(is_ident_start('℘'));
/// assert!(is_ident_start('𝔘'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('€'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    if c.is_ascii() {
        is_ascii_ident_start(c)
    } else {
        is_xid_start(c)
    }
}

/// Checks if a character is valid as a continuation of an identifier.
///
/// Valid identifier continuation characters:
/// - All valid start characters
/// - Decimal digits (Nd), including ASCII 0-9
/// - Combining marks (Mn, Mc)
/// - Connector punctuation (Pc) and `Other_ID_Continue`
/// - Variation selectors (U+FE00..U+FE0F, U+E0100..U+E01EF)
///
/// # Example
///
/// ```
/// use sablec_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('1'));
/// assert!(is_ident_continue('\u{0301}'));
/// assert!(is_ident_continue('\u{E0100}'));
/// assert!(!is_ident_continue('+'));
/// assert!(!is_ident_continue(' '));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    if c.is_ascii() {
        is_ascii_ident_continue(c)
    } else {
        is_xid_continue(c)
    }
}

/// Checks if a character is a valid ASCII identifier start.
///
/// ```
/// use sablec_lex::unicode::is_ascii_ident_start;
///
/// assert!(is_ascii_ident_start('Z'));
/// assert!(is_ascii_ident_start('_'));
/// assert!(!is_ascii_ident_start('ä'));
/// assert!(!is_ascii_ident_start('1'));
/// ```
#[inline]
pub fn is_ascii_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character is a valid ASCII identifier continuation.
#[inline]
pub fn is_ascii_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Classifies a character for identifier scanning.
///
/// ```
/// use sablec_lex::unicode::{classify, CharClass};
///
/// assert_eq!(classify('蟒'), CharClass::Start);
/// assert_eq!(classify('·'), CharClass::Continue);
/// assert_eq!(classify('€'), CharClass::Other);
/// ```
pub fn classify(c: char) -> CharClass {
    if is_ident_start(c) {
        CharClass::Start
    } else if is_ident_continue(c) {
        CharClass::Continue
    } else {
        CharClass::Other
    }
}

/// Returns true if the lexer must treat `c` as part of an identifier.
///
/// Every non-ASCII code point that begins a token, or directly follows
/// identifier characters, is scanned as an identifier character; when
/// classification then fails the lexer reports an invalid identifier
/// character instead of ending the token.
#[inline]
pub fn requires_identifier(c: char) -> bool {
    !c.is_ascii()
}
