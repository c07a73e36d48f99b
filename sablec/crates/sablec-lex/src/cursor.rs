//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.

use sablec_util::SourcePos;

/// A cursor for traversing source code character by character.
///
/// Columns advance by one per character regardless of its UTF-8 width, so a
/// four-byte mathematical letter occupies a single column.
///
/// # Example
///
/// ```
/// use sablec_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("µ = 2");
///
/// assert_eq!(cursor.current(), Some('µ'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some(' '));
/// assert_eq!(cursor.pos().offset, 2);
/// assert_eq!(cursor.pos().column, 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        let rest = self.source.get(self.position..)?;

        // Fast path for ASCII (most common case)
        match rest.as_bytes().first() {
            Some(&b) if b < 128 => Some(b as char),
            _ => rest.chars().next(),
        }
    }

    /// Returns the character `n` characters ahead of the cursor.
    ///
    /// ```
    /// use sablec_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("x\u{E0100}y");
    /// assert_eq!(cursor.peek_nth(1), Some('\u{E0100}'));
    /// assert_eq!(cursor.peek_nth(2), Some('y'));
    /// assert_eq!(cursor.peek_nth(3), None);
    /// ```
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.source.get(self.position..)?.chars().nth(n)
    }

    /// Advances past the current character and returns it.
    ///
    /// Updates line and column tracking. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// ```
    /// use sablec_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// cursor.eat_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.current(), Some('a'));
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.current() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Advances if the current character equals `expected`.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Captures the current position.
    #[inline]
    pub fn pos(&self) -> SourcePos {
        SourcePos::new(self.position, self.line, self.column)
    }

    /// Returns the source text from byte offset `start` to the cursor.
    ///
    /// ```
    /// use sablec_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("蟒 = 3");
    /// cursor.advance();
    /// assert_eq!(cursor.slice_from(0), "蟒");
    /// ```
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.pos(), SourcePos::START);
    }

    #[test]
    fn test_newline_tracking() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 2));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        assert_eq!(cursor.current(), Some('b'));
    }

    #[test]
    fn test_non_bmp_is_one_column() {
        let mut cursor = Cursor::new("𝔘𝔫");
        assert_eq!(cursor.advance(), Some('𝔘'));
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.column(), 2);
        assert_eq!(cursor.current(), Some('𝔫'));
    }

    #[test]
    fn test_eat() {
        let mut cursor = Cursor::new("=x");
        assert!(!cursor.eat('x'));
        assert!(cursor.eat('='));
        assert!(cursor.eat('x'));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_slice_from_tracks_bytes() {
        let mut cursor = Cursor::new("ä1 rest");
        cursor.eat_while(|c| !c.is_whitespace());
        assert_eq!(cursor.slice_from(0), "ä1");
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.column(), 3);
    }
}
