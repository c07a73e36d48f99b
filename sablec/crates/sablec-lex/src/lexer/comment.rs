//! Whitespace and comment skipping.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// Newlines are tokens and are not skipped. A `#` comment runs up to,
    /// but not including, the next newline.
    pub fn skip_whitespace_and_comments(&mut self) {
        while let Some(c) = self.cursor.current() {
            match c {
                ' ' | '\t' | '\r' | '\x0C' => {
                    self.cursor.advance();
                },
                '#' => self.skip_line_comment(),
                _ => return,
            }
        }
    }

    /// Skips a `#` comment.
    pub fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }
}
