//! Number literal lexing.
//!
//! Only decimal integers are recognized; `_` may separate digits.

use sablec_util::E_LEXER_INVALID_NUMBER;

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a decimal integer literal.
    ///
    /// A literal that does not fit in a `u64` is reported (`E0003`) and
    /// lexed as `Token::Number(u64::MAX)`.
    pub fn lex_number(&mut self) -> Token {
        let mut value = Some(0u64);

        while let Some(c) = self.cursor.current() {
            match c {
                '0'..='9' => {
                    let digit = u64::from(c as u8 - b'0');
                    value = value
                        .and_then(|v| v.checked_mul(10))
                        .and_then(|v| v.checked_add(digit));
                    self.cursor.advance();
                },
                '_' if self.cursor.peek_nth(1).is_some_and(|n| n.is_ascii_digit()) => {
                    self.cursor.advance();
                },
                _ => break,
            }
        }

        match value {
            Some(v) => Token::Number(v),
            None => {
                let text = self.cursor.slice_from(self.token_start.offset);
                self.report_error(
                    E_LEXER_INVALID_NUMBER,
                    format!("integer literal `{}` is too large", text),
                );
                Token::Number(u64::MAX)
            },
        }
    }
}
