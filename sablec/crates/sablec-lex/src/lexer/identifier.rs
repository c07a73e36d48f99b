//! Identifier scanning.
//!
//! The scanner walks one identifier code point by code point:
//!
//! ```text
//! Idle --start char--> ScanningContinue --continue char--> ScanningContinue
//!                            |                                   |
//!                            +--ASCII non-continue / EOF--> Accepted
//!                            +--non-ASCII non-continue----> Rejected
//! ```
//!
//! A non-ASCII code point is always scanned as an identifier character, so
//! one that fails classification rejects the whole identifier. Nothing is
//! emitted for a rejected scan.

use sablec_util::{SourcePos, Span, W_NORMALIZED_IDENT};
use tracing::trace;

use crate::error::{LexError, LexResult};
use crate::token::{Ident, RawIdent, Token};
use crate::unicode::{is_ident_continue, is_ident_start, requires_identifier};
use crate::Lexer;

/// What the scanner does with the code point under the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    /// Append the code point and keep scanning.
    Continue,
    /// The identifier ends before this code point.
    Accepted,
    /// The code point is illegal where it stands.
    Rejected(char),
}

impl ScanState {
    fn at_start(c: char) -> Self {
        if is_ident_start(c) {
            ScanState::Continue
        } else {
            ScanState::Rejected(c)
        }
    }

    fn after_ident_char(next: Option<char>) -> Self {
        match next {
            Some(c) if is_ident_continue(c) => ScanState::Continue,
            Some(c) if requires_identifier(c) => ScanState::Rejected(c),
            _ => ScanState::Accepted,
        }
    }
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier starting with `first`, the current character.
    ///
    /// # Returns
    ///
    /// `Token::Ident` carrying the normalized name and the span of the raw
    /// spelling, or the error for the first illegal code point.
    pub fn lex_identifier(&mut self, first: char) -> LexResult<Token> {
        let raw = self.scan_identifier(first)?;
        Ok(Token::Ident(self.finish_identifier(raw)))
    }

    /// Runs the scanner state machine and returns the raw spelling.
    pub(crate) fn scan_identifier(&mut self, first: char) -> LexResult<RawIdent<'a>> {
        let start = self.cursor.pos();
        let mut state = ScanState::at_start(first);

        loop {
            match state {
                ScanState::Continue => {
                    self.cursor.advance();
                    state = ScanState::after_ident_char(self.cursor.current());
                },
                ScanState::Accepted => break,
                ScanState::Rejected(c) => return Err(self.invalid_identifier_char(c)),
            }
        }

        Ok(RawIdent {
            text: self.cursor.slice_from(start.offset),
            span: Span::new(start, self.cursor.pos()).with_file_id(self.file.id()),
        })
    }

    fn finish_identifier(&self, raw: RawIdent<'a>) -> Ident {
        let text = raw.text;
        let ident = raw.normalize();
        if ident.as_str() != text {
            trace!(raw = text, normalized = ident.as_str(), "identifier normalized");
            if self.options.warn_normalized {
                self.handler.warning(
                    W_NORMALIZED_IDENT,
                    format!("identifier `{}` is normalized to `{}`", text, ident),
                    ident.span,
                );
            }
        }
        ident
    }

    /// Builds the error for `c`, which sits under the cursor.
    fn invalid_identifier_char(&self, c: char) -> LexError {
        let pos = self.cursor.pos();
        let end = SourcePos::new(pos.offset + c.len_utf8(), pos.line, pos.column + 1);
        LexError::invalid_identifier_char(
            self.file.name_arc(),
            c,
            pos,
            Span::new(pos, end).with_file_id(self.file.id()),
        )
    }
}

#[cfg(test)]
mod tests {
    use sablec_util::{Handler, SourceFile, Symbol, W_NORMALIZED_IDENT};

    use crate::error::{LexErrorKind, LexResult};
    use crate::lexer::LexOptions;
    use crate::token::Token;
    use crate::Lexer;

    fn lex_ident(source: &str) -> LexResult<Token> {
        let file = SourceFile::new(0, "ident.sb", source);
        let handler = Handler::new();
        let mut lexer = Lexer::new(&file, &handler);
        lexer.next_token()
    }

    fn name_of(source: &str) -> &'static str {
        match lex_ident(source) {
            Ok(Token::Ident(ident)) => ident.as_str(),
            other => panic!("expected identifier for {source:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(name_of("foo"), "foo");
        assert_eq!(name_of("foo_bar_123 rest"), "foo_bar_123");
        assert_eq!(name_of("_"), "_");
    }

    #[test]
    fn test_single_letter_fixed_points() {
        for c in ['ä', 'ß', 'ж', '々', '蟒', '\u{2118}', '\u{212E}'] {
            let source = format!("{c} = 1");
            assert_eq!(name_of(&source), c.to_string(), "U+{:04X}", c as u32);
        }
    }

    #[test]
    fn test_compatibility_spellings_collapse() {
        assert_eq!(name_of("µ"), "μ");
        assert_eq!(name_of("ﬁle"), "file");
        assert_eq!(name_of("Ⅻ"), "XII");
        assert_eq!(
            name_of("\u{1D518}\u{1D52B}\u{1D526}\u{1D520}\u{1D52C}\u{1D521}\u{1D522} = 1"),
            "Unicode"
        );
    }

    #[test]
    fn test_continue_characters() {
        assert_eq!(name_of("a·b"), "a·b");
        assert_eq!(name_of("x٣"), "x٣");
        assert_eq!(name_of("e\u{0301}"), "é");
        assert_eq!(name_of("a\u{203F}b"), "a\u{203F}b");
    }

    #[test]
    fn test_variation_selector_is_one_identifier() {
        let file = SourceFile::new(0, "vs.sb", "x\u{E0100} = 1");
        let handler = Handler::new();
        let tokens: Vec<Token> = Lexer::new(&file, &handler).map(|t| t.unwrap()).collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].as_ident().map(|i| i.as_str()), Some("x\u{E0100}"));
        assert_eq!(tokens[0].as_ident().map(|i| i.span.end()), Some(5));
    }

    #[test]
    fn test_digit_cannot_start() {
        assert_eq!(lex_ident("1abc").unwrap(), Token::Number(1));
    }

    #[test]
    fn test_continue_only_char_cannot_start() {
        for source in ["٣x", "\u{0301}", "·", "\u{E0100}"] {
            let err = lex_ident(source).unwrap_err();
            assert_eq!(err.kind(), LexErrorKind::InvalidIdentifierCharacter);
            assert_eq!(err.span().column(), 1);
        }
    }

    #[test]
    fn test_illegal_start_character() {
        let err = lex_ident("€ = 2").unwrap_err();
        assert_eq!(err.offending(), '€');
        assert_eq!(err.line(), 1);
        assert_eq!(err.file(), "ident.sb");
        assert_eq!(
            err.to_string(),
            "invalid character in identifier (ident.sb, line 1)"
        );
    }

    #[test]
    fn test_illegal_continue_character_rejects_whole_identifier() {
        let file = SourceFile::new(0, "t.sb", "abc€def");
        let handler = Handler::new();
        let mut lexer = Lexer::new(&file, &handler);
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.offending(), '€');
        assert_eq!(err.span().start(), 3);
        assert_eq!(err.span().column(), 4);
        // The offending character is not consumed.
        assert_eq!(lexer.position(), 3);
    }

    #[test]
    fn test_non_ascii_space_is_rejected() {
        let err = lex_ident("a\u{00A0}= 1").unwrap_err();
        assert_eq!(err.offending(), '\u{00A0}');
    }

    #[test]
    fn test_identifiers_intern_to_same_symbol() {
        let a = lex_ident("µ").unwrap();
        let b = lex_ident("μ").unwrap();
        let (Some(a), Some(b)) = (a.as_ident(), b.as_ident()) else {
            panic!("expected identifiers");
        };
        assert_eq!(a.name, b.name);
        assert_eq!(a.name, Symbol::intern("μ"));
    }

    #[test]
    fn test_warn_normalized_option() {
        let file = SourceFile::new(0, "t.sb", "µ = ä");
        let handler = Handler::new();
        let options = LexOptions {
            warn_normalized: true,
        };
        let tokens: Vec<Token> = Lexer::with_options(&file, &handler, options)
            .map(|t| t.unwrap())
            .collect();
        assert_eq!(tokens.len(), 3);
        let diags = handler.take();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(W_NORMALIZED_IDENT));
        assert_eq!(diags[0].message, "identifier `µ` is normalized to `μ`");
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_no_warning_by_default() {
        let file = SourceFile::new(0, "t.sb", "µ");
        let handler = Handler::new();
        let _ = Lexer::new(&file, &handler).count();
        assert_eq!(handler.warning_count(), 0);
    }
}
