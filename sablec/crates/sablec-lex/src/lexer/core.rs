//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use sablec_util::{DiagnosticCode, Handler, SourceFile, SourcePos, Span, E_LEXER_UNEXPECTED_CHAR};

use crate::cursor::Cursor;
use crate::error::LexResult;
use crate::token::{Spanned, Token};
use crate::unicode::{is_ascii_ident_start, requires_identifier};

/// Behavior switches for a [`Lexer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Emit a `W0001` warning for every identifier that normalization
    /// rewrote.
    pub warn_normalized: bool,
}

/// Lexer for the Sable language.
///
/// The lexer transforms source text into a stream of tokens. It skips
/// whitespace and comments, scans identifiers (normalizing them), integer
/// literals and single-character punctuation.
///
/// Non-identifier junk is reported to the handler and lexed as
/// [`Token::Invalid`]. An illegal character where an identifier character is
/// required is a [`LexError`](crate::LexError): the lexer returns it without
/// consuming the character, and the caller decides whether to stop or to
/// resume with [`Lexer::skip_line`].
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// The file being lexed.
    pub(crate) file: &'a SourceFile,

    /// Handler for recoverable diagnostics.
    pub(crate) handler: &'a Handler,

    /// Position where the current token starts.
    pub(crate) token_start: SourcePos,

    pub(crate) options: LexOptions,

    /// Set once the iterator has yielded EOF or an error.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source file.
    pub fn new(file: &'a SourceFile, handler: &'a Handler) -> Self {
        Self::with_options(file, handler, LexOptions::default())
    }

    /// Creates a new lexer with explicit options.
    pub fn with_options(file: &'a SourceFile, handler: &'a Handler, options: LexOptions) -> Self {
        let mut cursor = Cursor::new(file.content());
        // A leading BOM is an encoding artifact, not source text.
        cursor.eat('\u{FEFF}');
        Self {
            cursor,
            file,
            handler,
            token_start: SourcePos::START,
            options,
            finished: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace and comments, then dispatches on the current
    /// character.
    ///
    /// # Returns
    ///
    /// The next token, `Token::Eof` at end of input, or the error that
    /// stopped an identifier scan.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.skip_whitespace_and_comments();
        self.token_start = self.cursor.pos();

        let Some(c) = self.cursor.current() else {
            return Ok(Token::Eof);
        };

        let token = match c {
            '\n' => self.single(Token::Newline),
            '=' => self.single(Token::Eq),
            '+' => self.single(Token::Plus),
            '-' => self.single(Token::Minus),
            '*' => self.single(Token::Star),
            '/' => self.single(Token::Slash),
            '(' => self.single(Token::LParen),
            ')' => self.single(Token::RParen),
            ',' => self.single(Token::Comma),
            ':' => self.single(Token::Colon),
            '.' => self.single(Token::Dot),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_ascii_ident_start(c) || requires_identifier(c) => self.lex_identifier(c)?,
            c => {
                self.cursor.advance();
                self.report_error(
                    E_LEXER_UNEXPECTED_CHAR,
                    format!("unexpected character `{}`", c.escape_debug()),
                );
                Token::Invalid(c)
            },
        };
        Ok(token)
    }

    /// Returns the next token with its span.
    pub fn next_spanned(&mut self) -> LexResult<Spanned> {
        let token = self.next_token()?;
        Ok(Spanned::new(token, self.token_span()))
    }

    /// Discards the rest of the current line, leaving its newline in place.
    ///
    /// Used to resynchronize after a [`LexError`](crate::LexError).
    pub fn skip_line(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
        self.finished = false;
    }

    /// Returns the file being lexed.
    pub fn file(&self) -> &'a SourceFile {
        self.file
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(self.token_start, self.cursor.pos()).with_file_id(self.file.id())
    }

    /// Reports a recoverable error covering the current token.
    pub(crate) fn report_error(&self, code: DiagnosticCode, message: String) {
        self.handler.error(code, message, self.token_span());
    }

    fn single(&mut self, token: Token) -> Token {
        self.cursor.advance();
        token
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    /// Yields tokens up to (not including) EOF. Stops after the first error;
    /// call [`Lexer::skip_line`] to resume.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Token::Eof) => {
                self.finished = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sablec_util::{Diagnostic, Symbol};

    fn lex_with(source: &str) -> (Vec<LexResult<Token>>, Vec<Diagnostic>) {
        let file = SourceFile::new(0, "test.sb", source);
        let handler = Handler::new();
        let tokens = Lexer::new(&file, &handler).collect();
        (tokens, handler.take())
    }

    fn lex_tokens(source: &str) -> Vec<Token> {
        let (tokens, _) = lex_with(source);
        tokens
            .into_iter()
            .collect::<Result<_, _>>()
            .expect("source should lex")
    }

    fn ident(name: &str) -> Symbol {
        Symbol::intern(name)
    }

    fn names(tokens: &[Token]) -> Vec<&'static str> {
        tokens
            .iter()
            .filter_map(Token::as_ident)
            .map(|i| i.as_str())
            .collect()
    }

    #[test]
    fn test_empty_source() {
        assert!(lex_tokens("").is_empty());
        assert!(lex_tokens("   \t # only a comment").is_empty());
    }

    #[test]
    fn test_assignment_line() {
        let tokens = lex_tokens("ä = 1\n");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].as_ident().map(|i| i.name), Some(ident("ä")));
        assert_eq!(tokens[1], Token::Eq);
        assert_eq!(tokens[2], Token::Number(1));
        assert_eq!(tokens[3], Token::Newline);
    }

    #[test]
    fn test_punctuation() {
        let tokens = lex_tokens("=+-*/(),:.");
        assert_eq!(
            tokens,
            vec![
                Token::Eq,
                Token::Plus,
                Token::Minus,
                Token::Star,
                Token::Slash,
                Token::LParen,
                Token::RParen,
                Token::Comma,
                Token::Colon,
                Token::Dot,
            ]
        );
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        let tokens = lex_tokens("a # b = €\nc");
        assert_eq!(names(&tokens), vec!["a", "c"]);
        assert_eq!(tokens[1], Token::Newline);
    }

    #[test]
    fn test_bom_is_skipped() {
        let tokens = lex_tokens("\u{FEFF}x = 1");
        assert_eq!(names(&tokens), vec!["x"]);
    }

    #[test]
    fn test_ascii_junk_is_invalid_token() {
        let (tokens, diags) = lex_with("a $ b");
        let tokens: Vec<Token> = tokens.into_iter().map(|t| t.unwrap()).collect();
        assert_eq!(tokens[1], Token::Invalid('$'));
        assert_eq!(names(&tokens), vec!["a", "b"]);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E0002));
        assert_eq!(diags[0].message, "unexpected character `$`");
        assert_eq!(diags[0].span.column(), 3);
    }

    #[test]
    fn test_identifier_ends_at_ascii_symbol() {
        let tokens = lex_tokens("f(x,y)");
        assert_eq!(names(&tokens), vec!["f", "x", "y"]);
        assert_eq!(tokens.len(), 6);
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let (tokens, _) = lex_with("a\n€ b\nc");
        assert_eq!(tokens.len(), 3);
        assert!(tokens[0].is_ok());
        assert!(tokens[1].is_ok());
        let err = tokens[2].as_ref().unwrap_err();
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_skip_line_resumes() {
        let file = SourceFile::new(0, "t.sb", "€ b\nc");
        let handler = Handler::new();
        let mut lexer = Lexer::new(&file, &handler);
        assert!(lexer.next().unwrap().is_err());
        assert!(lexer.next().is_none());
        lexer.skip_line();
        let rest: Vec<Token> = lexer.map(|t| t.unwrap()).collect();
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[0], Token::Newline);
        assert_eq!(names(&rest), vec!["c"]);
    }

    #[test]
    fn test_spans_are_char_columns() {
        let file = SourceFile::new(3, "t.sb", "𝔘 = 1");
        let handler = Handler::new();
        let mut lexer = Lexer::new(&file, &handler);
        let first = lexer.next_spanned().unwrap();
        assert_eq!(first.span.start(), 0);
        assert_eq!(first.span.end(), 4);
        assert_eq!(first.span.file_id, file.id());
        let eq = lexer.next_spanned().unwrap();
        assert_eq!(eq.token, Token::Eq);
        assert_eq!(eq.span.column(), 3);
    }

    #[test]
    fn test_crlf_line_endings() {
        let tokens = lex_tokens("a\r\nb");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1], Token::Newline);
    }
}
