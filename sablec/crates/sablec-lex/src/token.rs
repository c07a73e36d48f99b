//! Token definitions for the Sable lexer.

use std::fmt;

use sablec_util::{Span, Symbol};

use crate::normalize::normalize;

/// A raw identifier: the exact source text the scanner accepted.
///
/// Borrowed from the source; consumed by [`RawIdent::normalize`], which is
/// the only way to produce an [`Ident`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawIdent<'src> {
    /// Source spelling, byte-for-byte.
    pub text: &'src str,
    /// Location of the spelling.
    pub span: Span,
}

impl<'src> RawIdent<'src> {
    /// Normalizes and interns the spelling.
    pub fn normalize(self) -> Ident {
        Ident {
            name: normalize(self.text),
            span: self.span,
        }
    }
}

/// A normalized identifier with the span of its original spelling.
///
/// Two identifiers compare equal when their normalized names and spans do;
/// use [`Ident::name`] to compare names alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ident {
    /// Interned NFKC form of the spelling.
    pub name: Symbol,
    /// Source range of the raw spelling.
    pub span: Span,
}

impl Ident {
    /// Returns the normalized name as a string.
    pub fn as_str(&self) -> &'static str {
        self.name.as_str()
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token types produced by the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// Identifier, already normalized.
    Ident(Ident),
    /// Decimal integer literal.
    Number(u64),
    /// End of a source line.
    Newline,

    /// `=`
    Eq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `.`
    Dot,

    /// ASCII character that starts no token. Reported to the handler.
    Invalid(char),
    /// End of input.
    Eof,
}

impl Token {
    /// Returns the identifier if this is an identifier token.
    pub fn as_ident(&self) -> Option<&Ident> {
        match self {
            Token::Ident(ident) => Some(ident),
            _ => None,
        }
    }

    /// Returns true for the token that ends a line.
    pub fn is_newline(&self) -> bool {
        matches!(self, Token::Newline)
    }

    /// Short name of the token kind, used by machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Ident(_) => "ident",
            Token::Number(_) => "number",
            Token::Newline => "newline",
            Token::Eq
            | Token::Plus
            | Token::Minus
            | Token::Star
            | Token::Slash
            | Token::LParen
            | Token::RParen
            | Token::Comma
            | Token::Colon
            | Token::Dot => "punct",
            Token::Invalid(_) => "invalid",
            Token::Eof => "eof",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(ident) => write!(f, "{}", ident),
            Token::Number(n) => write!(f, "{}", n),
            Token::Newline => write!(f, "\\n"),
            Token::Eq => write!(f, "="),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Colon => write!(f, ":"),
            Token::Dot => write!(f, "."),
            Token::Invalid(c) => write!(f, "{}", c.escape_debug()),
            Token::Eof => write!(f, "<eof>"),
        }
    }
}

/// A token together with the span it was lexed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spanned {
    /// The token.
    pub token: Token,
    /// Where it came from.
    pub span: Span,
}

impl Spanned {
    /// Pairs a token with its span.
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}
