//! Error types for the lexer.
//!
//! Identifier scanning fails in exactly one way: a code point in an
//! identifier-mandatory position is neither a start nor a continue
//! character. Everything else the lexer dislikes is reported to the
//! diagnostic handler and lexing goes on.

use std::sync::Arc;

use sablec_util::{Diagnostic, DiagnosticCode, SourcePos, Span, E_LEXER_INVALID_IDENT_CHAR};
use thiserror::Error;

/// The kinds of fatal lexer error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A code point that cannot appear in an identifier where one must.
    #[error("invalid character in identifier")]
    InvalidIdentifierCharacter,
}

impl LexErrorKind {
    /// The fixed message text of this kind.
    pub const fn message(self) -> &'static str {
        match self {
            LexErrorKind::InvalidIdentifierCharacter => "invalid character in identifier",
        }
    }
}

/// File name and 1-based line of an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorPosition {
    /// Name of the source file.
    pub file: Arc<str>,
    /// Line of the offending character.
    pub line: u32,
}

/// A positioned lexer error.
///
/// Renders as `"{message} ({file}, line {line})"`:
///
/// ```
/// use sablec_lex::tokenize::{tokenize, RecoveryPolicy};
/// use sablec_util::{Handler, SourceFile};
///
/// let file = SourceFile::new(0, "badsyntax_3131.sb", "ok = 1\n€ = 2\n");
/// let err = tokenize(&file, &Handler::new(), RecoveryPolicy::Abort).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "invalid character in identifier (badsyntax_3131.sb, line 2)"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} ({}, line {})", .position.file, .position.line)]
pub struct LexError {
    kind: LexErrorKind,
    position: ErrorPosition,
    offending: char,
    span: Span,
}

impl LexError {
    /// Creates an invalid-identifier-character error for `offending` at `pos`.
    pub fn invalid_identifier_char(
        file: Arc<str>,
        offending: char,
        pos: SourcePos,
        span: Span,
    ) -> Self {
        Self {
            kind: LexErrorKind::InvalidIdentifierCharacter,
            position: ErrorPosition {
                file,
                line: pos.line,
            },
            offending,
            span,
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> LexErrorKind {
        self.kind
    }

    /// Returns the message without position.
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Returns the file/line pair.
    pub fn position(&self) -> &ErrorPosition {
        &self.position
    }

    /// Returns the file name.
    pub fn file(&self) -> &str {
        &self.position.file
    }

    /// Returns the 1-based line.
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// Returns the rejected code point.
    pub fn offending(&self) -> char {
        self.offending
    }

    /// Returns the span of the rejected code point.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self.kind {
            LexErrorKind::InvalidIdentifierCharacter => E_LEXER_INVALID_IDENT_CHAR,
        }
    }

    /// Converts the error into a diagnostic for a recovering caller.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.message(), self.span)
            .with_code(self.code())
            .with_note(format!(
                "U+{:04X} cannot appear in an identifier",
                self.offending as u32
            ))
    }
}

/// Result alias for fallible lexer operations.
pub type LexResult<T> = Result<T, LexError>;
