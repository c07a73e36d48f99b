//! Diagnostic codes for categorizing front-end errors and warnings.
//!
//! # Examples
//!
//! ```
//! use sablec_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E0001;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1);
//! assert_eq!(code.to_string(), "E0001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes print as `{prefix}{number:04}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Invalid character in identifier
    pub const E0001: DiagnosticCode = DiagnosticCode::new("E", 1);
    /// Unexpected character outside any token
    pub const E0002: DiagnosticCode = DiagnosticCode::new("E", 2);
    /// Integer literal does not fit in 64 bits
    pub const E0003: DiagnosticCode = DiagnosticCode::new("E", 3);

    /// Identifier was rewritten by normalization
    pub const W0001: DiagnosticCode = DiagnosticCode::new("W", 1);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

/// Lexer error: invalid character in identifier
pub const E_LEXER_INVALID_IDENT_CHAR: DiagnosticCode = DiagnosticCode::E0001;
/// Lexer error: unexpected character
pub const E_LEXER_UNEXPECTED_CHAR: DiagnosticCode = DiagnosticCode::E0002;
/// Lexer error: integer literal overflow
pub const E_LEXER_INVALID_NUMBER: DiagnosticCode = DiagnosticCode::E0003;
/// Lexer warning: identifier spelled with compatibility characters
pub const W_NORMALIZED_IDENT: DiagnosticCode = DiagnosticCode::W0001;
