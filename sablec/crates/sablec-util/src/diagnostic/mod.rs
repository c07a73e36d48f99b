//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! The lexer reports recoverable problems (stray characters, overflowing
//! literals, errors turned into diagnostics by a recovering caller) to a
//! [`Handler`], which collects them for the driver to print.
//!
//! # Examples
//!
//! ```
//! use sablec_util::diagnostic::{Diagnostic, DiagnosticCode, Handler};
//! use sablec_util::span::Span;
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(
//!     Diagnostic::error("unexpected character `$`", Span::DUMMY)
//!         .with_code(DiagnosticCode::E0002),
//! );
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

mod codes;

pub use codes::DiagnosticCode;
pub use codes::{
    E_LEXER_INVALID_IDENT_CHAR, E_LEXER_INVALID_NUMBER, E_LEXER_UNEXPECTED_CHAR,
    W_NORMALIZED_IDENT,
};

use crate::span::{SourceMap, Span};
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use sablec_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// A problem that makes the input unusable
    Error,
    /// A suspicious construct that still lexes
    Warning,
    /// Additional information about a diagnostic
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Render the diagnostic with its source excerpt
    ///
    /// Falls back to the bare header when the span's file is not in `map`.
    pub fn render(&self, map: &SourceMap) -> String {
        let mut out = self.to_string();
        if let Ok(excerpt) = map.format_span(self.span) {
            out.push('\n');
            out.push_str(&excerpt);
        }
        for note in &self.notes {
            out.push_str("\n  = note: ");
            out.push_str(note);
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Handler for collecting and reporting diagnostics
///
/// Single-threaded by construction: each lexer run owns one handler.
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Report an error with a code
    pub fn error(&self, code: DiagnosticCode, message: impl Into<String>, span: Span) {
        self.emit_diagnostic(Diagnostic::error(message, span).with_code(code));
    }

    /// Report a warning with a code
    pub fn warning(&self, code: DiagnosticCode, message: impl Into<String>, span: Span) {
        self.emit_diagnostic(Diagnostic::warning(message, span).with_code(code));
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count_level(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count_level(Level::Warning)
    }

    fn count_level(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
