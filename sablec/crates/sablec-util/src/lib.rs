//! sablec-util - Core Utilities and Foundation Types
//!
//! Shared infrastructure for the Sable front end:
//!
//! - [`symbol`] - process-wide string interning; every normalized identifier
//!   becomes a 4-byte [`Symbol`]
//! - [`span`] - source positions, spans, source files and the source map
//! - [`diagnostic`] - diagnostics, codes, and the collecting [`Handler`]
//! - [`error`] - error types for the above
//!
//! # Examples
//!
//! ```
//! use sablec_util::{SourceMap, Symbol};
//!
//! let mut map = SourceMap::new();
//! let id = map.add_file("main.sb", "ä = 1");
//! assert_eq!(map.get(id).unwrap().line_count(), 1);
//!
//! assert_eq!(Symbol::intern("ä"), Symbol::intern("ä"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{
    Diagnostic, DiagnosticCode, Handler, Level, E_LEXER_INVALID_IDENT_CHAR,
    E_LEXER_INVALID_NUMBER, E_LEXER_UNEXPECTED_CHAR, W_NORMALIZED_IDENT,
};
pub use error::{SourceMapError, SourceMapResult, SymbolError, SymbolResult};
pub use span::{FileId, SourceFile, SourceMap, SourcePos, Span};
pub use symbol::Symbol;
