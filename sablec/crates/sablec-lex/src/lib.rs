//! sablec-lex - Lexical Analyzer for the Sable Language
//!
//! This crate turns Sable source text into tokens. Its core is identifier
//! handling: every code point of a prospective identifier is classified
//! against the Unicode identifier properties, and every accepted identifier
//! is normalized (NFKC) and interned, so spellings that differ only by
//! compatibility characters name the same thing.
//!
//! # Example Usage
//!
//! ```
//! use sablec_lex::{Lexer, Token};
//! use sablec_util::{Handler, SourceFile, Symbol};
//!
//! let file = SourceFile::new(0, "main.sb", "µ = 1");
//! let handler = Handler::new();
//! let mut lexer = Lexer::new(&file, &handler);
//!
//! let Ok(Token::Ident(name)) = lexer.next_token() else {
//!     panic!("expected an identifier");
//! };
//! assert_eq!(name.name, Symbol::intern("μ"));
//! assert_eq!(lexer.next_token().unwrap(), Token::Eq);
//! ```
//!
//! # Module Structure
//!
//! - [`unicode`] - code point classification
//! - [`normalize`] - NFKC normalization of identifier spellings
//! - [`lexer`] - the lexer, including the identifier scanner
//! - [`token`] - token definitions
//! - [`error`] - the positioned [`LexError`]
//! - [`tokenize`] - whole-file tokenization with a recovery policy
//! - [`namespace`] - bindings keyed by normalized name
//! - [`cursor`] - character cursor for source traversal
//!
//! # Token Categories
//!
//! - **Identifiers**: a start character followed by continue characters,
//!   per Unicode `XID_Start` / `XID_Continue`
//! - **Integers**: `42`, `1_000_000`
//! - **Punctuation**: `=`, `+`, `-`, `*`, `/`, `(`, `)`, `,`, `:`, `.`
//! - **Newline**: end of a source line
//! - **Invalid**: stray ASCII characters, reported and skipped
//! - **EOF**: end of input
//!
//! `#` starts a comment that runs to the end of the line.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod namespace;
pub mod normalize;
pub mod token;
pub mod tokenize;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{ErrorPosition, LexError, LexErrorKind, LexResult};
pub use lexer::{LexOptions, Lexer};
pub use namespace::{bind_assignments, Namespace};
pub use normalize::{normalize, normalize_str};
pub use token::{Ident, RawIdent, Spanned, Token};
pub use tokenize::{tokenize, tokenize_with, RecoveryPolicy};
pub use unicode::{classify, is_ident_continue, is_ident_start, CharClass};
