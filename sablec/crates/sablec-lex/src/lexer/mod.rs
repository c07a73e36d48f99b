//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier scanning and normalization
//! - `number` - Integer literal lexing
//! - `comment` - Whitespace and comment skipping

mod comment;
mod core;
mod identifier;
mod number;

pub use core::{LexOptions, Lexer};
