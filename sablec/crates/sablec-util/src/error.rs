//! Core error types for sablec-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for symbol table lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymbolError {
    /// Symbol index was never handed out by the interning table
    #[error("Symbol not found: index {index}")]
    NotFound { index: u32 },
}

/// Error type for source map operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// File not found in the source map
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        file_len: usize,
        span_start: usize,
        span_end: usize,
    },

    /// Span does not fall on character boundaries
    #[error("Span {start}..{end} splits a UTF-8 character")]
    NotCharBoundary { start: usize, end: usize },

    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },
}

/// Result type alias for symbol operations
pub type SymbolResult<T> = std::result::Result<T, SymbolError>;

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_error_display() {
        let err = SymbolError::NotFound { index: 7 };
        assert_eq!(err.to_string(), "Symbol not found: index 7");
    }

    #[test]
    fn test_source_map_error_display() {
        let err = SourceMapError::SpanOutOfBounds {
            file_len: 3,
            span_start: 1,
            span_end: 9,
        };
        assert_eq!(
            err.to_string(),
            "Span out of bounds: file has 3 bytes, span is 1..9"
        );
        assert_eq!(
            SourceMapError::InvalidLineNumber { line: 5, max_lines: 2 }.to_string(),
            "Invalid line number: 5 (file has 2 lines)"
        );
    }
}
