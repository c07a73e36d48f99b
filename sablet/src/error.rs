//! Error handling module for the sablet CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use sablec_lex::LexError;
use thiserror::Error;

/// Main error type for the sablet CLI application.
#[derive(Error, Debug)]
pub enum SabletError {
    /// Error when a required configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command ran but its input had problems.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// A source file stopped lexing at an invalid identifier character.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using SabletError.
pub type Result<T> = std::result::Result<T, SabletError>;
