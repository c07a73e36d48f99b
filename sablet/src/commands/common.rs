//! Common types and utilities for sablet commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::ValueEnum;
use sablec_lex::{LexOptions, RecoveryPolicy};
use sablec_util::{Diagnostic, SourceFile, SourceMap};
use tracing::debug;

use crate::config::{LexConfig, RecoveryMode};
use crate::error::{Result, SabletError};

// ============================================================================
// Output Format
// ============================================================================

/// Output formats for token listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One token per line, tab separated.
    #[default]
    Text,
    /// One JSON document per input file.
    Json,
}

// ============================================================================
// Source Loading
// ============================================================================

/// Read a UTF-8 source file and register it in `map`.
///
/// The file is named by its path as given, so error positions read the same
/// way the user typed them.
pub fn load_source(map: &mut SourceMap, path: &Path) -> Result<Arc<SourceFile>> {
    let bytes = std::fs::read(path).map_err(|e| {
        SabletError::FileOperation(format!("{}: {}", path.display(), e))
    })?;
    let content = String::from_utf8(bytes).map_err(|_| {
        SabletError::FileOperation(format!(
            "{}: {}",
            path.display(),
            error_messages::NOT_UTF8
        ))
    })?;

    debug!(path = %path.display(), bytes = content.len(), "loaded source");
    let id = map.add_file(path.display().to_string(), content);
    map.get(id).ok_or_else(|| {
        SabletError::FileOperation(format!("{}: {}", path.display(), error_messages::NOT_REGISTERED))
    })
}

/// Fail with a validation error if no input files were given.
pub fn require_inputs(files: &[PathBuf]) -> Result<()> {
    if files.is_empty() {
        return Err(SabletError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// Lexer Settings
// ============================================================================

/// Lexer options from configuration.
pub fn lex_options(config: &LexConfig) -> LexOptions {
    LexOptions {
        warn_normalized: config.warn_normalized,
    }
}

/// Recovery policy from a command-line override or the configuration.
pub fn recovery_policy(flag: Option<RecoveryMode>, config: &LexConfig) -> RecoveryPolicy {
    flag.unwrap_or(config.recovery).into()
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Print diagnostics with source excerpts to stderr.
pub fn print_diagnostics(diagnostics: &[Diagnostic], map: &SourceMap) {
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic.render(map));
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when a source file is not UTF-8.
    pub const NOT_UTF8: &str = "source is not valid UTF-8";

    /// Error when a loaded file is missing from the source map.
    pub const NOT_REGISTERED: &str = "source file was not registered";

    /// Error when an argument is not exactly one identifier.
    pub const NOT_AN_IDENTIFIER: &str = "is not a single identifier";
}
