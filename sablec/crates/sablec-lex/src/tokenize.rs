//! Whole-file tokenization with a recovery policy.

use std::fmt;
use std::str::FromStr;

use sablec_util::{Handler, SourceFile};
use tracing::{debug, debug_span};

use crate::error::LexResult;
use crate::lexer::{LexOptions, Lexer};
use crate::token::{Spanned, Token};

/// What [`tokenize`] does when an identifier scan fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RecoveryPolicy {
    /// Return the first error.
    #[default]
    Abort,
    /// Report each error as an `E0001` diagnostic, drop the rest of its
    /// line, and keep going.
    SkipLine,
}

impl RecoveryPolicy {
    /// The spelling used in configuration files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            RecoveryPolicy::Abort => "abort",
            RecoveryPolicy::SkipLine => "skip-line",
        }
    }
}

impl fmt::Display for RecoveryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecoveryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abort" => Ok(RecoveryPolicy::Abort),
            "skip-line" => Ok(RecoveryPolicy::SkipLine),
            other => Err(format!(
                "unknown recovery policy `{}` (expected `abort` or `skip-line`)",
                other
            )),
        }
    }
}

/// Lexes all of `file`.
///
/// The returned tokens end with `Token::Eof`. With
/// [`RecoveryPolicy::SkipLine`] the result is always `Ok`, and the lines
/// that failed contribute only their newline.
///
/// # Example
///
/// ```
/// use sablec_lex::tokenize::{tokenize, RecoveryPolicy};
/// use sablec_lex::Token;
/// use sablec_util::{Handler, SourceFile};
///
/// let file = SourceFile::new(0, "m.sb", "µ = 1\n€ = 2\nz = 3\n");
/// let handler = Handler::new();
/// let tokens = tokenize(&file, &handler, RecoveryPolicy::SkipLine).unwrap();
///
/// assert_eq!(handler.error_count(), 1);
/// assert_eq!(tokens.last().map(|t| t.token), Some(Token::Eof));
/// ```
pub fn tokenize(
    file: &SourceFile,
    handler: &Handler,
    policy: RecoveryPolicy,
) -> LexResult<Vec<Spanned>> {
    tokenize_with(file, handler, LexOptions::default(), policy)
}

/// [`tokenize`] with explicit lexer options.
pub fn tokenize_with(
    file: &SourceFile,
    handler: &Handler,
    options: LexOptions,
    policy: RecoveryPolicy,
) -> LexResult<Vec<Spanned>> {
    let _span = debug_span!("tokenize", file = file.name(), %policy).entered();

    let mut lexer = Lexer::with_options(file, handler, options);
    let mut tokens = Vec::new();

    loop {
        match lexer.next_spanned() {
            Ok(spanned) => {
                let done = spanned.token == Token::Eof;
                tokens.push(spanned);
                if done {
                    break;
                }
            },
            Err(err) => match policy {
                RecoveryPolicy::Abort => {
                    debug!(line = err.line(), "aborting on lexer error");
                    return Err(err);
                },
                RecoveryPolicy::SkipLine => {
                    debug!(line = err.line(), "skipping rest of line");
                    handler.emit_diagnostic(err.to_diagnostic());
                    lexer.skip_line();
                },
            },
        }
    }

    debug!(tokens = tokens.len(), "tokenized");
    Ok(tokens)
}
