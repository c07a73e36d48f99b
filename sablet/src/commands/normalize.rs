//! Normalize command implementation.
//!
//! Checks that each argument is exactly one identifier and prints its
//! normalized form.

use sablec_lex::{tokenize, RecoveryPolicy, Token};
use sablec_util::{Handler, SourceFile, Symbol};

use crate::commands::common::error_messages;
use crate::error::{Result, SabletError};

/// File name used in errors for command-line arguments.
const ARGUMENT_FILE_NAME: &str = "<argument>";

/// Arguments for the normalize command.
#[derive(Debug, Clone, Default)]
pub struct NormalizeArgs {
    /// Identifier spellings.
    pub words: Vec<String>,
    /// Also print the code points of the normalized form.
    pub codepoints: bool,
}

/// Normalize one word, which must lex as exactly one identifier.
fn normalize_word(word: &str) -> Result<Symbol> {
    let file = SourceFile::new(0, ARGUMENT_FILE_NAME, word);
    let tokens = tokenize(&file, &Handler::new(), RecoveryPolicy::Abort)?;

    match tokens.as_slice() {
        [first, eof] if eof.token == Token::Eof => match first.token {
            Token::Ident(ident) => Ok(ident.name),
            _ => Err(not_an_identifier(word)),
        },
        _ => Err(not_an_identifier(word)),
    }
}

fn not_an_identifier(word: &str) -> SabletError {
    SabletError::Validation(format!("`{}` {}", word, error_messages::NOT_AN_IDENTIFIER))
}

fn codepoints(s: &str) -> String {
    s.chars()
        .map(|c| format!("U+{:04X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run the normalize command.
pub fn run_normalize(args: NormalizeArgs) -> Result<()> {
    if args.words.is_empty() {
        return Err(SabletError::Validation(
            "No identifiers specified".to_string(),
        ));
    }

    for word in &args.words {
        let name = normalize_word(word)?;
        if args.codepoints {
            println!("{} -> {} [{}]", word, name, codepoints(name.as_str()));
        } else {
            println!("{} -> {}", word, name);
        }
    }
    Ok(())
}
