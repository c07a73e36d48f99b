//! Names command implementation.
//!
//! Binds the `name = number` lines of a file and prints the resulting
//! namespace, or resolves a single spelling against it.

use std::path::PathBuf;

use sablec_lex::{bind_assignments, tokenize_with, Namespace};
use sablec_util::{Handler, SourceMap};
use tracing::debug;

use crate::commands::common::{lex_options, load_source, print_diagnostics, recovery_policy};
use crate::config::{Config, RecoveryMode};
use crate::error::{Result, SabletError};

/// Arguments for the names command.
#[derive(Debug, Clone, Default)]
pub struct NamesArgs {
    /// Source file to bind.
    pub file: PathBuf,
    /// Spelling to look up instead of listing everything.
    pub lookup: Option<String>,
    /// Recovery override.
    pub recovery: Option<RecoveryMode>,
}

/// Build the namespace for `args.file`.
fn bind_file(args: &NamesArgs, config: &Config) -> Result<Namespace<u64>> {
    let mut map = SourceMap::new();
    let file = load_source(&mut map, &args.file)?;
    let handler = Handler::new();

    let result = tokenize_with(
        &file,
        &handler,
        lex_options(&config.lex),
        recovery_policy(args.recovery, &config.lex),
    );
    print_diagnostics(&handler.take(), &map);

    let namespace = bind_assignments(&result?);
    debug!(file = file.name(), bindings = namespace.len(), "bound names");
    Ok(namespace)
}

/// Format every binding as `name = value`, in binding order.
fn listing(namespace: &Namespace<u64>) -> Vec<String> {
    namespace
        .iter()
        .map(|(name, value)| format!("{} = {}", name, value))
        .collect()
}

/// Run the names command.
pub fn run_names(args: NamesArgs, config: &Config) -> Result<()> {
    let namespace = bind_file(&args, config)?;

    match &args.lookup {
        Some(spelling) => match namespace.resolve(spelling) {
            Some(value) => println!("{}", value),
            None => {
                return Err(SabletError::CommandExecution(format!(
                    "name `{}` is not bound in {}",
                    spelling,
                    args.file.display()
                )))
            },
        },
        None => {
            for line in listing(&namespace) {
                println!("{}", line);
            }
        },
    }
    Ok(())
}
