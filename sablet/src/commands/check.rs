//! Check command implementation.
//!
//! Lexes many files in parallel and reports every problem found. Each file
//! gets its own source map and diagnostic handler; only the symbol table is
//! shared between workers.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use sablec_lex::{tokenize_with, LexOptions, RecoveryPolicy, Token};
use sablec_util::{Handler, Level, SourceMap};
use tracing::{debug, info};

use crate::commands::common::{lex_options, load_source, recovery_policy, require_inputs};
use crate::config::{Config, RecoveryMode};
use crate::error::{Result, SabletError};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Source files to check.
    pub files: Vec<PathBuf>,
    /// Number of worker threads (default: from config).
    pub jobs: Option<u32>,
    /// Recovery override.
    pub recovery: Option<RecoveryMode>,
}

/// Outcome of checking one file.
#[derive(Debug, Default)]
struct FileReport {
    /// Rendered diagnostics, in source order.
    messages: Vec<String>,
    errors: usize,
    warnings: usize,
    identifiers: usize,
}

/// Check command handler.
struct CheckCommand {
    args: CheckArgs,
    options: LexOptions,
    policy: RecoveryPolicy,
    jobs: u32,
}

impl CheckCommand {
    fn new(args: CheckArgs, config: &Config) -> Self {
        Self {
            options: lex_options(&config.lex),
            policy: recovery_policy(args.recovery, &config.lex),
            jobs: args.jobs.unwrap_or(config.check.jobs),
            args,
        }
    }

    fn run(&self) -> Result<()> {
        require_inputs(&self.args.files)?;
        if self.jobs == 0 {
            return Err(SabletError::Validation(
                "--jobs must be at least 1".to_string(),
            ));
        }

        let start_time = Instant::now();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs as usize)
            .build()
            .map_err(|e| SabletError::Config(format!("Failed to start worker pool: {}", e)))?;

        let reports: Vec<Result<FileReport>> = pool.install(|| {
            self.args
                .files
                .par_iter()
                .map(|path| check_file(path, self.options, self.policy))
                .collect()
        });

        let mut failed_files = 0;
        let mut total_errors = 0;
        let mut total_warnings = 0;

        for (path, report) in self.args.files.iter().zip(reports) {
            match report {
                Ok(report) => {
                    for message in &report.messages {
                        eprintln!("{}", message);
                    }
                    if report.errors == 0 {
                        println!("{}: ok ({} identifiers)", path.display(), report.identifiers);
                    } else {
                        failed_files += 1;
                    }
                    total_errors += report.errors;
                    total_warnings += report.warnings;
                },
                Err(e) => {
                    eprintln!("error: {}", e);
                    failed_files += 1;
                },
            }
        }

        println!(
            "checked {} file(s): {} error(s), {} warning(s)",
            self.args.files.len(),
            total_errors,
            total_warnings
        );
        info!(
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            jobs = self.jobs,
            "check finished"
        );

        if failed_files > 0 {
            return Err(SabletError::CommandExecution(format!(
                "{} file(s) failed to check",
                failed_files
            )));
        }
        Ok(())
    }
}

/// Lex one file and collect its diagnostics.
fn check_file(path: &Path, options: LexOptions, policy: RecoveryPolicy) -> Result<FileReport> {
    let mut map = SourceMap::new();
    let file = load_source(&mut map, path)?;
    let handler = Handler::new();
    let mut report = FileReport::default();

    match tokenize_with(&file, &handler, options, policy) {
        Ok(tokens) => {
            report.identifiers = tokens
                .iter()
                .filter(|t| matches!(t.token, Token::Ident(_)))
                .count();
        },
        Err(err) => {
            // Abort policy: the error is the last thing in this file.
            handler.emit_diagnostic(err.to_diagnostic().with_note(err.to_string()));
        },
    }

    for diagnostic in handler.take() {
        match diagnostic.level {
            Level::Error => report.errors += 1,
            Level::Warning => report.warnings += 1,
            Level::Note => {},
        }
        report.messages.push(diagnostic.render(&map));
    }

    debug!(
        path = %path.display(),
        errors = report.errors,
        warnings = report.warnings,
        "checked file"
    );
    Ok(report)
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: &Config) -> Result<()> {
    CheckCommand::new(args, config).run()
}
