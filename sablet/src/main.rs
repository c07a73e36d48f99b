//! Sablet CLI - command-line front end for the Sable lexer.
//!
//! This is the main entry point for the sablet CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{
    run_check, run_lex, run_names, run_normalize, CheckArgs, LexArgs, NamesArgs, NormalizeArgs,
};
use config::{Config, RecoveryMode};
use error::{Result, SabletError};

/// Sablet - inspect how Sable source is tokenized
///
/// Sablet lexes Sable source files, showing how identifiers are classified
/// and normalized, and reports invalid identifier characters.
#[derive(Parser, Debug)]
#[command(name = "sablet")]
#[command(author = "Sable Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line front end for the Sable lexer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SABLET_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SABLET_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SABLET_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the sablet CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of source files
    Lex(LexCommand),

    /// Lex source files in parallel and report every problem
    Check(CheckCommand),

    /// Print the `name = number` bindings of a source file
    Names(NamesCommand),

    /// Print the normalized form of identifiers
    Normalize(NormalizeCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source files to lex
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// What to do on an invalid identifier character (default: from config)
    #[arg(short, long, value_enum)]
    recovery: Option<RecoveryMode>,

    /// Print line and column for every token
    #[arg(short, long)]
    spans: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long)]
    jobs: Option<u32>,

    /// What to do on an invalid identifier character (default: from config)
    #[arg(short, long, value_enum)]
    recovery: Option<RecoveryMode>,
}

/// Arguments for the names subcommand.
#[derive(Parser, Debug)]
struct NamesCommand {
    /// Source file to bind
    file: PathBuf,

    /// Resolve one spelling instead of listing all bindings
    #[arg(short, long)]
    lookup: Option<String>,

    /// What to do on an invalid identifier character (default: from config)
    #[arg(short, long, value_enum)]
    recovery: Option<RecoveryMode>,
}

/// Arguments for the normalize subcommand.
#[derive(Parser, Debug)]
struct NormalizeCommand {
    /// Identifier spellings
    #[arg(required = true)]
    words: Vec<String>,

    /// Also print the code points of each normalized name
    #[arg(long)]
    codepoints: bool,
}

/// Main entry point for the sablet CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler. Errors are printed to
/// stderr and turn into a failing exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || config.verbose, cli.no_color)?;
    debug!(?config, "configuration loaded");

    // Execute the selected command
    execute_command(cli.command, &config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
/// `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| SabletError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Lex(args) => run_lex(
            LexArgs {
                files: args.files,
                format: args.format,
                recovery: args.recovery,
                spans: args.spans,
            },
            config,
        ),
        Commands::Check(args) => run_check(
            CheckArgs {
                files: args.files,
                jobs: args.jobs,
                recovery: args.recovery,
            },
            config,
        ),
        Commands::Names(args) => run_names(
            NamesArgs {
                file: args.file,
                lookup: args.lookup,
                recovery: args.recovery,
            },
            config,
        ),
        Commands::Normalize(args) => run_normalize(NormalizeArgs {
            words: args.words,
            codepoints: args.codepoints,
        }),
    }
}
