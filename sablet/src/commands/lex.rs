//! Lex command implementation.
//!
//! Prints the token stream of each input file, either as tab-separated text
//! or as one JSON document per file.

use std::io::{self, Write};
use std::path::PathBuf;

use sablec_lex::{tokenize_with, LexError, LexOptions, RecoveryPolicy, Spanned, Token};
use sablec_util::{Diagnostic, Handler, Level, SourceFile, SourceMap};
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::common::{
    lex_options, load_source, print_diagnostics, recovery_policy, require_inputs, OutputFormat,
};
use crate::config::{Config, RecoveryMode};
use crate::error::{Result, SabletError};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Source files to lex.
    pub files: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Recovery override.
    pub recovery: Option<RecoveryMode>,
    /// Print positions even if the configuration does not ask for them.
    pub spans: bool,
}

/// A token in JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    text: String,
    /// Source spelling, present when it differs from `text`.
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<&'a str>,
    line: u32,
    column: u32,
    start: usize,
    end: usize,
}

/// A diagnostic in JSON output.
#[derive(Debug, Serialize)]
struct DiagnosticRecord {
    level: String,
    code: Option<String>,
    message: String,
    line: u32,
    column: u32,
}

/// JSON output for one file.
#[derive(Debug, Serialize)]
struct FileRecord<'a> {
    file: &'a str,
    tokens: Vec<TokenRecord<'a>>,
    diagnostics: Vec<DiagnosticRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Lex command handler.
struct LexCommand {
    args: LexArgs,
    options: LexOptions,
    policy: RecoveryPolicy,
    show_spans: bool,
}

impl LexCommand {
    fn new(args: LexArgs, config: &Config) -> Self {
        Self {
            options: lex_options(&config.lex),
            policy: recovery_policy(args.recovery, &config.lex),
            show_spans: args.spans || config.lex.show_spans,
            args,
        }
    }

    fn run(&self) -> Result<()> {
        require_inputs(&self.args.files)?;

        let mut map = SourceMap::new();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut error_count = 0;

        for path in &self.args.files {
            let file = load_source(&mut map, path)?;
            let handler = Handler::new();
            let result = tokenize_with(&file, &handler, self.options, self.policy);
            let diagnostics = handler.take();
            error_count += diagnostics.iter().filter(|d| d.level == Level::Error).count();
            info!(file = file.name(), diagnostics = diagnostics.len(), "lexed");

            match self.args.format {
                OutputFormat::Text => {
                    if let Ok(tokens) = &result {
                        self.write_text(&mut out, &file, tokens)?;
                    }
                },
                OutputFormat::Json => {
                    let record = file_record(&file, &result, &diagnostics);
                    serde_json::to_writer(&mut out, &record)?;
                    writeln!(out)?;
                },
            }
            out.flush()?;

            print_diagnostics(&diagnostics, &map);
            result?;
        }

        if error_count > 0 {
            return Err(SabletError::CommandExecution(format!(
                "{} error(s) while lexing",
                error_count
            )));
        }
        Ok(())
    }

    fn write_text(&self, out: &mut impl Write, file: &SourceFile, tokens: &[Spanned]) -> Result<()> {
        for spanned in tokens {
            if spanned.token == Token::Eof {
                continue;
            }
            if self.show_spans {
                write!(out, "{}:{}\t", spanned.span.line(), spanned.span.column())?;
            }
            write!(out, "{}\t{}", spanned.token.kind(), spanned.token)?;
            if let Some(raw) = rewritten_spelling(file, spanned) {
                write!(out, "\t(from {})", raw)?;
            }
            writeln!(out)?;
        }
        debug!(file = file.name(), count = tokens.len(), "wrote tokens");
        Ok(())
    }
}

/// Source spelling of an identifier that normalization changed.
fn rewritten_spelling<'a>(file: &'a SourceFile, spanned: &Spanned) -> Option<&'a str> {
    let ident = spanned.token.as_ident()?;
    let raw = file.snippet(spanned.span).ok()?;
    (raw != ident.as_str()).then_some(raw)
}

fn file_record<'a>(
    file: &'a SourceFile,
    result: &std::result::Result<Vec<Spanned>, LexError>,
    diagnostics: &[Diagnostic],
) -> FileRecord<'a> {
    let tokens = match result {
        Ok(tokens) => tokens
            .iter()
            .map(|spanned| TokenRecord {
                kind: spanned.token.kind(),
                text: spanned.token.to_string(),
                raw: rewritten_spelling(file, spanned),
                line: spanned.span.line(),
                column: spanned.span.column(),
                start: spanned.span.start(),
                end: spanned.span.end(),
            })
            .collect(),
        Err(_) => Vec::new(),
    };

    FileRecord {
        file: file.name(),
        tokens,
        diagnostics: diagnostics
            .iter()
            .map(|d| DiagnosticRecord {
                level: d.level.to_string(),
                code: d.code.map(|c| c.to_string()),
                message: d.message.clone(),
                line: d.span.line(),
                column: d.span.column(),
            })
            .collect(),
        error: result.as_ref().err().map(ToString::to_string),
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs, config: &Config) -> Result<()> {
    LexCommand::new(args, config).run()
}
