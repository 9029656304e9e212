//! Tokens command implementation.
//!
//! Dumps the token stream of one or more templates, either as plain text
//! lines or as JSON.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use stencil_lex::{Token, Value};
use tracing::{debug, info};

use crate::commands::common::{error_messages, read_template, report, tokenize_template, OutputFormat};
use crate::commands::traits::{Command, CommandDescription, CommandResult};
use crate::config::TokensConfig;
use crate::error::{Result, StencilError};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Templates to tokenize.
    pub files: Vec<PathBuf>,
    /// Output format override.
    pub format: Option<String>,
    /// Colorize diagnostics.
    pub color: bool,
    /// Settings from the configuration file.
    pub config: TokensConfig,
}

/// One token as it appears in JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord {
    kind: &'static str,
    row: u32,
    column: u32,
    value: serde_json::Value,
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        Self {
            kind: token.kind.name(),
            row: token.location.row,
            column: token.location.column,
            value: json_value(&token.value),
        }
    }
}

/// The tokens of one file, used when several files are dumped as JSON.
#[derive(Debug, Serialize)]
struct FileTokens {
    file: String,
    tokens: Vec<TokenRecord>,
}

fn json_value(value: &Value) -> serde_json::Value {
    match value {
        Value::None => serde_json::Value::Null,
        Value::Integer(n) => (*n).into(),
        Value::Double(n) => (*n).into(),
        Value::Text(s) => s.as_str().into(),
        Value::Boolean(b) => (*b).into(),
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Execute the command, writing the dump to `out`.
    pub fn run(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let start_time = Instant::now();
        self.validate_input_files()?;
        let format = self.determine_output_format()?;
        debug!(?format, files = self.args.files.len(), "dumping tokens");

        let mut documents = Vec::new();
        let mut files_failed = 0;

        for path in &self.args.files {
            let tokens = read_template(path, u64::MAX)
                .and_then(|source| tokenize_template(path, &source));
            match tokens {
                Ok(tokens) => documents.push((path.as_path(), tokens)),
                Err(diagnostic) => {
                    files_failed += 1;
                    report(&diagnostic, path, self.args.color);
                },
            }
        }

        match format {
            OutputFormat::Text => self.write_text(out, &documents)?,
            OutputFormat::Json => self.write_json(out, &documents)?,
        }
        out.flush()?;

        let elapsed = start_time.elapsed();
        if self.args.verbose {
            info!(
                files = self.args.files.len(),
                failed = files_failed,
                elapsed_ms = elapsed.as_millis() as u64,
                "tokenized templates"
            );
        }

        let result = CommandResult::new(self.args.files.len())
            .with_failed(files_failed)
            .with_elapsed_ms(elapsed.as_millis() as u64);
        Self::check_for_failures(&result)?;
        Ok(result)
    }

    fn check_for_failures(result: &CommandResult) -> Result<()> {
        if !result.is_success() {
            return Err(StencilError::CommandExecution(format!(
                "{} {}",
                result.failed,
                error_messages::FILES_FAILED
            )));
        }
        Ok(())
    }

    fn validate_input_files(&self) -> Result<()> {
        if self.args.files.is_empty() {
            return Err(StencilError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }
        Ok(())
    }

    fn determine_output_format(&self) -> Result<OutputFormat> {
        if let Some(ref name) = self.args.format {
            return OutputFormat::parse(name).ok_or_else(|| {
                StencilError::Validation(format!("{}: {}", error_messages::UNKNOWN_FORMAT, name))
            });
        }

        OutputFormat::parse(&self.args.config.format).ok_or_else(|| {
            StencilError::Config(format!(
                "{}: {}",
                error_messages::INVALID_CONFIG_FORMAT,
                self.args.config.format
            ))
        })
    }

    /// A `==> file <==` header precedes each file when there are several.
    fn write_text(&self, out: &mut dyn Write, documents: &[(&Path, Vec<Token>)]) -> Result<()> {
        let headers = self.args.files.len() > 1;
        for (path, tokens) in documents {
            if headers {
                writeln!(out, "==> {} <==", path.display())?;
            }
            for token in tokens {
                writeln!(out, "{}", token)?;
            }
        }
        Ok(())
    }

    /// A single file is dumped as a bare array of tokens, several files as
    /// an array of `{file, tokens}` objects.
    fn write_json(&self, out: &mut dyn Write, documents: &[(&Path, Vec<Token>)]) -> Result<()> {
        if self.args.files.len() == 1 {
            let records: Vec<TokenRecord> = documents
                .iter()
                .flat_map(|(_, tokens)| tokens.iter().map(TokenRecord::from))
                .collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
        } else {
            let files: Vec<FileTokens> = documents
                .iter()
                .map(|(path, tokens)| FileTokens {
                    file: path.display().to_string(),
                    tokens: tokens.iter().map(TokenRecord::from).collect(),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &files)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = CommandResult;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run(&mut out)
    }

    fn name() -> &'static str {
        "tokens"
    }
}

impl CommandDescription for TokensCommand {
    fn description() -> &'static str {
        "Print the token stream of templates"
    }

    fn help() -> &'static str {
        "Tokenizes each template and prints one `row:column TOK_KIND value` \
         line per token, or a JSON array with --format json."
    }
}

/// Run the tokens command against stdout.
pub fn run_tokens(args: TokensArgs) -> Result<CommandResult> {
    TokensCommand::new(args).execute()
}
