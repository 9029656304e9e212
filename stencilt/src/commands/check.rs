//! Check command implementation.
//!
//! Tokenizes every template under the given paths and reports each one
//! that fails as a diagnostic.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use stencil_util::Handler;
use tracing::{debug, info};

use crate::commands::common::{
    collect_templates, error_messages, output_messages, read_template, report, tokenize_template,
};
use crate::commands::traits::{Command, CommandDescription, CommandResult};
use crate::config::CheckConfig;
use crate::error::{Result, StencilError};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Files and directories to check.
    pub paths: Vec<PathBuf>,
    /// Extensions to pick up in directories; empty means the configured ones.
    pub extensions: Vec<String>,
    /// Colorize diagnostics.
    pub color: bool,
    /// Settings from the configuration file.
    pub config: CheckConfig,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Execute the command, writing the summary line to `out`.
    pub fn run(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let start_time = Instant::now();
        let extensions = self.effective_extensions();
        let (files, warnings) = collect_templates(&self.args.paths, extensions)?;
        debug!(files = files.len(), ?extensions, "checking templates");

        for warning in &warnings {
            eprintln!("{} {}", output_messages::WARNING, warning);
        }

        let handler = Handler::new();
        for path in &files {
            if self.args.verbose {
                eprintln!("{} {}", output_messages::CHECKING_FILE, path.display());
            }

            let checked = read_template(path, self.args.config.max_file_size)
                .and_then(|source| tokenize_template(path, &source));
            if let Err(diagnostic) = checked {
                report(&diagnostic, path, self.args.color);
                handler.emit_diagnostic(diagnostic);
            }
        }

        let elapsed = start_time.elapsed();
        let result = warnings.into_iter().fold(
            CommandResult::new(files.len())
                .with_failed(handler.error_count())
                .with_elapsed_ms(elapsed.as_millis() as u64),
            CommandResult::with_warning,
        );
        writeln!(
            out,
            "checked {} template(s): {} ok, {} failed",
            result.templates,
            result.ok(),
            result.failed
        )?;

        if self.args.verbose {
            eprintln!(
                "{} {:.2}s",
                output_messages::CHECK_COMPLETED,
                elapsed.as_secs_f64()
            );
        }
        info!(files = result.templates, failed = result.failed, "check finished");

        if !result.is_success() {
            return Err(StencilError::CommandExecution(format!(
                "{} {}",
                result.failed,
                error_messages::FILES_FAILED
            )));
        }
        Ok(result)
    }

    fn effective_extensions(&self) -> &[String] {
        if self.args.extensions.is_empty() {
            &self.args.config.extensions
        } else {
            &self.args.extensions
        }
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
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
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Check that templates tokenize cleanly"
    }

    fn help() -> &'static str {
        "Tokenizes each file, walking directories for templates with the \
         configured extensions, and reports every lexical error with the \
         offending source line."
    }
}

/// Run the check command against stdout.
pub fn run_check(args: CheckArgs) -> Result<CommandResult> {
    CheckCommand::new(args).execute()
}
