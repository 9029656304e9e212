//! Stencilt CLI - A command-line tool for Stencil templates.
//!
//! This is the main entry point for the stencilt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::CheckCommand as CheckHandler,
    init::InitCommand as InitHandler,
    tokens::TokensCommand as TokensHandler,
    run_check, run_init, run_tokens, CheckArgs, InitArgs, TokensArgs,
};
use commands::traits::{Command, CommandDescription, CommandResult};
use config::Config;
use error::{Result, StencilError};

/// Stencilt - inspect and check Stencil templates
///
/// Stencilt tokenizes templates written in the `{{ }}` / `{% %}` / `{# #}`
/// template language, dumps their token streams, and reports lexical errors.
#[derive(Parser, Debug)]
#[command(name = "stencilt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A command-line tool for Stencil templates", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "STENCILT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "STENCILT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "STENCILT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the stencilt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of templates
    Tokens(TokensCommand),

    /// Check that templates tokenize cleanly
    Check(CheckCommand),

    /// Write a default stencilt.toml
    Init(InitCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
#[command(after_help = TokensHandler::help())]
struct TokensCommand {
    /// Templates to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
#[command(after_help = CheckHandler::help())]
struct CheckCommand {
    /// Template files or directories to check
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Extension to pick up when walking directories (repeatable)
    #[arg(short, long = "extension")]
    extensions: Vec<String>,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
#[command(after_help = InitHandler::help())]
struct InitCommand {
    /// Directory to initialize (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing configuration file
    #[arg(short, long)]
    force: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

/// Initializes logging, loads configuration, and runs the selected command.
fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;
    let color = !cli.no_color && std::io::stderr().is_terminal();

    execute_command(cli.command, verbose, color, config)
}

/// Initialize the logging system.
///
/// Events go to stderr so token dumps on stdout stay machine-readable.
/// `RUST_LOG` overrides the level picked from `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

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
        .map_err(|e| StencilError::Config(format!("Failed to initialize logging: {}", e)))?;

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
fn execute_command(command: Commands, verbose: bool, color: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, verbose, color, config),
        Commands::Check(args) => execute_check(args, verbose, color, config),
        Commands::Init(args) => execute_init(args, verbose),
    }
}

fn log_result<C: Command + CommandDescription>(result: &CommandResult) {
    debug!(
        command = C::name(),
        description = C::description(),
        templates = result.templates,
        failed = result.failed,
        warnings = result.warnings.len(),
        elapsed_ms = result.elapsed_ms,
        "command finished"
    );
}

fn execute_tokens(args: TokensCommand, verbose: bool, color: bool, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        verbose,
        files: args.files,
        format: args.format,
        color,
        config: config.tokens,
    };
    let result = run_tokens(tokens_args)?;
    log_result::<TokensHandler>(&result);
    Ok(())
}

fn execute_check(args: CheckCommand, verbose: bool, color: bool, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        verbose,
        paths: args.paths,
        extensions: args.extensions,
        color,
        config: config.check,
    };
    let result = run_check(check_args)?;
    log_result::<CheckHandler>(&result);
    Ok(())
}

fn execute_init(args: InitCommand, verbose: bool) -> Result<()> {
    let init_args = InitArgs {
        verbose,
        force: args.force,
        path: args.path,
    };
    let written = run_init(init_args)?;
    debug!(command = InitHandler::name(), path = %written.display(), "command finished");
    Ok(())
}
