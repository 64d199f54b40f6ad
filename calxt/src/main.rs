//! Calxt CLI - inspect how the calx lexer tokenizes expressions.
//!
//! This is the main entry point for the calxt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::{Input, OutputFormat, RenderOptions};
use commands::{run_config, run_peek, run_tokens, ConfigArgs, PeekArgs, TokensArgs};
use config::Config;
use error::{CalxtError, Result};

/// Calxt - inspect how the calx lexer tokenizes expressions
#[derive(Parser, Debug)]
#[command(name = "calxt")]
#[command(author = "Calx Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize calx expressions", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CALXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CALXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CALXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the calxt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every token of a file or expression
    ///
    /// Tokens are printed up to and including end of input. A lexical
    /// error is reported as a diagnostic and ends the command.
    Tokens(TokensCommand),

    /// Look ahead at the first N tokens of an expression
    Peek(PeekCommand),

    /// Show or save the effective configuration
    Config(ConfigCommand),
}

/// Output flags shared by the token-printing commands.
#[derive(clap::Args, Debug)]
struct OutputFlags {
    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Prefix each plain line with line:column
    #[arg(short, long)]
    positions: bool,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "expr"])))]
struct TokensCommand {
    /// File to tokenize, `-` for standard input
    file: Option<PathBuf>,

    /// Expression to tokenize
    #[arg(short, long)]
    expr: Option<String>,

    #[command(flatten)]
    output: OutputFlags,
}

/// Arguments for the peek subcommand.
#[derive(Parser, Debug)]
struct PeekCommand {
    /// Number of tokens to look ahead
    count: usize,

    /// Expression to look into
    #[arg(short, long)]
    expr: String,

    #[command(flatten)]
    output: OutputFlags,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write the configuration to this file instead of printing it
    #[arg(long)]
    save: Option<PathBuf>,
}

/// Main entry point for the calxt CLI.
///
/// Errors, including lexical diagnostics, are printed to stderr and turn
/// into a failure exit code.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;
    let config = load_config(cli.config.as_deref())?;
    execute_command(cli.command, cli.verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token output on stdout stays machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

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
        .map_err(|e| CalxtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Combine output flags with the configuration; flags win.
fn render_options(flags: &OutputFlags, config: &Config) -> RenderOptions {
    RenderOptions {
        format: flags.format.unwrap_or(config.format),
        positions: flags.positions || config.positions,
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, verbose, &config),
        Commands::Peek(args) => execute_peek(args, &config),
        Commands::Config(args) => run_config(ConfigArgs { save: args.save }, &config),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, verbose: bool, config: &Config) -> Result<()> {
    let input = match (args.expr, args.file) {
        (Some(expr), _) => Input::Expr(expr),
        (None, Some(file)) => Input::File(file),
        (None, None) => {
            return Err(CalxtError::Config(
                "either a file or --expr is required".to_string(),
            ))
        }
    };

    run_tokens(TokensArgs {
        input,
        render: render_options(&args.output, config),
        max_tokens: config.max_tokens,
        verbose,
    })
}

/// Execute the peek command.
fn execute_peek(args: PeekCommand, config: &Config) -> Result<()> {
    run_peek(PeekArgs {
        count: args.count,
        expr: args.expr,
        render: render_options(&args.output, config),
        max_tokens: config.max_tokens,
    })
}
