//! Tokens command implementation.
//!
//! Lexes a file or an inline expression and prints every token up to and
//! including end of input.

use std::time::Instant;

use tracing::{debug, info};

use crate::commands::common::{collect_tokens, render_tokens, Input, RenderOptions};
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Text to lex.
    pub input: Input,
    /// Output settings.
    pub render: RenderOptions,
    /// Maximum number of tokens to print.
    pub max_tokens: usize,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Lexes the input and returns the rendered tokens.
pub fn tokens_output(args: &TokensArgs) -> Result<String> {
    let start = Instant::now();
    let text = args.input.read()?;
    debug!(bytes = text.len(), "read input");

    let tokens = collect_tokens(&text, args.max_tokens)?;
    if args.verbose {
        info!(
            tokens = tokens.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "lexed input"
        );
    }

    render_tokens(&tokens, args.render)
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let output = tokens_output(&args)?;
    println!("{}", output);
    Ok(())
}
