//! Peek command implementation.
//!
//! Prints the first N tokens of an expression through the lexer's
//! lookahead, without consuming anything.

use calx_lex::Lexer;

use crate::commands::common::{render_tokens, RenderOptions};
use crate::error::{CalxtError, Result};

/// Arguments for the peek command.
#[derive(Debug, Clone)]
pub struct PeekArgs {
    /// Number of tokens to look ahead.
    pub count: usize,
    /// Expression to lex.
    pub expr: String,
    /// Output settings.
    pub render: RenderOptions,
    /// Maximum number of tokens to print.
    pub max_tokens: usize,
}

/// Looks ahead into the expression and returns the rendered tokens.
pub fn peek_output(args: &PeekArgs) -> Result<String> {
    let lexer = Lexer::new(&args.expr);
    let tokens = lexer
        .peek_n(args.count.min(args.max_tokens))
        .map_err(|e| CalxtError::lex(e, &args.expr))?;
    render_tokens(&tokens, args.render)
}

/// Run the peek command.
pub fn run_peek(args: PeekArgs) -> Result<()> {
    let output = peek_output(&args)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
