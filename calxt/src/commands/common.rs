//! Common types and utilities for calxt commands.
//!
//! Input selection, token collection and the two output renderings are
//! shared by every command that prints tokens.

use std::io::Read;
use std::path::{Path, PathBuf};

use calx_lex::{Lexer, Token, TokenKind};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CalxtError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// How tokens are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Plain,
    /// A JSON array of token objects
    Json,
}

/// Output settings resolved from flags and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Prefix plain lines with `line:column`.
    pub positions: bool,
}

// ============================================================================
// Input
// ============================================================================

/// Where the text to lex comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Text given on the command line.
    Expr(String),
    /// A file; `-` reads standard input.
    File(PathBuf),
}

impl Input {
    /// Reads the input text.
    pub fn read(&self) -> Result<String> {
        match self {
            Input::Expr(text) => Ok(text.clone()),
            Input::File(path) if path.as_os_str() == "-" => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
            Input::File(path) => read_file(path),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        CalxtError::FileOperation(format!("cannot read {}: {}", path.display(), e))
    })
}

// ============================================================================
// Token collection
// ============================================================================

/// Lexes `text` up to and including end of input, keeping at most `limit`
/// tokens.
pub fn collect_tokens(text: &str, limit: usize) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(text);
    let mut tokens = Vec::new();

    while tokens.len() < limit {
        let (token, more) = lexer
            .consume_checked()
            .map_err(|e| CalxtError::lex(e, text))?;
        tokens.push(token);
        if !more {
            return Ok(tokens);
        }
    }

    warn!(limit, "output truncated, raise max_tokens to see more");
    Ok(tokens)
}

// ============================================================================
// Rendering
// ============================================================================

/// Serializable view of a token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord {
    /// Kind name, as in [`TokenKind::name`].
    pub kind: &'static str,
    /// Token text: the lexeme, literal text or delimiter character.
    pub text: String,
    /// 1-based index of the token's last character.
    pub index: usize,
    /// Line of the token's last character.
    pub line: u32,
    /// Column of the token's last character.
    pub column: u32,
    /// Precedence level, for operators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precedence: Option<i8>,
    /// Left associativity, for operators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_assoc: Option<bool>,
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        let text = match &token.kind {
            TokenKind::EndOfInput(_) => String::new(),
            TokenKind::Delimiter(c) => c.to_string(),
            TokenKind::Identifier(text)
            | TokenKind::StringLiteral(text)
            | TokenKind::NumberLiteral(text) => text.clone(),
            TokenKind::Operator(op) => op.lexeme().to_string(),
        };
        let op = token.operator();

        Self {
            kind: token.kind.name(),
            text,
            index: token.pos.index,
            line: token.pos.line,
            column: token.pos.column,
            precedence: op.map(|op| op.precedence().level()),
            left_assoc: op.map(|op| op.is_left_assoc()),
        }
    }
}

/// Renders tokens for printing, without a trailing newline.
pub fn render_tokens(tokens: &[Token], options: RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Plain => Ok(tokens
            .iter()
            .map(|token| {
                if options.positions {
                    format!("{}\t{}", token.pos, token)
                } else {
                    token.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let records: Vec<TokenRecord> = tokens.iter().map(TokenRecord::from).collect();
            Ok(serde_json::to_string_pretty(&records)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: RenderOptions = RenderOptions {
        format: OutputFormat::Plain,
        positions: false,
    };

    #[test]
    fn test_collect_stops_at_end() {
        let tokens = collect_tokens("a + 1", 100).unwrap();
        assert_eq!(tokens.len(), 4);
        assert!(tokens[3].is_end());
    }

    #[test]
    fn test_collect_respects_limit() {
        let tokens = collect_tokens("a b c d e", 2).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text(), Some("b"));
    }

    #[test]
    fn test_collect_lex_error() {
        let err = collect_tokens("1e2e3", 100).unwrap_err();
        assert!(matches!(err, CalxtError::Lex { .. }));
    }

    #[test]
    fn test_render_plain() {
        let tokens = collect_tokens("x >= 'a'", 100).unwrap();
        let out = render_tokens(&tokens, PLAIN).unwrap();
        assert_eq!(out, "identifier x\noperator >=\nstring \"a\"\nend of input");
    }

    #[test]
    fn test_render_plain_positions() {
        let tokens = collect_tokens("a\n b", 100).unwrap();
        let options = RenderOptions {
            positions: true,
            ..PLAIN
        };
        let out = render_tokens(&tokens, options).unwrap();
        assert!(out.starts_with("1:1\tidentifier a\n2:2\tidentifier b"));
    }

    #[test]
    fn test_render_json() {
        let tokens = collect_tokens("n ^ 2", 100).unwrap();
        let options = RenderOptions {
            format: OutputFormat::Json,
            positions: false,
        };
        let out = render_tokens(&tokens, options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[1]["kind"], "operator");
        assert_eq!(items[1]["text"], "^");
        assert_eq!(items[1]["precedence"], 4);
        assert_eq!(items[1]["left_assoc"], false);
        assert!(items[0].get("precedence").is_none());
        assert_eq!(items[2]["index"], 5);
    }

    #[test]
    fn test_input_expr() {
        let input = Input::Expr("1 + 2".to_string());
        assert_eq!(input.read().unwrap(), "1 + 2");
    }

    #[test]
    fn test_input_missing_file() {
        let input = Input::File(PathBuf::from("/nonexistent/input.calx"));
        let err = input.read().unwrap_err();
        assert!(err.to_string().contains("cannot read /nonexistent/input.calx"));
    }
}
