//! Error handling module for the calxt CLI.
//!
//! All failures surface as a [`CalxtError`]; lexical errors carry a
//! rendered [`Diagnostic`] so they print the way the compiler would.

use calx_lex::LexError;
use calx_util::Diagnostic;
use thiserror::Error;

/// Main error type for the calxt CLI application.
#[derive(Error, Debug)]
pub enum CalxtError {
    /// Configuration could not be found, parsed or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input file could not be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// The input does not lex.
    #[error("{diagnostic}")]
    Lex {
        /// Diagnostic pointing into the input text.
        diagnostic: Box<Diagnostic>,
        /// The underlying lexer error.
        #[source]
        source: LexError,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalxtError {
    /// Wraps a lexer error, attaching a snippet of `text` when the error
    /// position falls inside it.
    pub fn lex(error: LexError, text: &str) -> Self {
        let diagnostic = error.to_diagnostic();
        let diagnostic = diagnostic.clone().with_source(text).unwrap_or(diagnostic);
        CalxtError::Lex {
            diagnostic: Box::new(diagnostic),
            source: error,
        }
    }
}

/// Result type alias using CalxtError.
pub type Result<T> = std::result::Result<T, CalxtError>;
