//! Core error types for calx-util crate

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    /// The diagnostic points at a line the source does not have
    #[error("Invalid line number: {line} (source has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },

    /// The diagnostic carries no location to render
    #[error("Diagnostic has no source location")]
    MissingLocation,
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
