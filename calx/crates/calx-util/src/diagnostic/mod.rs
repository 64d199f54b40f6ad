//! Diagnostic module - Error reporting infrastructure.
//!
//! # Examples
//!
//! ```
//! use calx_util::diagnostic::{Diagnostic, DiagnosticCode};
//! use calx_util::{Pos, Span};
//!
//! let diag = Diagnostic::error("unterminated string literal", Span::at(Pos::new(4, 1, 4)))
//!     .with_code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING);
//! assert_eq!(diag.to_string(), "error[E1003]: unterminated string literal\n --> 1:4");
//! ```

mod codes;
mod snippet;

pub use codes::DiagnosticCode;
pub use snippet::SourceSnippet;

use crate::error::{DiagnosticError, DiagnosticResult};
use crate::Span;
use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that stops processing
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source line excerpt, once attached with [`Diagnostic::with_source`]
    pub snippet: Option<SourceSnippet>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippet: None,
        }
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Attach a caret snippet taken from `source` at this diagnostic's
    /// line and column.
    ///
    /// # Errors
    ///
    /// Fails when the diagnostic has a dummy span or its line does not
    /// exist in `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use calx_util::diagnostic::Diagnostic;
    /// use calx_util::{Pos, Span};
    ///
    /// let diag = Diagnostic::error("unexpected decimal separator", Span::at(Pos::new(4, 1, 4)))
    ///     .with_source("1.2.3")
    ///     .unwrap();
    /// assert_eq!(diag.snippet.unwrap().line, "1.2.3");
    /// ```
    pub fn with_source(mut self, source: &str) -> DiagnosticResult<Self> {
        if self.span.is_dummy() {
            return Err(DiagnosticError::MissingLocation);
        }

        let line_number = self.span.line as usize;
        let line = if source.is_empty() && line_number == 1 {
            ""
        } else {
            source
                .lines()
                .nth(line_number.saturating_sub(1))
                .ok_or(DiagnosticError::InvalidLineNumber {
                    line: line_number,
                    max_lines: source.lines().count().max(1),
                })?
        };

        let column = (self.span.column as usize).max(1);
        self.snippet = Some(SourceSnippet::new(line, line_number, column));
        Ok(self)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        if !self.span.is_dummy() {
            write!(f, "\n --> {}:{}", self.span.line, self.span.column)?;
        }
        if let Some(snippet) = &self.snippet {
            write!(f, "\n{}", snippet)?;
        }
        for note in &self.notes {
            write!(f, "\n = note: {}", note)?;
        }
        for help in &self.helps {
            write!(f, "\n = help: {}", help)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pos;

    fn at(line: u32, column: u32) -> Span {
        Span::at(Pos::new(1, line, column))
    }

    #[test]
    fn test_display_with_code() {
        let diag = Diagnostic::error("unterminated string literal", at(2, 7))
            .with_code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING);
        assert_eq!(
            diag.to_string(),
            "error[E1003]: unterminated string literal\n --> 2:7"
        );
    }

    #[test]
    fn test_display_without_span() {
        let diag = Diagnostic::error("oops", Span::DUMMY);
        assert_eq!(diag.to_string(), "error: oops");
    }

    #[test]
    fn test_display_notes_and_helps_follow_snippet() {
        let diag = Diagnostic::error("unexpected power of ten separator", at(1, 4))
            .with_note("exponent already given")
            .with_help("remove the second 'e'")
            .with_source("1e2e3")
            .unwrap();
        let text = diag.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[2], "  1 | 1e2e3");
        assert_eq!(lines[4], " = note: exponent already given");
        assert_eq!(lines[5], " = help: remove the second 'e'");
    }

    #[test]
    fn test_with_source_picks_line() {
        let diag = Diagnostic::error("e", at(2, 3))
            .with_source("a + b\nc ! d")
            .unwrap();
        let snippet = diag.snippet.unwrap();
        assert_eq!(snippet.line, "c ! d");
        assert_eq!(snippet.column, 3);
    }

    #[test]
    fn test_with_source_empty_input() {
        let diag = Diagnostic::error("e", at(1, 0)).with_source("").unwrap();
        assert_eq!(diag.snippet.unwrap().column, 1);
    }

    #[test]
    fn test_with_source_line_out_of_range() {
        let err = Diagnostic::error("e", at(5, 1))
            .with_source("one line")
            .unwrap_err();
        assert_eq!(
            err,
            DiagnosticError::InvalidLineNumber {
                line: 5,
                max_lines: 1
            }
        );
    }

    #[test]
    fn test_with_source_dummy_span() {
        let err = Diagnostic::error("e", Span::DUMMY).with_source("x").unwrap_err();
        assert_eq!(err, DiagnosticError::MissingLocation);
    }
}
