//! Lexical errors.
//!
//! Every error here is fatal to the tokenization pass: the lexer stops at
//! the first one and reports where it happened.

use calx_util::{Diagnostic, DiagnosticCode, Pos, Span};
use thiserror::Error;

/// Error raised while scanning a token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Identifier scanning began on a character that cannot start one
    #[error("an identifier cannot start with the character {found:?} at {pos}")]
    InvalidIdentifierStart {
        /// The offending character
        found: char,
        /// Where it was read
        pos: Pos,
    },

    /// A second `.` after a complete number literal
    #[error("unexpected decimal separator at {pos}")]
    UnexpectedDecimalSeparator {
        /// Position of the extra `.`
        pos: Pos,
    },

    /// A second `e`/`E` after a complete number literal
    #[error("unexpected power of ten separator at {pos}")]
    UnexpectedExponentMarker {
        /// Position of the extra marker
        pos: Pos,
    },

    /// Input ended before the closing quote
    #[error("unterminated string literal at {pos}: missing closing {delimiter}")]
    UnterminatedString {
        /// The quote that opened the string
        delimiter: char,
        /// Position of the last character in the input
        pos: Pos,
    },
}

/// Result type alias for lexing operations
pub type LexResult<T> = std::result::Result<T, LexError>;

impl LexError {
    /// Where the error was detected.
    pub fn pos(&self) -> Pos {
        match *self {
            LexError::InvalidIdentifierStart { pos, .. }
            | LexError::UnexpectedDecimalSeparator { pos }
            | LexError::UnexpectedExponentMarker { pos }
            | LexError::UnterminatedString { pos, .. } => pos,
        }
    }

    /// Diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::InvalidIdentifierStart { .. } => DiagnosticCode::E_LEXER_INVALID_IDENT_START,
            LexError::UnexpectedDecimalSeparator { .. } | LexError::UnexpectedExponentMarker { .. } => {
                DiagnosticCode::E_LEXER_INVALID_NUMBER
            }
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
        }
    }

    /// Converts the error into a diagnostic located at [`LexError::pos`].
    ///
    /// # Example
    ///
    /// ```
    /// use calx_lex::tokenize;
    ///
    /// let err = tokenize("1.2.3").unwrap_err();
    /// let diag = err.to_diagnostic();
    /// assert!(diag.to_string().starts_with("error[E1002]: unexpected decimal separator"));
    /// ```
    pub fn to_diagnostic(&self) -> Diagnostic {
        let span = Span::at(self.pos());
        let diagnostic = match self {
            LexError::InvalidIdentifierStart { found, .. } => Diagnostic::error(
                format!("an identifier cannot start with {:?}", found),
                span,
            ),
            LexError::UnexpectedDecimalSeparator { .. } => {
                Diagnostic::error("unexpected decimal separator", span)
                    .with_help("a number literal takes at most one '.' and none after its exponent")
            }
            LexError::UnexpectedExponentMarker { .. } => {
                Diagnostic::error("unexpected power of ten separator", span)
                    .with_help("a number literal takes at most one exponent")
            }
            LexError::UnterminatedString { delimiter, .. } => {
                Diagnostic::error("unterminated string literal", span)
                    .with_note(format!("expected a closing {} before end of input", delimiter))
            }
        };
        diagnostic.with_code(self.code())
    }
}
