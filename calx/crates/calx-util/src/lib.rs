//! calx-util - Shared foundation types for the calx toolchain
//!
//! This crate holds the pieces every calx phase needs but none of them owns:
//!
//! - [`span`] - source positions ([`Pos`]) and diagnostic locations ([`Span`])
//! - [`diagnostic`] - diagnostics, their codes and source snippets
//! - [`error`] - errors raised while rendering diagnostics
//!
//! # Example
//!
//! ```
//! use calx_util::{Diagnostic, DiagnosticCode, Pos, Span};
//!
//! let diag = Diagnostic::error("unterminated string literal", Span::at(Pos::new(5, 1, 5)))
//!     .with_code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .with_source("'abcd")
//!     .unwrap();
//!
//! assert!(diag.to_string().contains("  1 | 'abcd"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticCode, Level, SourceSnippet};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::{Pos, Span};
