//! Span module - Source location tracking.
//!
//! Positions in calx are counted in characters, not bytes: a [`Pos`] names
//! the 1-based index of a character in the input stream together with its
//! line and column. A [`Span`] is what a diagnostic points at.
//!
//! # Examples
//!
//! ```
//! use calx_util::span::{Pos, Span};
//!
//! let pos = Pos::new(4, 1, 4);
//! let span = Span::at(pos);
//! assert_eq!(span.line, 1);
//! assert_eq!(span.column, 4);
//! ```

use std::fmt;

/// A single location in the character stream.
///
/// `index` is 1-based and counts characters consumed so far, so a position
/// taken right after reading the third character has `index == 3`. The
/// start of input, before anything is read, is `index == 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// Character index (1-based, 0 before the first character)
    pub index: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Pos {
    /// Position before any character has been read.
    pub const START: Pos = Pos {
        index: 0,
        line: 1,
        column: 0,
    };

    /// Create a new position
    #[inline]
    pub const fn new(index: usize, line: u32, column: u32) -> Self {
        Self {
            index,
            line,
            column,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Location a diagnostic points at.
///
/// `start` and `end` are character indices; `line` and `column` say where
/// the location begins for human-readable output.
///
/// # Examples
///
/// ```
/// use calx_util::span::{Pos, Span};
///
/// let span = Span::at(Pos::new(9, 2, 3));
/// assert_eq!((span.start, span.end), (9, 9));
/// assert!(!span.is_dummy());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start character index
    pub start: usize,
    /// End character index
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Placeholder for diagnostics that have no location.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create an empty span sitting on `pos`.
    #[inline]
    pub fn at(pos: Pos) -> Self {
        Self {
            start: pos.index,
            end: pos.index,
            line: pos.line,
            column: pos.column,
        }
    }

    /// Returns true for [`Span::DUMMY`].
    #[inline]
    pub fn is_dummy(&self) -> bool {
        *self == Self::DUMMY
    }
}
