//! Character cursor for traversing source text.
//!
//! The [`Cursor`] is the character source the lexer reads from. It hands out
//! one character at a time, can look at the next character without taking
//! it, and can give back exactly one character it already handed out.
//! Positions are counted in characters and tracked together with line and
//! column for diagnostics.

use calx_util::Pos;

/// Character yielded once the source is exhausted.
pub const EOF_CHAR: char = '\0';

/// Internal read state of a cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Mark {
    /// Byte offset of the next character.
    offset: usize,
    /// Number of characters consumed so far.
    index: usize,
    /// Line of the last consumed character (1-based).
    line: u32,
    /// Column of the last consumed character (0 before the first one).
    column: u32,
    /// The last consumed character was a newline.
    after_newline: bool,
}

impl Mark {
    const START: Mark = Mark {
        offset: 0,
        index: 0,
        line: 1,
        column: 0,
        after_newline: false,
    };
}

/// A cursor over a string, read one character at a time.
///
/// The cursor is `Copy`: a copy is a complete, independent snapshot of the
/// read position including the one-character pushback slot, so scanning
/// ahead on a copy never disturbs the original.
///
/// # Example
///
/// ```
/// use calx_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.consume(), 'a');
/// assert_eq!(cursor.peek(), 'b');
/// cursor.reconsume();
/// assert_eq!(cursor.consume(), 'a');
/// assert_eq!(cursor.consume(), 'b');
/// assert_eq!(cursor.consume(), '\0');
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current read state.
    mark: Mark,

    /// State before the last `consume`, restored by `reconsume`.
    pushback: Option<Mark>,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            mark: Mark::START,
            pushback: None,
        }
    }

    /// Takes the next character.
    ///
    /// Returns [`EOF_CHAR`] once the source is exhausted; reading past the
    /// end does not move the position.
    pub fn consume(&mut self) -> char {
        self.pushback = Some(self.mark);

        let Some(c) = self.source[self.mark.offset..].chars().next() else {
            return EOF_CHAR;
        };

        let mark = &mut self.mark;
        mark.offset += c.len_utf8();
        mark.index += 1;
        if mark.after_newline {
            mark.line += 1;
            mark.column = 1;
        } else {
            mark.column += 1;
        }
        mark.after_newline = c == '\n';

        c
    }

    /// Returns the next character without taking it.
    ///
    /// # Example
    ///
    /// ```
    /// use calx_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("x");
    /// assert_eq!(cursor.peek(), 'x');
    /// assert_eq!(cursor.peek(), 'x');
    /// ```
    #[inline]
    pub fn peek(&self) -> char {
        self.source[self.mark.offset..]
            .chars()
            .next()
            .unwrap_or(EOF_CHAR)
    }

    /// Gives back the character returned by the last [`consume`](Self::consume).
    ///
    /// Only one character can be pushed back; returns `false` when there is
    /// nothing to give back (nothing consumed yet, or already given back).
    pub fn reconsume(&mut self) -> bool {
        match self.pushback.take() {
            Some(mark) => {
                self.mark = mark;
                true
            }
            None => false,
        }
    }

    /// Returns true if every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.mark.offset >= self.source.len()
    }

    /// Position of the last consumed character.
    ///
    /// # Example
    ///
    /// ```
    /// use calx_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.consume();
    /// cursor.consume();
    /// cursor.consume();
    /// let pos = cursor.position();
    /// assert_eq!((pos.index, pos.line, pos.column), (3, 2, 1));
    /// ```
    pub fn position(&self) -> Pos {
        Pos::new(self.mark.index, self.mark.line, self.mark.column)
    }
}
