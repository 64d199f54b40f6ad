//! Number literal lexing.
//!
//! Accepts `digits ('.' digits)? (('e'|'E') ('+'|'-')? digits)?` and keeps
//! the text as written. A second `.` or exponent marker right after a
//! complete literal is an error rather than the start of the next token.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::unicode::{is_digit, is_exponent_marker, is_sign};

use super::scanner::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a number literal.
    ///
    /// The cursor must sit before a digit, or before a `.` followed by a
    /// digit. The character that ends the literal is pushed back.
    pub(super) fn scan_number(&mut self) -> LexResult<Token> {
        let mut text = String::new();

        let mut c = self.take_digits(&mut text);

        if c == '.' {
            text.push(c);
            c = self.take_digits(&mut text);
        }

        if is_exponent_marker(c) {
            text.push(c);
            c = self.cursor.consume();
            if is_sign(c) {
                text.push(c);
                c = self.cursor.consume();
            }
            while is_digit(c) {
                text.push(c);
                c = self.cursor.consume();
            }
        }

        if c == '.' {
            return Err(LexError::UnexpectedDecimalSeparator {
                pos: self.cursor.position(),
            });
        }
        if is_exponent_marker(c) {
            return Err(LexError::UnexpectedExponentMarker {
                pos: self.cursor.position(),
            });
        }

        self.cursor.reconsume();
        Ok(self.finish(TokenKind::NumberLiteral(text)))
    }

    /// Appends a run of digits to `text`; returns the first non-digit,
    /// already consumed.
    fn take_digits(&mut self, text: &mut String) -> char {
        loop {
            let c = self.cursor.consume();
            if !is_digit(c) {
                return c;
            }
            text.push(c);
        }
    }
}
