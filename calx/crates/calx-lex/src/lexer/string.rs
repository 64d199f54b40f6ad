//! String literal lexing.
//!
//! Strings are taken verbatim: there are no escape sequences, and the only
//! character a string cannot contain is its own delimiter.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

use super::scanner::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a string literal whose opening `delimiter` was just consumed.
    ///
    /// The closing delimiter is consumed but not included in the text.
    pub(super) fn scan_string(&mut self, delimiter: char) -> LexResult<Token> {
        let mut content = String::new();

        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedString {
                    delimiter,
                    pos: self.cursor.position(),
                });
            }

            let c = self.cursor.consume();
            if c == delimiter {
                break;
            }
            content.push(c);
        }

        Ok(self.finish(TokenKind::StringLiteral(content)))
    }
}
