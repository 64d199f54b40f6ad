//! Operator lexing.
//!
//! Operators are looked up in [`OPERATORS`](crate::token::OPERATORS): the
//! two-character spelling formed with the next character wins over the
//! single character, and a character that spells no operator at all (a lone
//! `&` or `|`) becomes a delimiter.

use tracing::trace;

use crate::token::{Operator, Token, TokenKind};

use super::scanner::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes an operator whose first character `first` was just consumed.
    pub(super) fn scan_operator(&mut self, first: char) -> Token {
        if let Some(op) = Operator::lookup(first, Some(self.cursor.peek())) {
            self.cursor.consume();
            return self.finish(TokenKind::Operator(op));
        }

        match Operator::lookup(first, None) {
            Some(op) => self.finish(TokenKind::Operator(op)),
            None => {
                trace!(ch = %first, "no operator spelled by character, emitting delimiter");
                self.finish(TokenKind::Delimiter(first))
            }
        }
    }
}
