//! Identifier lexing.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::unicode::{is_ident_continue, is_ident_start};

use super::scanner::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes an identifier.
    ///
    /// Identifiers start with a letter or underscore, followed by letters,
    /// digits or underscores. The dispatcher only calls this on a valid
    /// start character; anything else is reported rather than assumed.
    pub(super) fn scan_identifier(&mut self) -> LexResult<Token> {
        let mut c = self.cursor.consume();
        if !is_ident_start(c) {
            return Err(LexError::InvalidIdentifierStart {
                found: c,
                pos: self.cursor.position(),
            });
        }

        let mut text = String::new();
        while is_ident_continue(c) {
            text.push(c);
            c = self.cursor.consume();
        }
        self.cursor.reconsume();

        Ok(self.finish(TokenKind::Identifier(text)))
    }
}
