//! Token scanner and first-character dispatch.
//!
//! The [`Scanner`] turns characters into tokens. It holds a [`Cursor`] and
//! the end-of-input marker once one is read, and it is `Copy`, so the lexer
//! peeks by scanning a copy.

use calx_util::Pos;

use crate::cursor::Cursor;
use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::unicode::{is_digit, is_end_of_input, is_ident_start, is_operator_start, is_quote};

/// What a token starting with a given character will be.
///
/// Classes are tested in declaration order; the first match wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CharClass {
    EndOfInput,
    NumberStart,
    Quote,
    IdentStart,
    OperatorStart,
    Other,
}

impl CharClass {
    /// Classifies `c`, with `next` the character that follows it.
    fn of(c: char, next: char) -> CharClass {
        match c {
            c if is_end_of_input(c) => CharClass::EndOfInput,
            c if is_digit(c) => CharClass::NumberStart,
            '.' if is_digit(next) => CharClass::NumberStart,
            c if is_quote(c) => CharClass::Quote,
            c if is_ident_start(c) => CharClass::IdentStart,
            c if is_operator_start(c) => CharClass::OperatorStart,
            _ => CharClass::Other,
        }
    }
}

/// Scans tokens directly off a cursor.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Scanner<'a> {
    pub(super) cursor: Cursor<'a>,

    /// End-of-input character and its position, once read. Characters after
    /// a NUL or U+0003 inside the source are never scanned.
    ended: Option<(char, Pos)>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            ended: None,
        }
    }

    /// Position of the last character read.
    pub(crate) fn position(&self) -> Pos {
        self.cursor.position()
    }

    /// Scans the next token, skipping leading whitespace.
    ///
    /// After end of input every call returns the same end-of-input token.
    pub(crate) fn scan(&mut self) -> LexResult<Token> {
        if let Some((c, pos)) = self.ended {
            return Ok(Token::new(TokenKind::EndOfInput(c), pos));
        }

        let c = self.skip_whitespace();

        match CharClass::of(c, self.cursor.peek()) {
            CharClass::EndOfInput => {
                let pos = self.cursor.position();
                self.ended = Some((c, pos));
                Ok(Token::new(TokenKind::EndOfInput(c), pos))
            }
            CharClass::NumberStart => {
                self.cursor.reconsume();
                self.scan_number()
            }
            CharClass::Quote => self.scan_string(c),
            CharClass::IdentStart => {
                self.cursor.reconsume();
                self.scan_identifier()
            }
            CharClass::OperatorStart => Ok(self.scan_operator(c)),
            CharClass::Other => Ok(self.finish(TokenKind::Delimiter(c))),
        }
    }

    /// Consumes whitespace and returns the first other character.
    fn skip_whitespace(&mut self) -> char {
        loop {
            let c = self.cursor.consume();
            if !c.is_whitespace() {
                return c;
            }
        }
    }

    /// Wraps `kind` in a token ending at the current position.
    #[inline]
    pub(super) fn finish(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.cursor.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_order() {
        assert_eq!(CharClass::of('\0', 'x'), CharClass::EndOfInput);
        assert_eq!(CharClass::of('\u{3}', 'x'), CharClass::EndOfInput);
        assert_eq!(CharClass::of('7', ' '), CharClass::NumberStart);
        assert_eq!(CharClass::of('.', '5'), CharClass::NumberStart);
        assert_eq!(CharClass::of('.', 'x'), CharClass::Other);
        assert_eq!(CharClass::of('"', 'x'), CharClass::Quote);
        assert_eq!(CharClass::of('_', '1'), CharClass::IdentStart);
        assert_eq!(CharClass::of('&', ' '), CharClass::OperatorStart);
        assert_eq!(CharClass::of(')', ' '), CharClass::Other);
    }

    #[test]
    fn test_scan_skips_whitespace() {
        let mut scanner = Scanner::new(" \t\n x");
        let token = scanner.scan().unwrap();
        assert_eq!(token.kind, TokenKind::Identifier("x".into()));
        assert_eq!(token.pos.index, 5);
        assert_eq!(token.pos.line, 2);
    }

    #[test]
    fn test_scan_copy_does_not_advance_original() {
        let scanner = Scanner::new("a b");
        let mut ahead = scanner;
        ahead.scan().unwrap();
        ahead.scan().unwrap();
        assert_eq!(scanner.position(), Pos::START);
    }

    #[test]
    fn test_end_of_transmission_stops() {
        let mut scanner = Scanner::new("a \u{3} b");
        scanner.scan().unwrap();
        let end = scanner.scan().unwrap();
        assert_eq!(end.kind, TokenKind::EndOfInput('\u{3}'));
        assert_eq!(end.pos.index, 3);
        assert_eq!(scanner.scan().unwrap(), end);
        assert_eq!(scanner.scan().unwrap(), end);
    }

    #[test]
    fn test_copy_keeps_end_marker() {
        let mut scanner = Scanner::new("\0 x");
        let end = scanner.scan().unwrap();
        let mut ahead = scanner;
        assert_eq!(ahead.scan().unwrap(), end);
    }
}
