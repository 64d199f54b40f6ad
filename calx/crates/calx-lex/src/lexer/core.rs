//! Core lexer implementation.
//!
//! This module contains the [`Lexer`] struct: token production, lookahead
//! and pushback. Character-level scanning lives in the sibling modules.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use calx_util::Pos;
use tracing::{debug, trace};

use crate::error::{LexError, LexResult};
use crate::token::Token;

use super::scanner::Scanner;

/// Lexer for calx expressions.
///
/// Produces tokens on demand with [`consume`](Lexer::consume), looks ahead
/// any number of tokens without committing via [`peek_n`](Lexer::peek_n),
/// and replays tokens handed back with [`reconsume`](Lexer::reconsume).
///
/// # Example
///
/// ```
/// use calx_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("a == b");
/// let ahead = lexer.peek_n(2).unwrap();
/// assert_eq!(ahead[0].kind, TokenKind::Identifier("a".into()));
///
/// assert_eq!(lexer.consume().unwrap(), ahead[0]);
/// lexer.reconsume();
/// assert_eq!(lexer.consume().unwrap(), ahead[0]);
/// assert_eq!(lexer.consume().unwrap().operator().unwrap().lexeme(), "==");
/// ```
#[derive(Debug)]
pub struct Lexer<'a> {
    /// Character-level scanner over the source.
    scanner: Scanner<'a>,

    /// Tokens handed back by `reconsume`, replayed front first.
    pending: VecDeque<Token>,

    /// Last token returned by `consume`.
    current: Option<Token>,

    /// Number of tokens scanned from the source; replays are not counted.
    produced: usize,

    /// First error met by `consume`; every later call returns it.
    failed: Option<LexError>,

    /// Iteration has finished.
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(source),
            pending: VecDeque::new(),
            current: None,
            produced: 0,
            failed: None,
            done: false,
        }
    }

    /// Returns the next token.
    ///
    /// Reconsumed tokens are replayed first, unchanged. Otherwise whitespace
    /// is skipped and one token is scanned. Once input is exhausted every
    /// call returns [`TokenKind::EndOfInput`](crate::TokenKind::EndOfInput).
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] for a malformed number or an unterminated
    /// string. The error is final: this and every later call to `consume`,
    /// [`peek`](Self::peek) or [`peek_n`](Self::peek_n) returns it.
    pub fn consume(&mut self) -> LexResult<Token> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }

        let token = match self.pending.pop_front() {
            Some(token) => {
                trace!(token = %token, pos = %token.pos, "replayed token");
                token
            }
            None => {
                let token = self.scanner.scan().map_err(|err| {
                    debug!(error = %err, "lexing stopped");
                    self.failed = Some(err.clone());
                    err
                })?;
                self.produced += 1;
                trace!(token = %token, pos = %token.pos, "scanned token");
                token
            }
        };

        self.current = Some(token.clone());
        Ok(token)
    }

    /// Like [`consume`](Self::consume), also reporting whether the token
    /// is something other than end of input.
    ///
    /// ```
    /// use calx_lex::Lexer;
    ///
    /// let mut lexer = Lexer::new("x");
    /// assert!(lexer.consume_checked().unwrap().1);
    /// assert!(!lexer.consume_checked().unwrap().1);
    /// ```
    pub fn consume_checked(&mut self) -> LexResult<(Token, bool)> {
        let token = self.consume()?;
        let more = !token.is_end();
        Ok((token, more))
    }

    /// Returns the token the next [`consume`](Self::consume) will return.
    pub fn peek(&self) -> LexResult<Token> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }
        if let Some(token) = self.pending.front() {
            return Ok(token.clone());
        }
        let mut ahead = self.scanner;
        ahead.scan()
    }

    /// Returns the next `n` tokens without consuming them.
    ///
    /// Pending reconsumed tokens come first, then tokens scanned from a copy
    /// of the scanner, so the result always equals the next `n` results of
    /// [`consume`](Self::consume). Past the end of input the tail is
    /// repeated end-of-input tokens.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`] met within the first `n` tokens, or
    /// the error that already stopped the lexer.
    pub fn peek_n(&self, n: usize) -> LexResult<Vec<Token>> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }

        let mut tokens: Vec<Token> = self.pending.iter().take(n).cloned().collect();

        let mut ahead = self.scanner;
        while tokens.len() < n {
            tokens.push(ahead.scan()?);
        }

        debug!(n, queued = self.pending.len().min(n), "peeked tokens");
        Ok(tokens)
    }

    /// Hands the current token back for replay.
    ///
    /// Tokens are replayed in the order they were handed back. Does nothing
    /// before the first [`consume`](Self::consume).
    pub fn reconsume(&mut self) {
        match &self.current {
            Some(token) => {
                debug!(token = %token, pending = self.pending.len() + 1, "reconsume");
                self.pending.push_back(token.clone());
            }
            None => debug!("reconsume before any token, ignored"),
        }
    }

    /// Last token returned by [`consume`](Self::consume).
    #[inline]
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Number of tokens scanned so far, not counting replays.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.produced
    }

    /// Number of reconsumed tokens waiting to be replayed.
    #[inline]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Position of the last character read from the source.
    #[inline]
    pub fn position(&self) -> Pos {
        self.scanner.position()
    }
}

/// Yields tokens up to, not including, end of input.
///
/// An error is yielded once and ends the iteration.
impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.consume() {
            Ok(token) if token.is_end() => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<'a> FusedIterator for Lexer<'a> {}
