//! calx-lex - Lexical Analyzer for calx expressions
//!
//! This crate turns expression text into a stream of typed tokens for a
//! downstream precedence-climbing parser. Beyond plain tokenization it
//! offers unbounded non-destructive lookahead and token pushback.
//!
//! # Example Usage
//!
//! ```
//! use calx_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("x = 2 ^ y");
//!
//! // Look ahead without committing
//! let ahead = lexer.peek_n(2).unwrap();
//! assert_eq!(ahead[1].operator().unwrap().lexeme(), "=");
//!
//! // Then take tokens one at a time
//! assert_eq!(lexer.consume().unwrap().kind, TokenKind::Identifier("x".into()));
//!
//! // Or iterate the rest
//! let rest: Vec<_> = lexer.collect::<Result<_, _>>().unwrap();
//! assert_eq!(rest.len(), 4);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - tokens, operators and the precedence table
//! - [`lexer`] - the lexer
//! - [`cursor`] - character cursor with one-character pushback
//! - [`unicode`] - character classification
//! - [`error`] - lexical errors
//!
//! # Token Categories
//!
//! - **Numbers**: `42`, `.5`, `3.14`, `2.5E+3`; text is kept as written
//! - **Strings**: `'single'` or `"double"` quoted, no escapes
//! - **Identifiers**: a letter or `_`, then letters, digits and `_`
//! - **Operators**: `++ -- + - * / ^ ! != && || == = >= > <= <`
//! - **Delimiters**: any other single character, including a lone `&` or `|`
//! - **End of input**: the end of the text, a NUL or U+0003

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{Operator, Precedence, Token, TokenKind, OPERATORS};

/// Tokenizes `source` completely.
///
/// The returned tokens end with the [`TokenKind::EndOfInput`] token.
///
/// # Errors
///
/// Returns the first [`LexError`] met.
///
/// # Example
///
/// ```
/// let tokens = calx_lex::tokenize("a || b").unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert!(tokens[3].is_end());
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let (token, more) = lexer.consume_checked()?;
        tokens.push(token);
        if !more {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    fn op(lexeme: &str) -> Operator {
        *OPERATORS.iter().find(|op| op.lexeme() == lexeme).unwrap()
    }

    #[test]
    fn test_assignment_expression() {
        let source = "total = price * (1 + rate / 100)";
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::Identifier("total".into()),
                TokenKind::Operator(op("=")),
                TokenKind::Identifier("price".into()),
                TokenKind::Operator(op("*")),
                TokenKind::Delimiter('('),
                TokenKind::NumberLiteral("1".into()),
                TokenKind::Operator(op("+")),
                TokenKind::Identifier("rate".into()),
                TokenKind::Operator(op("/")),
                TokenKind::NumberLiteral("100".into()),
                TokenKind::Delimiter(')'),
                TokenKind::EndOfInput('\0'),
            ]
        );
    }

    #[test]
    fn test_logical_expression() {
        let source = "!done && (count >= 10 || name != \"root\")";
        let tokens = kinds(source);
        assert_eq!(tokens[0], TokenKind::Operator(op("!")));
        assert_eq!(tokens[2], TokenKind::Operator(op("&&")));
        assert_eq!(tokens[5], TokenKind::Operator(op(">=")));
        assert_eq!(tokens[7], TokenKind::Operator(op("||")));
        assert_eq!(tokens[9], TokenKind::Operator(op("!=")));
        assert_eq!(tokens[10], TokenKind::StringLiteral("root".into()));
    }

    #[test]
    fn test_power_is_right_assoc_marker() {
        let tokens = tokenize("2 ^ 3 ^ 2").unwrap();
        let carets: Vec<_> = tokens.iter().filter_map(Token::operator).collect();
        assert_eq!(carets.len(), 2);
        assert!(carets.iter().all(|op| !op.is_left_assoc()));
        assert_eq!(carets[0].precedence(), Precedence::Power);
    }

    #[test]
    fn test_tokenize_error() {
        let err = tokenize("x = 'open").unwrap_err();
        assert_eq!(err.pos().index, 9);
    }

    #[test]
    fn test_tokenize_stops_at_end_of_transmission() {
        let tokens = tokenize("a\u{3}b").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].kind, TokenKind::EndOfInput('\u{3}'));
    }
}
