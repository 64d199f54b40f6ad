//! Token type definitions for the calx expression language.
//!
//! A [`Token`] pairs a [`TokenKind`] with the [`Pos`] of the last character
//! it consumed. Operators carry their binding information from a single
//! table, [`OPERATORS`], which the lexer consults for every operator it
//! recognizes.

use std::fmt;

use calx_util::Pos;

/// Binding strength of an operator.
///
/// Several tiers share a numeric level (all relational comparisons, both
/// equality tests); compare with [`Precedence::level`] or
/// [`Precedence::binds_tighter`], never by variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Precedence {
    /// `=`
    Assignment,
    /// `||`
    LogicalOr,
    /// `&&`
    LogicalAnd,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// `+`, `-`
    Addition,
    /// `*`, `/`
    Division,
    /// `^`
    Power,
    /// `!`, `++`, `--`
    Unary,
}

impl Precedence {
    /// Numeric tier; higher binds tighter.
    ///
    /// # Example
    ///
    /// ```
    /// use calx_lex::token::Precedence;
    ///
    /// assert_eq!(Precedence::Unary.level(), 7);
    /// assert_eq!(Precedence::Addition.level(), 2);
    /// assert_eq!(Precedence::LessThan.level(), Precedence::GreaterThanOrEqual.level());
    /// ```
    pub const fn level(self) -> i8 {
        match self {
            Precedence::Unary => 7,
            Precedence::Power => 4,
            Precedence::Division => 3,
            Precedence::Addition => 2,
            Precedence::GreaterThan
            | Precedence::GreaterThanOrEqual
            | Precedence::LessThan
            | Precedence::LessThanOrEqual => 1,
            Precedence::Equal | Precedence::NotEqual => 0,
            Precedence::LogicalAnd => -1,
            Precedence::LogicalOr => -2,
            Precedence::Assignment => -3,
        }
    }

    /// Returns true if `self` binds strictly tighter than `other`.
    #[inline]
    pub const fn binds_tighter(self, other: Precedence) -> bool {
        self.level() > other.level()
    }
}

/// An operator lexeme with its precedence and associativity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Operator {
    lexeme: &'static str,
    precedence: Precedence,
    left_assoc: bool,
}

impl Operator {
    const fn new(lexeme: &'static str, precedence: Precedence, left_assoc: bool) -> Self {
        Self {
            lexeme,
            precedence,
            left_assoc,
        }
    }

    /// The one- or two-character source text.
    #[inline]
    pub fn lexeme(&self) -> &'static str {
        self.lexeme
    }

    /// Binding strength.
    #[inline]
    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    /// Whether repeated application groups left-to-right.
    ///
    /// `false` for unary operators, assignment and `^`; for `^` the parser is
    /// expected to fold right-to-left.
    #[inline]
    pub fn is_left_assoc(&self) -> bool {
        self.left_assoc
    }

    /// Looks up the operator spelled `first` followed by `second`, or by
    /// `first` alone when `second` is `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use calx_lex::token::{Operator, Precedence};
    ///
    /// let op = Operator::lookup('=', Some('=')).unwrap();
    /// assert_eq!(op.lexeme(), "==");
    /// assert_eq!(op.precedence(), Precedence::Equal);
    ///
    /// assert!(Operator::lookup('&', None).is_none());
    /// assert!(Operator::lookup('+', Some('-')).is_none());
    /// ```
    pub fn lookup(first: char, second: Option<char>) -> Option<Operator> {
        OPERATORS.iter().copied().find(|op| {
            let mut chars = op.lexeme.chars();
            chars.next() == Some(first) && chars.next() == second
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme)
    }
}

/// Every operator the lexer recognizes.
pub static OPERATORS: &[Operator] = &[
    Operator::new("++", Precedence::Unary, false),
    Operator::new("--", Precedence::Unary, false),
    Operator::new("+", Precedence::Addition, true),
    Operator::new("-", Precedence::Addition, true),
    Operator::new("*", Precedence::Division, true),
    Operator::new("/", Precedence::Division, true),
    Operator::new("^", Precedence::Power, false),
    Operator::new("!=", Precedence::NotEqual, true),
    Operator::new("!", Precedence::Unary, false),
    Operator::new("&&", Precedence::LogicalAnd, true),
    Operator::new("||", Precedence::LogicalOr, true),
    Operator::new("==", Precedence::Equal, true),
    Operator::new("=", Precedence::Assignment, false),
    Operator::new(">=", Precedence::GreaterThanOrEqual, true),
    Operator::new(">", Precedence::GreaterThan, true),
    Operator::new("<=", Precedence::LessThanOrEqual, true),
    Operator::new("<", Precedence::LessThan, true),
];

/// The classification of a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input, carrying the character that ended it (`'\0'` or U+0003)
    EndOfInput(char),
    /// Any single character not claimed by another kind
    Delimiter(char),
    /// Letters, digits and underscores, not starting with a digit
    Identifier(String),
    /// Quoted text, without its delimiters
    StringLiteral(String),
    /// Number text as written, grammar-checked but not converted
    NumberLiteral(String),
    /// An operator from [`OPERATORS`]
    Operator(Operator),
}

impl TokenKind {
    /// Short lowercase name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EndOfInput(_) => "end of input",
            TokenKind::Delimiter(_) => "delimiter",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::StringLiteral(_) => "string",
            TokenKind::NumberLiteral(_) => "number",
            TokenKind::Operator(_) => "operator",
        }
    }
}

/// A classified unit of input.
///
/// `pos` is the position of the last character the token consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What the token is
    pub kind: TokenKind,
    /// Where it ended
    pub pos: Pos,
}

impl Token {
    /// Create a token.
    pub fn new(kind: TokenKind, pos: Pos) -> Self {
        Self { kind, pos }
    }

    /// Returns true for [`TokenKind::EndOfInput`].
    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput(_))
    }

    /// Accumulated text of identifier, string and number tokens.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Identifier(text)
            | TokenKind::StringLiteral(text)
            | TokenKind::NumberLiteral(text) => Some(text),
            _ => None,
        }
    }

    /// The operator, if this is an operator token.
    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// Returns true if this is a delimiter carrying `c`.
    #[inline]
    pub fn is_delimiter(&self, c: char) -> bool {
        self.kind == TokenKind::Delimiter(c)
    }

    /// Converts a number token's text to a value.
    ///
    /// Returns `None` for other kinds and for text that is grammatical but
    /// has no value, such as `1e`.
    ///
    /// # Example
    ///
    /// ```
    /// use calx_lex::{Token, TokenKind};
    /// use calx_util::Pos;
    ///
    /// let token = Token::new(TokenKind::NumberLiteral("12.5e-3".into()), Pos::START);
    /// assert_eq!(token.number_value(), Some(0.0125));
    /// ```
    pub fn number_value(&self) -> Option<f64> {
        match &self.kind {
            TokenKind::NumberLiteral(text) => text.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::EndOfInput(_) => write!(f, "end of input"),
            TokenKind::Delimiter(c) => write!(f, "delimiter {:?}", c),
            TokenKind::Identifier(text) => write!(f, "identifier {}", text),
            TokenKind::StringLiteral(text) => write!(f, "string {:?}", text),
            TokenKind::NumberLiteral(text) => write!(f, "number {}", text),
            TokenKind::Operator(op) => write!(f, "operator {}", op),
        }
    }
}
