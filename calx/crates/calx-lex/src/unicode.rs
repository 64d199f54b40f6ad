//! Character classification for the calx lexer.

/// U+0003 END OF TRANSMISSION, an explicit end-of-input marker.
pub const END_OF_TRANSMISSION: char = '\u{3}';

/// Checks if a character marks the end of input.
///
/// Both the NUL character (what the cursor yields once exhausted) and
/// U+0003 end the token stream.
#[inline]
pub fn is_end_of_input(c: char) -> bool {
    c == '\0' || c == END_OF_TRANSMISSION
}

/// Checks if a character is valid as the start of an identifier.
///
/// # Example
///
/// ```
/// use calx_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('+'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character may continue an identifier.
///
/// # Example
///
/// ```
/// use calx_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('1'));
/// assert!(is_ident_continue('_'));
/// assert!(!is_ident_continue('.'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Checks if a character is a decimal digit usable in a number literal.
///
/// Only ASCII `0`-`9` count. Other Unicode decimal digits such as `٣` do
/// not start a number; they lex as delimiters and may only continue an
/// identifier.
///
/// ```
/// use calx_lex::unicode::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(!is_digit('٣'));
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character opens (and closes) a string literal.
#[inline]
pub fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

/// Checks if a character introduces the exponent of a number literal.
#[inline]
pub fn is_exponent_marker(c: char) -> bool {
    c == 'e' || c == 'E'
}

/// Checks if a character is an exponent sign.
#[inline]
pub fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

/// Checks if a character can begin an operator.
///
/// Only the first character is checked; whether it actually forms an
/// operator is decided by the operator table (a lone `&` or `|` does not).
#[inline]
pub fn is_operator_start(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '^' | '!' | '&' | '|' | '=' | '>' | '<'
    )
}
