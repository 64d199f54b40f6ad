//! Lexer module.
//!
//! The lexer implementation is split by concern:
//! - `core` - the `Lexer` struct, lookahead and pushback
//! - `scanner` - whitespace skipping and first-character dispatch
//! - `identifier` - identifier lexing
//! - `number` - number literal lexing and grammar checks
//! - `string` - quoted string lexing
//! - `operator` - operator table lookup

mod core;
mod identifier;
mod number;
mod operator;
mod scanner;
mod string;

pub use core::Lexer;
