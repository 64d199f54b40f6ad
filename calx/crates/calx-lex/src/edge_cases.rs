//! Edge case tests for calx-lex
