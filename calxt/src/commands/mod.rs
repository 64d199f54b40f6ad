//! Command modules for the calxt CLI.
//!
//! Each subcommand lives in its own file with an `*Args` struct and a
//! `run_*` entry point.

pub mod common;

pub mod config;
pub mod peek;
pub mod tokens;

pub use config::{run_config, ConfigArgs};
pub use peek::{run_peek, PeekArgs};
pub use tokens::{run_tokens, TokensArgs};
