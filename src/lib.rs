#![forbid(unsafe_code)]
//! QBasic-dialect front end: command-line driver and debug tree printer.
//!
//! The language itself (lexer, parser, AST, diagnostics) lives in the `qbasic_syntax` crate
//! and is re-exported here. This crate adds the process-facing pieces.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod format;

pub use qbasic_syntax::{ast, diagnostics, keywords, lexer, operators, parse_source, parser};

pub use format::{FormatConfig, print_program, print_program_with_config, print_source};
