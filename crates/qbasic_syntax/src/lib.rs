//! Syntax front end for a small BASIC dialect: lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and does no I/O. Source text goes through
//! [`lexer::lex`] to a [`lexer::TokenStream`] and through [`parser::parse`] to an
//! [`ast::Program`].
//!
//! ## Notes
//! - This crate is "syntax-only": it does no name resolution, type checking or evaluation.
//! - Keywords and operators come from the [`keywords`] and [`operators`] registries.
//!
//! ## Examples
//! ```rust
//! use qbasic_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("x = 1 + 2 * 3\nprint \"x is\", x\n").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.statements.len(), 2);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod keywords;
pub mod lexer;
pub mod operators;
pub mod parser;
pub mod token_helpers;

use ast::Program;
use diagnostics::SyntaxError;

/// Lex and parse `source` in one step.
///
/// ## Errors
/// Returns [`SyntaxError::Lex`] or [`SyntaxError::Parse`] for the first error of either phase.
pub fn parse_source(source: &str) -> Result<Program, SyntaxError> {
    let tokens = lexer::lex(source)?;
    Ok(parser::parse(&tokens)?)
}
