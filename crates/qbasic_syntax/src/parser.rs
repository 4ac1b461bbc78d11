//! Parser for the BASIC dialect
//!
//! Converts a [`TokenStream`] into a [`Program`]: recursive descent for statements and
//! precedence climbing for arithmetic expressions.
//!
//! ## Examples
//!
//! ```rust
//! use qbasic_syntax::{lexer, parser};
//!
//! let source = "for i = 1 to 10 step 2\n  print i\nnext i\n";
//! let tokens = lexer::lex(source).unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.statements.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::ParseError;
use crate::keywords::{self, KeywordId};
use crate::lexer::{Token, TokenKind, TokenStream};
use crate::operators::{self, NO_PRECEDENCE};

/// Deepest combined nesting of parentheses, prefix operands and statement bodies.
pub const MAX_NESTING_DEPTH: usize = 128;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
