//! Lexer and parser errors.
//!
//! Every error carries the 1-based row/column of the offending input and a byte span, so the
//! CLI can render it with source highlighting through `miette`. Both phases are fail-fast: the
//! first error aborts and nothing partial is returned.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::{Position, Span};
use crate::lexer::Token;

/// Errors raised while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LexError {
    #[error("unrecognized character '{}' at {row}:{col}", .found.escape_default())]
    #[diagnostic(
        code(qbasic::lex::unrecognized_character),
        help("identifiers are letters only; supported symbols are , ; = + - * / ( )")
    )]
    UnrecognizedCharacter {
        found: char,
        row: usize,
        col: usize,
        #[label("not valid here")]
        span: SourceSpan,
    },
}

impl LexError {
    pub fn unrecognized(found: char, at: Position, span: Span) -> Self {
        LexError::UnrecognizedCharacter {
            found,
            row: at.row,
            col: at.col,
            span: span.into(),
        }
    }

    pub fn row(&self) -> usize {
        match self {
            LexError::UnrecognizedCharacter { row, .. } => *row,
        }
    }

    pub fn col(&self) -> usize {
        match self {
            LexError::UnrecognizedCharacter { col, .. } => *col,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.row(), self.col())
    }
}

/// Errors raised while building the AST.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    /// The parser needed `expected` but saw `found` (a token description or "end of input").
    #[error("expected {expected}, found {found} at {row}:{col}")]
    #[diagnostic(code(qbasic::parse::unexpected_token))]
    UnexpectedToken {
        expected: String,
        found: String,
        row: usize,
        col: usize,
        #[label("expected {expected}")]
        span: SourceSpan,
    },

    /// `next` named a different variable than the `for` it closes.
    #[error("'next {found_name}' does not match loop variable '{expected_name}' at {row}:{col}")]
    #[diagnostic(
        code(qbasic::parse::mismatched_loop_variable),
        help("close the loop with 'next {expected_name}'")
    )]
    MismatchedLoopVariable {
        expected_name: String,
        found_name: String,
        row: usize,
        col: usize,
        #[label("expected '{expected_name}'")]
        span: SourceSpan,
    },
}

impl ParseError {
    /// Build an [`ParseError::UnexpectedToken`] for `found`.
    pub fn unexpected(expected: impl Into<String>, found: &Token) -> Self {
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found: found.describe(),
            row: found.row,
            col: found.col,
            span: found.span.into(),
        }
    }

    /// Build an [`ParseError::UnexpectedToken`] for running out of tokens at `end`.
    pub fn unexpected_end(expected: impl Into<String>, end: Position, offset: usize) -> Self {
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found: "end of input".to_string(),
            row: end.row,
            col: end.col,
            span: Span::new(offset, offset).into(),
        }
    }

    pub fn mismatched_loop_variable(expected_name: &str, found: &Token) -> Self {
        ParseError::MismatchedLoopVariable {
            expected_name: expected_name.to_string(),
            found_name: found.text().to_string(),
            row: found.row,
            col: found.col,
            span: found.span.into(),
        }
    }

    pub fn row(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { row, .. } | ParseError::MismatchedLoopVariable { row, .. } => *row,
        }
    }

    pub fn col(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { col, .. } | ParseError::MismatchedLoopVariable { col, .. } => *col,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.row(), self.col())
    }
}

/// Either phase's error, as returned by [`crate::parse_source`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    pub fn position(&self) -> Position {
        match self {
            SyntaxError::Lex(err) => err.position(),
            SyntaxError::Parse(err) => err.position(),
        }
    }
}
