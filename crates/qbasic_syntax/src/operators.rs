//! Operator vocabulary.
//!
//! Defines the arithmetic operator set with its precedence and fixity. The expression
//! parser reads precedence from here rather than hard-coding it.
//!
//! All infix operators associate left; the parser gets that from climbing at the
//! operator's own precedence for the right operand.
//!
//! ## Notes
//! - Higher precedence binds tighter: `+ -` are `0`, `* /` are `1`.
//! - Every other token has precedence [`NO_PRECEDENCE`], which is also the lowest value an
//!   expression is ever parsed at, so it can never continue an infix chain.
//!
//! ## Examples
//! ```rust
//! use qbasic_syntax::lexer::TokenKind;
//! use qbasic_syntax::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_token_kind(TokenKind::Asterisk), Some(OperatorId::Star));
//! assert_eq!(operators::infix_precedence(TokenKind::Plus), 0);
//! assert_eq!(operators::infix_precedence(TokenKind::Comma), operators::NO_PRECEDENCE);
//! ```

use crate::lexer::TokenKind;

/// Precedence of tokens that are not infix operators.
pub const NO_PRECEDENCE: i32 = -1;

/// Stable identifier for every operator.
///
/// Declaration order matches [`OPERATORS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    Plus,
    Minus,
    Star,
    Slash,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub token: TokenKind,
    pub spelling: &'static str,
    pub precedence: i32,
    /// Also usable as a unary prefix operator.
    pub prefix: bool,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Plus, TokenKind::Plus, "+", 0, false),
    op(OperatorId::Minus, TokenKind::Minus, "-", 0, true),
    op(OperatorId::Star, TokenKind::Asterisk, "*", 1, false),
    op(OperatorId::Slash, TokenKind::Slash, "/", 1, false),
];

/// Return the full metadata entry for an operator.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Resolve an operator spelling (`"+"`, `"*"`, ...) to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Resolve a token kind to the operator it spells, if any.
pub fn from_token_kind(kind: TokenKind) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.token == kind).map(|o| o.id)
}

/// Binding power of `kind` in infix position, or [`NO_PRECEDENCE`].
pub fn infix_precedence(kind: TokenKind) -> i32 {
    from_token_kind(kind).map_or(NO_PRECEDENCE, |id| info_for(id).precedence)
}

/// Return `true` if `kind` may start a prefix expression.
pub fn is_prefix(kind: TokenKind) -> bool {
    from_token_kind(kind).is_some_and(|id| info_for(id).prefix)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, token: TokenKind, spelling: &'static str, precedence: i32, prefix: bool) -> OperatorInfo {
    OperatorInfo {
        id,
        token,
        spelling,
        precedence,
        prefix,
    }
}
