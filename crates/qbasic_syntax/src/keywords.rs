//! Reserved keyword vocabulary for the BASIC dialect.
//!
//! A stable identifier ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) recording the
//! spelling and role of every reserved word.
//!
//! ## Notes
//! - The lexer lowercases every word, so lookup via [`from_str`] compares against lowercase
//!   spellings only.
//! - Keywords are not reserved at the token level: the lexer emits them as ordinary
//!   [`TokenKind::UnquotedString`](crate::lexer::TokenKind::UnquotedString) tokens and the
//!   parser decides whether a word is a keyword by position.
//!
//! ## Examples
//! ```rust
//! use qbasic_syntax::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("elseif"), Some(KeywordId::ElseIf));
//! assert_eq!(keywords::as_str(KeywordId::ElseIf), "elseif");
//! assert!(keywords::is_block_terminator(KeywordId::Next));
//! ```

/// Stable identifier for every reserved keyword.
///
/// Declaration order matches [`KEYWORDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Print,
    If,
    Then,
    ElseIf,
    Else,
    End,
    Do,
    While,
    Until,
    Loop,
    For,
    To,
    Step,
    Next,
}

/// What a keyword does where it appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordRole {
    /// Starts a statement (`print`, `if`, `do`, `for`).
    StatementStart,
    /// Separates parts inside a statement header (`then`, `while`, `to`, ...).
    Clause,
    /// Closes the body of a block statement; `parse_statements` stops in front of it.
    BlockTerminator,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub spelling: &'static str,
    pub role: KeywordRole,
}

/// Registry of all keywords, in [`KeywordId`] declaration order.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Print, "print", KeywordRole::StatementStart),
    info(KeywordId::If, "if", KeywordRole::StatementStart),
    info(KeywordId::Then, "then", KeywordRole::Clause),
    info(KeywordId::ElseIf, "elseif", KeywordRole::BlockTerminator),
    info(KeywordId::Else, "else", KeywordRole::BlockTerminator),
    info(KeywordId::End, "end", KeywordRole::BlockTerminator),
    info(KeywordId::Do, "do", KeywordRole::StatementStart),
    info(KeywordId::While, "while", KeywordRole::Clause),
    info(KeywordId::Until, "until", KeywordRole::Clause),
    info(KeywordId::Loop, "loop", KeywordRole::BlockTerminator),
    info(KeywordId::For, "for", KeywordRole::StatementStart),
    info(KeywordId::To, "to", KeywordRole::Clause),
    info(KeywordId::Step, "step", KeywordRole::Clause),
    info(KeywordId::Next, "next", KeywordRole::BlockTerminator),
];

/// Full metadata for a keyword.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Canonical (lowercase) spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).spelling
}

/// Role of the keyword in the grammar.
pub fn role(id: KeywordId) -> KeywordRole {
    info_for(id).role
}

/// Return `true` for the keywords that end a statement body: `end`, `else`, `elseif`, `loop`
/// and `next`.
pub fn is_block_terminator(id: KeywordId) -> bool {
    role(id) == KeywordRole::BlockTerminator
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is exactly a lowercase keyword spelling.
/// - `None` otherwise (including uppercase input; the lexer lowercases before this is called).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.spelling == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, spelling: &'static str, role: KeywordRole) -> KeywordInfo {
    KeywordInfo { id, spelling, role }
}
