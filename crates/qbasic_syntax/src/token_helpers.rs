//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! Keywords share [`TokenKind::UnquotedString`] with identifiers, so keyword checks have to
//! look at the token text. These helpers keep that lookup in one place.

use crate::keywords::{self, KeywordId};
use crate::lexer::{Token, TokenKind};

impl TokenKind {
    /// Return `true` if this kind can start an atom (identifier, number or string).
    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            TokenKind::UnquotedString | TokenKind::Number | TokenKind::QuotedString
        )
    }
}

impl Token {
    /// Return the keyword id, if this is a word token spelling a keyword.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self.kind {
            TokenKind::UnquotedString => keywords::from_str(self.text()),
            _ => None,
        }
    }

    /// Return `true` if this token is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.keyword_id() == Some(id)
    }

    /// Return `true` if this token is a keyword that closes a statement body.
    pub fn is_block_terminator(&self) -> bool {
        self.keyword_id().is_some_and(keywords::is_block_terminator)
    }
}
