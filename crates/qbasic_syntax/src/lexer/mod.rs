//! Lexer for the BASIC dialect
//!
//! Handles tokenization including:
//! - Identifiers and keywords (ASCII letters only, lowercased)
//! - Quoted strings and unvalidated number literals
//! - Single-character punctuation and arithmetic operators
//! - Newlines as significant tokens, with 1-based row/column tracking
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, TokenStream)

pub mod tokens;

pub use tokens::{Token, TokenKind, TokenStream};

use crate::ast::{Position, Span};
use crate::diagnostics::LexError;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// At every position the recognizers are tried in a fixed order and the first
// one that consumes input wins:
//
//   whitespace → word → quoted string → newline → number → symbol → error
//
// A letter can therefore never start a number or a string, and no recognizer
// competes with another for the longest match.
// ============================================================================

/// Lexer for BASIC source code.
///
/// Works on bytes: only ASCII letters, digits, whitespace and punctuation are
/// recognized outside of quoted strings.
pub struct Lexer<'a> {
    source: &'a [u8],
    pos: usize,
    row: usize,
    col: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source buffer.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            pos: 0,
            row: 1,
            col: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire buffer.
    ///
    /// Stops at the first byte no recognizer accepts.
    pub fn tokenize(mut self) -> Result<TokenStream, LexError> {
        while !self.is_at_end() {
            if self.skip_whitespace() > 0 {
                continue;
            }
            if self.scan_word() || self.scan_string() || self.scan_newline() || self.scan_number() || self.scan_symbol()
            {
                continue;
            }
            return Err(self.unrecognized());
        }

        Ok(TokenStream::new(
            self.tokens,
            Position::new(self.row, self.col),
            self.pos,
        ))
    }

    // ========================================================================
    // Core byte handling
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    /// Consume bytes while `pred` holds and return how many were consumed.
    fn consume_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    fn slice_text(&self, start: usize, end: usize) -> String {
        String::from_utf8_lossy(&self.source[start..end]).into_owned()
    }

    fn push(&mut self, kind: TokenKind, col: usize, text: Option<String>, start: usize) {
        self.tokens
            .push(Token::new(kind, self.row, col, text, Span::new(start, self.pos)));
    }

    // ========================================================================
    // Recognizers
    // ========================================================================

    fn skip_whitespace(&mut self) -> usize {
        let read = self.consume_while(is_basic_whitespace);
        self.col += read;
        read
    }

    fn scan_word(&mut self) -> bool {
        if !self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            return false;
        }
        let start = self.pos;
        let read = self.consume_while(|c| c.is_ascii_alphabetic());
        let text = self.slice_text(start, self.pos).to_ascii_lowercase();
        self.push(TokenKind::UnquotedString, self.col, Some(text), start);
        self.col += read;
        true
    }

    /// A string may contain raw newlines. They do not advance `row`: the whole literal counts
    /// toward `col`, so later tokens on its starting row report columns past the line break.
    fn scan_string(&mut self) -> bool {
        if self.peek() != Some(b'"') {
            return false;
        }
        let start = self.pos;
        self.pos += 1;
        let content_start = self.pos;
        self.consume_while(|c| c != b'"');
        let content_end = self.pos;
        if self.is_at_end() {
            tracing::debug!(row = self.row, col = self.col, "unterminated string literal runs to end of input");
        } else {
            // closing quote
            self.pos += 1;
        }
        let text = self.slice_text(content_start, content_end);
        self.push(TokenKind::QuotedString, self.col, Some(text), start);
        self.col += self.pos - start;
        true
    }

    fn scan_newline(&mut self) -> bool {
        if self.peek() != Some(b'\n') {
            return false;
        }
        let start = self.pos;
        self.pos += 1;
        self.push(TokenKind::NewLine, self.col, None, start);
        self.row += 1;
        self.col = 1;
        true
    }

    fn scan_number(&mut self) -> bool {
        if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
            return false;
        }
        let start = self.pos;
        let read = self.consume_while(|c| c.is_ascii_digit() || c == b'.');
        let text = self.slice_text(start, self.pos);
        self.push(TokenKind::Number, self.col, Some(text), start);
        self.col += read;
        true
    }

    fn scan_symbol(&mut self) -> bool {
        let Some(kind) = self.peek().and_then(TokenKind::from_symbol) else {
            return false;
        };
        let start = self.pos;
        self.pos += 1;
        let text = kind.symbol().map(String::from);
        self.push(kind, self.col, text, start);
        self.col += 1;
        true
    }

    fn unrecognized(&self) -> LexError {
        let rest = &self.source[self.pos..self.source.len().min(self.pos + 4)];
        let (found, len) = match String::from_utf8_lossy(rest).chars().next() {
            Some(c) if c != char::REPLACEMENT_CHARACTER => (c, c.len_utf8()),
            _ => (char::REPLACEMENT_CHARACTER, 1),
        };
        LexError::unrecognized(found, Position::new(self.row, self.col), Span::new(self.pos, self.pos + len))
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn is_basic_whitespace(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

/// Tokenize a raw byte buffer.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &[u8]) -> Result<TokenStream, LexError> {
    let tokens = Lexer::new(source).tokenize()?;
    tracing::debug!(token_count = tokens.len(), "lexed source");
    Ok(tokens)
}

/// Convenience function to lex a source string.
pub fn lex(source: &str) -> Result<TokenStream, LexError> {
    tokenize(source.as_bytes())
}

// ============================================================================
// TESTS
// ============================================================================
