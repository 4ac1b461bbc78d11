//! Token types for the BASIC lexer.
//!
//! Keywords are not a separate token kind: identifiers and keywords are both
//! [`TokenKind::UnquotedString`] with lowercased text, and the parser resolves keywords
//! through [`crate::keywords`].

use crate::ast::{Position, Span};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Literals and words ==========
    QuotedString,
    /// Identifier or keyword, lowercased.
    UnquotedString,
    /// Digits and decimal points, not validated.
    Number,

    // ========== Layout ==========
    NewLine,

    // ========== Punctuation ==========
    Comma,
    Semicolon,
    AssignOperator,
    OpenParen,
    CloseParen,

    // ========== Arithmetic operators ==========
    Plus,
    Minus,
    Asterisk,
    Slash,

    // ========== Reserved (never produced by the scanner) ==========
    Equals,
    GreaterThan,
    LessThan,
}

impl TokenKind {
    /// Upper-snake name used by the token dump.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::QuotedString => "QUOTED_STRING",
            TokenKind::UnquotedString => "UNQUOTED_STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::NewLine => "NEW_LINE",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::AssignOperator => "ASSIGN_OPERATOR",
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Equals => "EQUALS",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::LessThan => "LESS_THAN",
        }
    }

    /// Source spelling of single-character tokens.
    pub fn symbol(&self) -> Option<char> {
        match self {
            TokenKind::Comma => Some(','),
            TokenKind::Semicolon => Some(';'),
            TokenKind::AssignOperator => Some('='),
            TokenKind::OpenParen => Some('('),
            TokenKind::CloseParen => Some(')'),
            TokenKind::Plus => Some('+'),
            TokenKind::Minus => Some('-'),
            TokenKind::Asterisk => Some('*'),
            TokenKind::Slash => Some('/'),
            TokenKind::NewLine => Some('\n'),
            _ => None,
        }
    }

    /// Map a single punctuation/operator byte to its token kind.
    pub fn from_symbol(c: u8) -> Option<TokenKind> {
        match c {
            b',' => Some(TokenKind::Comma),
            b';' => Some(TokenKind::Semicolon),
            b'=' => Some(TokenKind::AssignOperator),
            b'+' => Some(TokenKind::Plus),
            b'-' => Some(TokenKind::Minus),
            b'*' => Some(TokenKind::Asterisk),
            b'/' => Some(TokenKind::Slash),
            b'(' => Some(TokenKind::OpenParen),
            b')' => Some(TokenKind::CloseParen),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, positioned lexical unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based line.
    pub row: usize,
    /// 1-based column, counted in bytes.
    pub col: usize,
    pub text: Option<String>,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, row: usize, col: usize, text: Option<String>, span: Span) -> Self {
        Self {
            kind,
            row,
            col,
            text,
            span,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Text payload, or `""` for tokens without one.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Short human description used in diagnostics, e.g. `'then'` or `newline`.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::NewLine => "newline".to_string(),
            TokenKind::QuotedString => format!("string \"{}\"", self.text()),
            TokenKind::Number => format!("number '{}'", self.text()),
            _ => format!("'{}'", self.text()),
        }
    }
}

/// The complete ordered output of lexing one source buffer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    end: Position,
    end_offset: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>, end: Position, end_offset: usize) -> Self {
        Self {
            tokens,
            end,
            end_offset,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Row/column just past the last byte of input.
    pub fn end_position(&self) -> Position {
        self.end
    }

    /// Byte offset just past the last byte of input.
    pub fn end_offset(&self) -> usize {
        self.end_offset
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl std::ops::Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}
