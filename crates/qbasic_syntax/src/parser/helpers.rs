/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting token kinds and keywords
/// - Layout handling (`skip_newlines`)
/// - Nesting depth tracking (`enter_nesting`, `leave_nesting`)
/// - Building "expected X, found Y" errors at the cursor
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Return the current token without consuming it, or `None` past the last token.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Consume the current token and return it. Does nothing at end of input.
    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().is_some_and(|t| t.is_keyword(id))
    }

    /// Return `true` at end of input or in front of a keyword that closes a body.
    fn at_block_end(&self) -> bool {
        self.peek().is_none_or(|t| t.is_block_terminator())
    }

    /// If the current token is the given keyword, consume it and return it.
    fn match_keyword(&mut self, id: KeywordId) -> Option<&'a Token> {
        if self.check_keyword(id) { self.advance() } else { None }
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            self.advance().ok_or_else(|| self.error_here(expected))
        } else {
            Err(self.error_here(expected))
        }
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<&'a Token, ParseError> {
        match self.match_keyword(id) {
            Some(token) => Ok(token),
            None => Err(self.error_here(&format!("'{}'", keywords::as_str(id)))),
        }
    }

    fn skip_newlines(&mut self) {
        while self.check(TokenKind::NewLine) {
            self.advance();
        }
    }

    /// Open one nesting level, failing at the current token once [`MAX_NESTING_DEPTH`] is reached.
    fn enter_nesting(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_here("shallower nesting"));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// "expected `expected`" at the current token, or at end of input.
    fn error_here(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::unexpected(expected, token),
            None => ParseError::unexpected_end(expected, self.end, self.end_offset),
        }
    }
}
