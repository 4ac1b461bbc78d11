/// Miscellaneous parser utilities.
///
/// Identifier handling shared by assignments, `for` headers and `next`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier(&mut self) -> Result<Identifier, ParseError> {
        let token = self.expect(TokenKind::UnquotedString, "identifier")?;
        Ok(Identifier::new(token.clone()))
    }
}
