/// Expression parsing methods.
///
/// Precedence climbing over the binding powers in [`crate::operators`]:
/// `+ -` bind at `0`, `* /` at `1`, and every other token at [`NO_PRECEDENCE`].
///
/// ## Notes
/// - An expression is optional: [`Parser::expression`] returns `Ok(None)` when the current
///   token cannot start one. Callers that need a value use [`Parser::expect_expression`].
/// - A `NewLine` or `)` always ends the infix loop; the `)` is left for the caller.
/// - `(` and prefix `-` each open a nesting level, checked against [`MAX_NESTING_DEPTH`].
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self, min_precedence: i32) -> Result<Option<Expr>, ParseError> {
        let Some(token) = self.peek() else {
            return Ok(None);
        };

        let mut left = if token.kind == TokenKind::OpenParen {
            self.enter_nesting()?;
            self.advance();
            let inner = self.expect_expression(NO_PRECEDENCE)?;
            self.expect(TokenKind::CloseParen, "')'")?;
            self.leave_nesting();
            inner
        } else if token.kind.is_atom() {
            self.advance();
            atom(token)
        } else if operators::is_prefix(token.kind) {
            self.enter_nesting()?;
            self.advance();
            // the operand extends as far as an unparenthesized expression does
            let operand = self.expect_expression(NO_PRECEDENCE)?;
            self.leave_nesting();
            Expr::prefix(token.clone(), operand)
        } else {
            return Ok(None);
        };

        while let Some(operator) = self.peek() {
            if matches!(operator.kind, TokenKind::NewLine | TokenKind::CloseParen) {
                break;
            }
            let precedence = operators::infix_precedence(operator.kind);
            if precedence <= min_precedence {
                break;
            }
            self.advance();
            let right = self.expect_expression(precedence)?;
            left = Expr::infix(operator.clone(), left, right);
        }

        Ok(Some(left))
    }

    fn expect_expression(&mut self, min_precedence: i32) -> Result<Expr, ParseError> {
        match self.expression(min_precedence)? {
            Some(expr) => Ok(expr),
            None => Err(self.error_here("expression")),
        }
    }
}

fn atom(token: &Token) -> Expr {
    match token.kind {
        TokenKind::QuotedString => Expr::ConstString(token.clone()),
        TokenKind::Number => Expr::ConstNumber(token.clone()),
        _ => Expr::Identifier(Identifier::new(token.clone())),
    }
}
