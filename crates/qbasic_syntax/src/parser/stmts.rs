/// Statement parsing methods.
///
/// This chunk parses statement lists and the statement forms: `print`, assignment,
/// `if`/`elseif`/`else`/`end if`, `do while|until ... loop` and `for ... next`.
///
/// ## Notes
/// - Bodies end in front of a block terminator (`end`, `else`, `elseif`, `loop`, `next`);
///   the terminator is left for the enclosing statement to consume.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statements(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut stmts = Vec::new();
        loop {
            self.skip_newlines();
            if self.at_block_end() {
                break;
            }
            stmts.push(self.statement()?);
        }
        Ok(stmts)
    }

    /// Statement list of a nested body (`then`, `else`, loop bodies).
    fn body(&mut self) -> Result<Vec<Statement>, ParseError> {
        self.enter_nesting()?;
        let stmts = self.statements()?;
        self.leave_nesting();
        Ok(stmts)
    }

    fn statement(&mut self) -> Result<Statement, ParseError> {
        let Some(token) = self.peek() else {
            return Err(self.error_here("statement"));
        };

        match token.keyword_id() {
            Some(KeywordId::Print) => self.print_stmt(),
            Some(KeywordId::If) => self.if_stmt().map(Statement::If),
            Some(KeywordId::Do) => self.loop_stmt(),
            Some(KeywordId::For) => self.for_stmt(),
            _ if token.kind == TokenKind::UnquotedString => self.assign_stmt(),
            _ => Err(ParseError::unexpected("statement", token)),
        }
    }

    fn print_stmt(&mut self) -> Result<Statement, ParseError> {
        let keyword = self.expect_keyword(KeywordId::Print)?.clone();
        let mut arguments = Vec::new();

        let mut next = self.expression(NO_PRECEDENCE)?;
        while let Some(argument) = next.take() {
            arguments.push(argument);
            match self.peek() {
                Some(t) if matches!(t.kind, TokenKind::Comma | TokenKind::Semicolon) => {
                    self.advance();
                    next = self.expression(NO_PRECEDENCE)?;
                }
                Some(t) if t.kind == TokenKind::NewLine => {}
                None => {}
                Some(t) => return Err(ParseError::unexpected("',', ';' or end of line", t)),
            }
        }
        self.skip_newlines();

        Ok(Statement::Print(PrintStatement { keyword, arguments }))
    }

    fn assign_stmt(&mut self) -> Result<Statement, ParseError> {
        let identifier = self.identifier()?;
        self.expect(TokenKind::AssignOperator, "'='")?;
        let expression = self.expect_expression(NO_PRECEDENCE)?;
        Ok(Statement::Assign(AssignStatement { identifier, expression }))
    }

    fn if_stmt(&mut self) -> Result<IfStatement, ParseError> {
        let keyword = self.expect_keyword(KeywordId::If)?.clone();
        let condition = self.expect_expression(NO_PRECEDENCE)?;
        self.expect_keyword(KeywordId::Then)?;
        let body = self.body()?;

        let mut elses = Vec::new();
        loop {
            if let Some(keyword) = self.match_keyword(KeywordId::ElseIf) {
                let condition = self.expect_expression(NO_PRECEDENCE)?;
                self.expect_keyword(KeywordId::Then)?;
                let body = self.body()?;
                elses.push(IfStatement {
                    keyword: keyword.clone(),
                    condition,
                    body,
                    elses: Vec::new(),
                });
            } else if let Some(keyword) = self.match_keyword(KeywordId::Else) {
                let body = self.body()?;
                elses.push(IfStatement {
                    keyword: keyword.clone(),
                    condition: Expr::ConstTrue(keyword.clone()),
                    body,
                    elses: Vec::new(),
                });
                // `else` is always the last branch
                break;
            } else {
                break;
            }
        }

        self.expect_keyword(KeywordId::End)?;
        self.expect_keyword(KeywordId::If)?;

        Ok(IfStatement {
            keyword,
            condition,
            body,
            elses,
        })
    }

    fn loop_stmt(&mut self) -> Result<Statement, ParseError> {
        let keyword = self.expect_keyword(KeywordId::Do)?.clone();
        let kind = if self.match_keyword(KeywordId::While).is_some() {
            LoopKind::While
        } else if self.match_keyword(KeywordId::Until).is_some() {
            LoopKind::Until
        } else {
            return Err(self.error_here("'while' or 'until'"));
        };
        let condition = self.expect_expression(NO_PRECEDENCE)?;
        let body = self.body()?;
        self.expect_keyword(KeywordId::Loop)?;

        Ok(Statement::Loop(LoopStatement {
            keyword,
            kind,
            condition,
            body,
        }))
    }

    fn for_stmt(&mut self) -> Result<Statement, ParseError> {
        let keyword = self.expect_keyword(KeywordId::For)?.clone();
        let control = self.identifier()?;
        self.expect(TokenKind::AssignOperator, "'='")?;
        let initial = self.expect_expression(NO_PRECEDENCE)?;
        self.expect_keyword(KeywordId::To)?;
        let end_value = self.expect_expression(NO_PRECEDENCE)?;
        let step = match self.match_keyword(KeywordId::Step) {
            Some(_) => Some(self.expect_expression(NO_PRECEDENCE)?),
            None => None,
        };
        let body = self.body()?;

        self.expect_keyword(KeywordId::Next)?;
        let closing = self.expect(TokenKind::UnquotedString, "identifier")?;
        if closing.text() != control.name() {
            return Err(ParseError::mismatched_loop_variable(control.name(), closing));
        }

        Ok(Statement::For(ForStatement {
            keyword,
            control,
            initial,
            end_value,
            step,
            body,
        }))
    }
}
