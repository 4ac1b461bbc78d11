/// Parser core type and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
/// - Parsing is fail-fast: the first error is returned and nothing partial survives.
/// - Parentheses, prefix operands and statement bodies together nest at most
///   [`MAX_NESTING_DEPTH`] levels deep; deeper input is a [`ParseError`].
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    end: Position,
    end_offset: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `qbasic_syntax::lexer`.
    pub fn new(tokens: &'a TokenStream) -> Self {
        Self {
            tokens: tokens.as_slice(),
            pos: 0,
            end: tokens.end_position(),
            end_offset: tokens.end_offset(),
            depth: 0,
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns the first [`ParseError`] encountered. A block terminator (`end`, `else`,
    /// `elseif`, `loop`, `next`) with no open block is reported as an unexpected token.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        let statements = self.statements()?;

        if let Some(token) = self.peek() {
            return Err(ParseError::unexpected("statement", token));
        }

        Ok(Program { statements })
    }
}
