/// Parse a token stream into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `qbasic_syntax::lexer`.
///
/// ## Errors
/// Returns the first [`ParseError`] encountered.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &TokenStream) -> Result<Program, ParseError> {
    let program = Parser::new(tokens).parse()?;
    tracing::debug!(statements = program.len(), "parsed program");
    Ok(program)
}
