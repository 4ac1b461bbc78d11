//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use miette::{Diagnostic, NamedSource, Report};
use qbasic_syntax::ast::Program;
use qbasic_syntax::lexer::{self, Token, TokenStream};
use qbasic_syntax::parser;

use super::{CliError, CliResult, ExitCode};
use crate::format::print_program;

/// Maximum source file size (16 MiB)
///
/// Files larger than this are rejected before reading.
const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Read source file contents as raw bytes.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (16 MiB)
pub fn read_source(file_path: &Path) -> CliResult<Vec<u8>> {
    let shown = file_path.display();
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", shown, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            shown,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", shown, e)))
}

/// Render a diagnostic against the file it came from.
fn render_diagnostic<E>(file_path: &Path, source: &[u8], err: E) -> String
where
    E: Diagnostic + Send + Sync + 'static,
{
    let text = String::from_utf8_lossy(source).into_owned();
    let report = Report::new(err).with_source_code(NamedSource::new(file_path.display().to_string(), text));
    format!("{report:?}")
}

fn lex_source(file_path: &Path, source: &[u8]) -> CliResult<TokenStream> {
    lexer::tokenize(source).map_err(|err| {
        tracing::debug!(row = err.row(), col = err.col(), "lexing failed");
        CliError::new(render_diagnostic(file_path, source, err), ExitCode::LEX_ERROR)
    })
}

fn parse_tokens(file_path: &Path, source: &[u8], tokens: &TokenStream) -> CliResult<Program> {
    parser::parse(tokens).map_err(|err| {
        tracing::debug!(row = err.row(), col = err.col(), "parsing failed");
        CliError::new(render_diagnostic(file_path, source, err), ExitCode::PARSE_ERROR)
    })
}

/// Read, lex and parse a file.
pub fn load_program(file_path: &Path) -> CliResult<Program> {
    let source = read_source(file_path)?;
    let tokens = lex_source(file_path, &source)?;
    parse_tokens(file_path, &source, &tokens)
}

/// One token-dump line: `KIND | text | row | col`.
///
/// Control characters in the text are escaped so each token stays on one line.
pub fn format_token(token: &Token) -> String {
    let text = match &token.text {
        Some(text) => text.escape_default().to_string(),
        None => token.kind.symbol().map(|c| c.escape_default().to_string()).unwrap_or_default(),
    };
    format!("{} | {} | {} | {}", token.kind, text, token.row, token.col)
}

/// Lex and display tokens.
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lex_source(file_path, &source)?;

    for tok in &tokens {
        println!("{}", format_token(tok));
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display AST.
pub fn parse_file(file_path: &Path, debug: bool) -> CliResult<ExitCode> {
    let program = load_program(file_path)?;
    if debug {
        println!("{:#?}", program);
    } else {
        print!("{}", print_program(&program));
    }
    Ok(ExitCode::SUCCESS)
}

/// Lex and parse a file without printing the result.
pub fn check_file(file_path: &Path) -> CliResult<ExitCode> {
    let program = load_program(file_path)?;
    println!("✓ Syntax check passed ({} statements)", program.len());
    Ok(ExitCode::SUCCESS)
}
