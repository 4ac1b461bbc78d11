//! Debug tree printer for parsed programs
//!
//! Renders a [`Program`] as indented text for inspection (`qbasic parse`). The printer only
//! reads the AST.

mod config;
mod printer;
mod writer;

pub use config::FormatConfig;
pub use printer::TreePrinter;

use qbasic_syntax::ast::Program;
use qbasic_syntax::diagnostics::SyntaxError;

/// Render a program with default settings
pub fn print_program(program: &Program) -> String {
    print_program_with_config(program, FormatConfig::default())
}

/// Render a program with custom configuration
pub fn print_program_with_config(program: &Program, config: FormatConfig) -> String {
    TreePrinter::new(config).print(program)
}

/// Lex, parse and render source text
pub fn print_source(source: &str) -> Result<String, SyntaxError> {
    let program = qbasic_syntax::parse_source(source)?;
    Ok(print_program(&program))
}
