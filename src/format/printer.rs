//! Debug tree printer
//!
//! Walks the AST and renders one line per statement header, with bodies indented:
//!
//! ```text
//! IDENT(i) = 1
//! do while IDENT(i)
//!     print(IDENT(i), "left")
//!     IDENT(i) = (IDENT(i) - 1)
//! loop
//! ```
//!
//! Every infix expression is fully parenthesized, so the output shows how the parser grouped it.

use qbasic_syntax::ast::*;

use super::config::FormatConfig;
use super::writer::FormatWriter;

/// Printer that renders an AST as an indented tree
pub struct TreePrinter {
    writer: FormatWriter,
}

impl TreePrinter {
    /// Create a new printer with the given config
    pub fn new(config: FormatConfig) -> Self {
        Self {
            writer: FormatWriter::new(config),
        }
    }

    /// Render a program
    pub fn print(mut self, program: &Program) -> String {
        self.print_body(&program.statements);
        self.writer.finish()
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn print_body(&mut self, statements: &[Statement]) {
        for stmt in statements {
            self.print_statement(stmt);
        }
    }

    fn print_indented(&mut self, statements: &[Statement]) {
        self.writer.indent();
        self.print_body(statements);
        self.writer.dedent();
    }

    fn print_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Assign(assign) => {
                self.print_identifier(&assign.identifier);
                self.writer.write(" = ");
                self.print_expr(&assign.expression);
                self.writer.newline();
            }
            Statement::Print(print) => {
                self.writer.write("print(");
                for (i, arg) in print.arguments.iter().enumerate() {
                    if i > 0 {
                        self.writer.write(", ");
                    }
                    self.print_expr(arg);
                }
                self.writer.writeln(")");
            }
            Statement::If(if_stmt) => self.print_if(if_stmt),
            Statement::Loop(loop_stmt) => {
                self.writer.write("do ");
                self.writer.write(loop_stmt.kind.as_str());
                self.writer.write(" ");
                self.print_expr(&loop_stmt.condition);
                self.writer.newline();
                self.print_indented(&loop_stmt.body);
                self.writer.writeln("loop");
            }
            Statement::For(for_stmt) => self.print_for(for_stmt),
        }
    }

    fn print_if(&mut self, if_stmt: &IfStatement) {
        self.writer.write("if ");
        self.print_expr(&if_stmt.condition);
        self.writer.writeln(" then");
        self.print_indented(&if_stmt.body);

        for branch in &if_stmt.elses {
            if branch.is_else_branch() {
                self.writer.writeln("else");
            } else {
                self.writer.write("elseif ");
                self.print_expr(&branch.condition);
                self.writer.writeln(" then");
            }
            self.print_indented(&branch.body);
        }
        self.writer.writeln("end if");
    }

    fn print_for(&mut self, for_stmt: &ForStatement) {
        self.writer.write("for ");
        self.print_identifier(&for_stmt.control);
        self.writer.write(" = ");
        self.print_expr(&for_stmt.initial);
        self.writer.write(" to ");
        self.print_expr(&for_stmt.end_value);
        if let Some(step) = &for_stmt.step {
            self.writer.write(" step ");
            self.print_expr(step);
        }
        self.writer.newline();
        self.print_indented(&for_stmt.body);
        self.writer.write("next ");
        self.print_identifier(&for_stmt.control);
        self.writer.newline();
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn print_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Identifier(ident) => self.print_identifier(ident),
            Expr::ConstNumber(token) => self.writer.write(token.text()),
            Expr::ConstString(token) => {
                self.writer.write("\"");
                self.writer.write(token.text());
                self.writer.write("\"");
            }
            Expr::ConstTrue(_) => self.writer.write("TRUE"),
            Expr::Prefix { operator, operand } => {
                self.writer.write(operator.text());
                self.writer.write("(");
                self.print_expr(operand);
                self.writer.write(")");
            }
            Expr::Infix { operator, left, right } => {
                self.writer.write("(");
                self.print_expr(left);
                self.writer.write(" ");
                self.writer.write(operator.text());
                self.writer.write(" ");
                self.print_expr(right);
                self.writer.write(")");
            }
        }
    }

    fn print_identifier(&mut self, ident: &Identifier) {
        self.writer.write("IDENT(");
        self.writer.write(ident.name());
        self.writer.write(")");
    }
}
