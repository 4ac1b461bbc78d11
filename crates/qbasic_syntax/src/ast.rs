//! Abstract Syntax Tree definitions for the BASIC dialect
//!
//! Every node owns its children; leaves own a copy of the token they were built from, so a
//! [`Program`] stays valid after the [`TokenStream`](crate::lexer::TokenStream) it was parsed
//! from has been dropped.

use crate::lexer::Token;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// 1-based row/column position of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { row: 1, col: 1 }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// A parsed program: the ordered list of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

// ============================================================================
// Statements
// ============================================================================

/// Statements, in execution order inside their enclosing body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assign(AssignStatement),
    Print(PrintStatement),
    If(IfStatement),
    Loop(LoopStatement),
    For(ForStatement),
}

impl Statement {
    /// Position of the token that introduced the statement.
    pub fn keyword_position(&self) -> Position {
        match self {
            Statement::Assign(assign) => assign.identifier.token.position(),
            Statement::Print(print) => print.keyword.position(),
            Statement::If(if_stmt) => if_stmt.keyword.position(),
            Statement::Loop(loop_stmt) => loop_stmt.keyword.position(),
            Statement::For(for_stmt) => for_stmt.keyword.position(),
        }
    }
}

/// `name = expression`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStatement {
    pub identifier: Identifier,
    pub expression: Expr,
}

/// `print a, b; c`
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStatement {
    pub keyword: Token,
    pub arguments: Vec<Expr>,
}

/// `if ... then ... [elseif ... then ...]* [else ...] end if`
///
/// `elses` holds one synthetic `IfStatement` per `elseif` clause, in source order, followed
/// by at most one `else` clause whose condition is [`Expr::ConstTrue`]. An evaluator can walk
/// `elses` and take the first branch whose condition holds.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub keyword: Token,
    pub condition: Expr,
    pub body: Vec<Statement>,
    pub elses: Vec<IfStatement>,
}

impl IfStatement {
    /// Return `true` for the synthetic branch built from an `else` clause.
    pub fn is_else_branch(&self) -> bool {
        matches!(self.condition, Expr::ConstTrue(_))
    }
}

/// Whether a `do` loop runs while its condition holds or until it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopKind {
    While,
    Until,
}

impl LoopKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoopKind::While => "while",
            LoopKind::Until => "until",
        }
    }
}

/// `do while|until condition ... loop`
#[derive(Debug, Clone, PartialEq)]
pub struct LoopStatement {
    pub keyword: Token,
    pub kind: LoopKind,
    pub condition: Expr,
    pub body: Vec<Statement>,
}

/// `for i = initial to end_value [step step] ... next i`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub keyword: Token,
    pub control: Identifier,
    pub initial: Expr,
    pub end_value: Expr,
    pub step: Option<Expr>,
    pub body: Vec<Statement>,
}

// ============================================================================
// Expressions
// ============================================================================

/// A variable reference. The name is the lowercased token text.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        Self { token }
    }

    pub fn name(&self) -> &str {
        self.token.text()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    ConstNumber(Token),
    ConstString(Token),
    /// Always-true condition standing in for the `else` branch of an `if`.
    /// The token is the `else` keyword.
    ConstTrue(Token),
    Prefix {
        operator: Token,
        operand: Box<Expr>,
    },
    Infix {
        operator: Token,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn prefix(operator: Token, operand: Expr) -> Self {
        Expr::Prefix {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn infix(operator: Token, left: Expr, right: Expr) -> Self {
        Expr::Infix {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Position of the leftmost token of the expression.
    pub fn position(&self) -> Position {
        match self {
            Expr::Identifier(ident) => ident.token.position(),
            Expr::ConstNumber(token) | Expr::ConstString(token) | Expr::ConstTrue(token) => token.position(),
            Expr::Prefix { operator, .. } => operator.position(),
            Expr::Infix { left, .. } => left.position(),
        }
    }

    /// Numeric value of a [`Expr::ConstNumber`].
    ///
    /// The lexer accepts any run of digits and dots, so `1.2.3` is a valid number token. This
    /// returns `None` for such text and for non-number expressions.
    pub fn number_value(&self) -> Option<f64> {
        match self {
            Expr::ConstNumber(token) => token.text().parse::<f64>().ok(),
            _ => None,
        }
    }
}
