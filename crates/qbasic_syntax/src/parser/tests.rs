#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on the shape of the produced AST and on the exact error raised for
/// each kind of malformed input.
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_str(source: &str) -> Result<Program, ParseError> {
        let tokens = lexer::lex(source).expect("source should lex");
        parse(&tokens)
    }

    fn single(source: &str) -> Statement {
        let program = parse_str(source).unwrap();
        assert_eq!(program.len(), 1, "expected exactly one statement in {source:?}");
        program.statements.into_iter().next().unwrap()
    }

    /// Compact rendering used to compare tree shapes.
    fn show(expr: &Expr) -> String {
        match expr {
            Expr::Identifier(ident) => ident.name().to_string(),
            Expr::ConstNumber(t) => t.text().to_string(),
            Expr::ConstString(t) => format!("{:?}", t.text()),
            Expr::ConstTrue(_) => "TRUE".to_string(),
            Expr::Prefix { operator, operand } => format!("{}({})", operator.text(), show(operand)),
            Expr::Infix { operator, left, right } => {
                format!("({} {} {})", show(left), operator.text(), show(right))
            }
        }
    }

    fn assigned(source: &str) -> String {
        match single(source) {
            Statement::Assign(assign) => show(&assign.expression),
            other => panic!("Expected assignment, got {other:?}"),
        }
    }

    // ---- expressions -------------------------------------------------------

    #[test]
    fn test_multiplication_binds_tighter() {
        assert_eq!(assigned("x = 1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(assigned("x = 1 * 2 + 3"), "((1 * 2) + 3)");
    }

    #[test]
    fn test_same_precedence_is_left_associative() {
        assert_eq!(assigned("x = a - b - c"), "((a - b) - c)");
        assert_eq!(assigned("x = a / b * c"), "((a / b) * c)");
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(assigned("x = (1 + 2) * 3"), "((1 + 2) * 3)");
        assert_eq!(assigned("x = 2 * (a - (b + c))"), "(2 * (a - (b + c)))");
        assert_eq!(assigned("x = ((y))"), "y");
    }

    #[test]
    fn test_prefix_minus() {
        assert_eq!(assigned("x = -1"), "-(1)");
        assert_eq!(assigned("x = -(a * b)"), "-((a * b))");
        // The operand is a full expression.
        assert_eq!(assigned("x = -a + b"), "-((a + b))");
    }

    #[test]
    fn test_atoms() {
        assert_eq!(assigned("x = \"hi\""), "\"hi\"");
        assert_eq!(assigned("x = 1.5"), "1.5");
        assert_eq!(assigned("x = Y"), "y");
    }

    #[test]
    fn test_unclosed_paren() {
        let err = parse_str("x = (1 + 2\n").unwrap_err();
        match err {
            ParseError::UnexpectedToken { expected, found, row, col, .. } => {
                assert_eq!(expected, "')'");
                assert_eq!(found, "newline");
                assert_eq!((row, col), (1, 11));
            }
            other => panic!("Expected UnexpectedToken, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_parens() {
        let err = parse_str("x = ()").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref expected, .. } if expected == "expression"));
    }

    #[test]
    fn test_stray_close_paren_is_left_for_caller() {
        let err = parse_str("x = 1)").unwrap_err();
        match err {
            ParseError::UnexpectedToken { expected, found, .. } => {
                assert_eq!(expected, "statement");
                assert_eq!(found, "')'");
            }
            other => panic!("Expected UnexpectedToken, got {other:?}"),
        }
    }

    #[test]
    fn test_dangling_operator_at_end_of_input() {
        let err = parse_str("x = 1 +").unwrap_err();
        match err {
            ParseError::UnexpectedToken { expected, found, row, col, .. } => {
                assert_eq!(expected, "expression");
                assert_eq!(found, "end of input");
                assert_eq!((row, col), (1, 8));
            }
            other => panic!("Expected UnexpectedToken, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_assignment_value() {
        let err = parse_str("x =\n").unwrap_err();
        assert_eq!(err.position(), Position::new(1, 4));
    }

    // ---- print -------------------------------------------------------------

    #[test]
    fn test_print_arguments() {
        match single("print \"a\", 1 + 2") {
            Statement::Print(print) => {
                let args: Vec<String> = print.arguments.iter().map(show).collect();
                assert_eq!(args, vec!["\"a\"", "(1 + 2)"]);
                assert_eq!(print.keyword.position(), Position::new(1, 1));
            }
            other => panic!("Expected print, got {other:?}"),
        }
    }

    #[test]
    fn test_print_semicolon_and_trailing_separator() {
        match single("print a; b;\n") {
            Statement::Print(print) => assert_eq!(print.arguments.len(), 2),
            other => panic!("Expected print, got {other:?}"),
        }
    }

    #[test]
    fn test_print_without_arguments() {
        let program = parse_str("print\nprint\n").unwrap();
        assert_eq!(program.len(), 2);
        for stmt in &program {
            assert!(matches!(stmt, Statement::Print(p) if p.arguments.is_empty()));
        }
    }

    #[test]
    fn test_print_rejects_missing_separator() {
        let err = parse_str("print a b").unwrap_err();
        match err {
            ParseError::UnexpectedToken { expected, found, col, .. } => {
                assert_eq!(expected, "',', ';' or end of line");
                assert_eq!(found, "'b'");
                assert_eq!(col, 9);
            }
            other => panic!("Expected UnexpectedToken, got {other:?}"),
        }
    }

    // ---- statements --------------------------------------------------------

    #[test]
    fn test_statement_order_and_blank_lines() {
        let program = parse_str("\n\na = 1\n\n\nb = 2\nprint a\n\n").unwrap();
        let positions: Vec<Position> = program.iter().map(Statement::keyword_position).collect();
        assert_eq!(
            positions,
            vec![Position::new(3, 1), Position::new(6, 1), Position::new(7, 1)]
        );
    }

    #[test]
    fn test_empty_program() {
        assert!(parse_str("").unwrap().is_empty());
        assert!(parse_str("\n \n\t\n").unwrap().is_empty());
    }

    #[test]
    fn test_assignment_requires_equals() {
        let err = parse_str("x 1").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref expected, .. } if expected == "'='"));
    }

    #[test]
    fn test_statement_cannot_start_with_number() {
        let err = parse_str("1 = x").unwrap_err();
        match err {
            ParseError::UnexpectedToken { expected, found, .. } => {
                assert_eq!(expected, "statement");
                assert_eq!(found, "number '1'");
            }
            other => panic!("Expected UnexpectedToken, got {other:?}"),
        }
    }

    #[test]
    fn test_block_terminator_at_top_level() {
        for source in ["end if", "next i", "loop", "else\n", "elseif x then"] {
            let err = parse_str(source).unwrap_err();
            assert!(
                matches!(err, ParseError::UnexpectedToken { ref expected, .. } if expected == "statement"),
                "{source:?} gave {err:?}"
            );
        }
    }

    // ---- if ----------------------------------------------------------------

    #[test]
    fn test_if_with_elseifs_and_else() {
        let source = "if a then\n  print 1\nelseif b then\n  print 2\nelseif c then\n  print 3\nelse\n  print 4\n  print 5\nend if\n";
        let if_stmt = match single(source) {
            Statement::If(if_stmt) => if_stmt,
            other => panic!("Expected if, got {other:?}"),
        };
        assert_eq!(show(&if_stmt.condition), "a");
        assert_eq!(if_stmt.body.len(), 1);
        assert_eq!(if_stmt.elses.len(), 3);

        assert_eq!(show(&if_stmt.elses[0].condition), "b");
        assert_eq!(show(&if_stmt.elses[1].condition), "c");
        assert!(!if_stmt.elses[1].is_else_branch());

        let last = &if_stmt.elses[2];
        assert!(last.is_else_branch());
        assert!(matches!(last.condition, Expr::ConstTrue(_)));
        assert_eq!(last.body.len(), 2);
        assert_eq!(last.keyword.position(), Position::new(7, 1));
    }

    #[test]
    fn test_if_without_branches() {
        match single("if x then\nend if") {
            Statement::If(if_stmt) => {
                assert!(if_stmt.body.is_empty());
                assert!(if_stmt.elses.is_empty());
            }
            other => panic!("Expected if, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_if() {
        let source = "if a then\n  if b then\n    x = 1\n  end if\nelse\n  x = 2\nend if\n";
        match single(source) {
            Statement::If(outer) => {
                assert!(matches!(&outer.body[0], Statement::If(inner) if inner.elses.is_empty()));
                assert_eq!(outer.elses.len(), 1);
            }
            other => panic!("Expected if, got {other:?}"),
        }
    }

    #[test]
    fn test_if_missing_then() {
        let err = parse_str("if x print 1\nend if").unwrap_err();
        match err {
            ParseError::UnexpectedToken { expected, found, row, col, .. } => {
                assert_eq!(expected, "'then'");
                assert_eq!(found, "'print'");
                assert_eq!((row, col), (1, 6));
            }
            other => panic!("Expected UnexpectedToken, got {other:?}"),
        }
    }

    #[test]
    fn test_if_requires_end_if() {
        let err = parse_str("if x then\n  y = 1\nend\n").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref expected, ref found, .. }
            if expected == "'if'" && found == "newline"));

        let err = parse_str("if x then\n  y = 1\n").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref expected, ref found, .. }
            if expected == "'end'" && found == "end of input"));
    }

    #[test]
    fn test_no_branch_after_else() {
        let err = parse_str("if x then\nelse\nelseif y then\nend if").unwrap_err();
        match err {
            ParseError::UnexpectedToken { expected, found, row, .. } => {
                assert_eq!(expected, "'end'");
                assert_eq!(found, "'elseif'");
                assert_eq!(row, 3);
            }
            other => panic!("Expected UnexpectedToken, got {other:?}"),
        }
    }

    // ---- do loops ----------------------------------------------------------

    #[test]
    fn test_do_while_and_until() {
        match single("do while i\n  i = i - 1\nloop\n") {
            Statement::Loop(lp) => {
                assert_eq!(lp.kind, LoopKind::While);
                assert_eq!(show(&lp.condition), "i");
                assert_eq!(lp.body.len(), 1);
            }
            other => panic!("Expected loop, got {other:?}"),
        }
        match single("DO UNTIL done\nLOOP") {
            Statement::Loop(lp) => assert_eq!(lp.kind, LoopKind::Until),
            other => panic!("Expected loop, got {other:?}"),
        }
    }

    #[test]
    fn test_do_requires_while_or_until() {
        let err = parse_str("do x\nloop").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref expected, .. } if expected == "'while' or 'until'"));
    }

    #[test]
    fn test_do_requires_loop() {
        let err = parse_str("do while x\nnext x").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref expected, ref found, .. }
            if expected == "'loop'" && found == "'next'"));
    }

    // ---- for loops ---------------------------------------------------------

    #[test]
    fn test_for_with_step() {
        match single("for i = 1 to 10 step 2\n  print i\nnext i\n") {
            Statement::For(f) => {
                assert_eq!(f.control.name(), "i");
                assert_eq!(show(&f.initial), "1");
                assert_eq!(show(&f.end_value), "10");
                assert_eq!(f.step.as_ref().map(show).as_deref(), Some("2"));
                assert_eq!(f.body.len(), 1);
            }
            other => panic!("Expected for, got {other:?}"),
        }
    }

    #[test]
    fn test_for_without_step() {
        match single("for n = a + 1 to b * 2\nnext n") {
            Statement::For(f) => {
                assert_eq!(show(&f.initial), "(a + 1)");
                assert_eq!(show(&f.end_value), "(b * 2)");
                assert!(f.step.is_none());
                assert!(f.body.is_empty());
            }
            other => panic!("Expected for, got {other:?}"),
        }
    }

    #[test]
    fn test_next_variable_is_case_insensitive() {
        assert!(matches!(single("FOR I = 1 TO 3\nNEXT i"), Statement::For(_)));
    }

    #[test]
    fn test_for_mismatched_loop_variable() {
        let err = parse_str("for i = 1 to 3\nnext j\n").unwrap_err();
        match err {
            ParseError::MismatchedLoopVariable {
                expected_name,
                found_name,
                row,
                col,
                ..
            } => {
                assert_eq!(expected_name, "i");
                assert_eq!(found_name, "j");
                assert_eq!((row, col), (2, 6));
            }
            other => panic!("Expected MismatchedLoopVariable, got {other:?}"),
        }
    }

    #[test]
    fn test_for_requires_next_variable() {
        let err = parse_str("for i = 1 to 3\nnext\n").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref expected, .. } if expected == "identifier"));
    }

    #[test]
    fn test_for_missing_to() {
        let err = parse_str("for i = 1 10\nnext i").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref expected, ref found, .. }
            if expected == "'to'" && found == "number '10'"));
    }

    #[test]
    fn test_nested_loops() {
        let source = "for i = 1 to 3\n  for j = 1 to 3\n    do while k\n      k = k - 1\n    loop\n  next j\nnext i\n";
        match single(source) {
            Statement::For(outer) => match &outer.body[0] {
                Statement::For(inner) => {
                    assert_eq!(inner.control.name(), "j");
                    assert!(matches!(inner.body[0], Statement::Loop(_)));
                }
                other => panic!("Expected inner for, got {other:?}"),
            },
            other => panic!("Expected for, got {other:?}"),
        }
    }

    // ---- nesting -----------------------------------------------------------

    fn error_message(source: &str) -> String {
        parse_str(source).unwrap_err().to_string()
    }

    #[test]
    fn test_nesting_within_limit() {
        let depth = MAX_NESTING_DEPTH;
        let source = format!("x = {}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(assigned(&source), "1");

        let source = format!("x = {}1", "-".repeat(depth));
        assert!(assigned(&source).starts_with("-(-("));
    }

    #[test]
    fn test_deeply_nested_parens_are_rejected() {
        let source = format!("x = {}1{}", "(".repeat(10_000), ")".repeat(10_000));
        let err = parse_str(&source).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref expected, .. } if expected == "shallower nesting"));
        assert_eq!(err.position(), Position::new(1, 5 + MAX_NESTING_DEPTH));
    }

    #[test]
    fn test_deeply_nested_prefix_minus_is_rejected() {
        let source = format!("x = {}1", "-".repeat(10_000));
        assert!(matches!(parse_str(&source), Err(ParseError::UnexpectedToken { ref expected, .. })
            if expected == "shallower nesting"));
    }

    #[test]
    fn test_deeply_nested_blocks_are_rejected() {
        let source = format!("{}{}", "if x then\n".repeat(10_000), "end if\n".repeat(10_000));
        let err = parse_str(&source).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref expected, .. } if expected == "shallower nesting"));
        assert_eq!(err.position().row, MAX_NESTING_DEPTH + 1);

        let source = format!("{}{}", "do while x\n".repeat(10_000), "loop\n".repeat(10_000));
        assert!(parse_str(&source).is_err());
    }

    #[test]
    fn test_nesting_depth_is_released_after_each_body() {
        let block = "if x then\n  y = (1)\nend if\n";
        let program = parse_str(&block.repeat(MAX_NESTING_DEPTH * 2)).unwrap();
        assert_eq!(program.len(), MAX_NESTING_DEPTH * 2);
    }

    // ---- messages ----------------------------------------------------------

    #[test]
    fn test_error_messages() {
        insta::assert_snapshot!(error_message("if 1 \n print 1\n"), @"expected 'then', found newline at 1:6");
        insta::assert_snapshot!(error_message("do x\nloop"), @"expected 'while' or 'until', found 'x' at 1:4");
        insta::assert_snapshot!(error_message("for i = 1 to 5\nnext j"), @"'next j' does not match loop variable 'i' at 2:6");
        insta::assert_snapshot!(error_message("x = 1 +"), @"expected expression, found end of input at 1:8");
        insta::assert_snapshot!(
            error_message(&format!("x = {}1", "(".repeat(MAX_NESTING_DEPTH + 1))),
            @"expected shallower nesting, found '(' at 1:133"
        );
    }
}
