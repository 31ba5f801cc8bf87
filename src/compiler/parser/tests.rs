#[cfg(test)]
pub mod tests {
    use crate::compiler::{
        ast::{BinaryOperator, Expression, LocalVar, Program},
        lexer::{lexer::Lexer, tokens::Lex},
        parser::{parse, ParserError, ParserResult},
        source::{Offset, Source, Span},
        CompilerDisplay,
    };

    fn new_span(l: u32, h: u32) -> Span {
        Span::new(Offset::new(l), Offset::new(h))
    }

    fn parse_text(text: &str) -> ParserResult<Program> {
        let src = Source::new(text);
        let tokens = Lexer::new(&src).tokenize().expect("Expected valid tokens");
        parse(&tokens)
    }

    /// Parses a single statement and renders it as an s-expression.
    fn sexpr(text: &str) -> String {
        let program = parse_text(text).unwrap();
        assert_eq!(program.statements().len(), 1, "{}", text);
        format!("{}", program.statements()[0])
    }

    #[test]
    fn parse_integer() {
        let program = parse_text("42;").unwrap();
        assert_eq!(
            program.statements(),
            &[Expression::Integer(new_span(0, 2), 42)]
        );
        assert!(program.vars().is_empty());
    }

    #[test]
    fn parse_empty_program() {
        for text in vec!["", "  \n\t"] {
            let program = parse_text(text).unwrap();
            assert!(program.statements().is_empty());
            assert!(program.vars().is_empty());
        }
    }

    #[test]
    fn parse_arithmetic_expressions() {
        for (text, expected) in vec![
            ("2+2;", BinaryOperator::Add),
            ("2-2;", BinaryOperator::Sub),
            ("2*2;", BinaryOperator::Mul),
            ("2/2;", BinaryOperator::Div),
            ("2==2;", BinaryOperator::Eq),
            ("2!=2;", BinaryOperator::NEq),
            ("2<2;", BinaryOperator::Ls),
            ("2<=2;", BinaryOperator::LsEq),
        ]
        .into_iter()
        {
            let program = parse_text(text).unwrap();
            match &program.statements()[0] {
                Expression::BinaryOp(_, op, l, r) => {
                    assert_eq!(*op, expected, "{}", text);
                    assert_eq!(**l, Expression::Integer(new_span(0, 1), 2));
                    assert!(matches!(**r, Expression::Integer(_, 2)));
                }
                e => panic!("Expected binary operator for {} but got {}", text, e),
            }
        }
    }

    #[test]
    fn parse_precedence() {
        for (text, expected) in vec![
            ("1+2*3;", "(+ 1 (* 2 3))"),
            ("1*2+3;", "(+ (* 1 2) 3)"),
            ("(1+2)*3;", "(* (+ 1 2) 3)"),
            ("1+2<3*4;", "(< (+ 1 2) (* 3 4))"),
            ("1<2==3<=4;", "(== (< 1 2) (<= 3 4))"),
            ("1==2!=3;", "(!= (== 1 2) 3)"),
            ("a=1+2==3;", "(= var[8] (== (+ 1 2) 3))"),
            ("((((1))));", "1"),
        ]
        .into_iter()
        {
            assert_eq!(sexpr(text), expected, "{}", text);
        }
    }

    #[test]
    fn parse_left_associative() {
        for (text, expected) in vec![
            ("1-2-3;", "(- (- 1 2) 3)"),
            ("8/4/2;", "(/ (/ 8 4) 2)"),
            ("1<2<3;", "(< (< 1 2) 3)"),
            ("1+2-3+4;", "(+ (- (+ 1 2) 3) 4)"),
        ]
        .into_iter()
        {
            assert_eq!(sexpr(text), expected, "{}", text);
        }
    }

    #[test]
    fn parse_greater_than_swaps_operands() {
        for (text, expected) in vec![
            ("1>2;", "(< 2 1)"),
            ("1>=2;", "(<= 2 1)"),
            ("a>b;", "(< var[16] var[8])"),
            ("1+2>3*4;", "(< (* 3 4) (+ 1 2))"),
        ]
        .into_iter()
        {
            assert_eq!(sexpr(text), expected, "{}", text);
        }
    }

    #[test]
    fn parse_unary_operators() {
        for (text, expected) in vec![
            ("-3;", "(- 0 3)"),
            ("+3;", "3"),
            ("-a;", "(- 0 var[8])"),
            ("-(1+2);", "(- 0 (+ 1 2))"),
            ("2*-3;", "(* 2 (- 0 3))"),
            ("-3*2;", "(* (- 0 3) 2)"),
            ("1- -1;", "(- 1 (- 0 1))"),
        ]
        .into_iter()
        {
            assert_eq!(sexpr(text), expected, "{}", text);
        }
    }

    #[test]
    fn parse_unary_minus_span() {
        let program = parse_text("-7;").unwrap();
        assert_eq!(
            program.statements()[0],
            Expression::BinaryOp(
                new_span(0, 2),
                BinaryOperator::Sub,
                Box::new(Expression::Integer(new_span(0, 1), 0)),
                Box::new(Expression::Integer(new_span(1, 2), 7)),
            )
        );
    }

    #[test]
    fn parse_assignment() {
        let program = parse_text("a = 3;").unwrap();
        assert_eq!(
            program.statements()[0],
            Expression::Assign(
                new_span(0, 5),
                Box::new(Expression::Variable(new_span(0, 1), LocalVar::new(8))),
                Box::new(Expression::Integer(new_span(4, 5), 3)),
            )
        );
    }

    #[test]
    fn parse_assignment_is_right_associative() {
        for (text, expected) in vec![
            ("a=b=1;", "(= var[8] (= var[16] 1))"),
            ("a=b=c=a;", "(= var[8] (= var[16] (= var[24] var[8])))"),
            ("(a)=1;", "(= var[8] 1)"),
        ]
        .into_iter()
        {
            assert_eq!(sexpr(text), expected, "{}", text);
        }
    }

    #[test]
    fn parse_multiple_statements() {
        let program = parse_text("a = 1;\nb = a + 1;\nb;").unwrap();
        let stmts: Vec<String> = program
            .statements()
            .iter()
            .map(|s| format!("{}", s))
            .collect();
        assert_eq!(
            stmts,
            vec!["(= var[8] 1)", "(= var[16] (+ var[8] 1))", "var[16]"]
        );
    }

    #[test]
    fn variables_in_first_occurrence_order() {
        let program = parse_text("z = 1; a = z; m; a; z;").unwrap();
        let vars: Vec<(String, u32)> = program
            .vars()
            .iter()
            .map(|vd| (vd.name.clone(), vd.var.offset()))
            .collect();
        assert_eq!(
            vars,
            vec![("z".into(), 8), ("a".into(), 16), ("m".into(), 24)]
        );
        assert_eq!(program.vars().stack_size(), 24);
    }

    #[test]
    fn variable_read_before_write_gets_a_slot() {
        let program = parse_text("q;").unwrap();
        assert_eq!(program.vars().find("q"), Some(LocalVar::new(8)));
    }

    #[test]
    fn parse_is_deterministic() {
        let text = "c = 2; b = c * 3; a = b - c; a >= b == c;";
        let first = parse_text(text).unwrap();
        let second = parse_text(text).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn parse_many_statements() {
        let text: String = (0..250).map(|i| format!("{};", i)).collect();
        let program = parse_text(&text).unwrap();
        assert_eq!(program.statements().len(), 250);
        assert_eq!(
            format!("{}", program.statements()[249]),
            "249"
        );
    }

    #[test]
    fn parse_all_twenty_six_variables() {
        let text: String = ('a'..='z').map(|c| format!("{}={};", c, c)).collect();
        let program = parse_text(&text).unwrap();
        assert_eq!(program.vars().len(), 26);
        assert_eq!(program.vars().find("z"), Some(LocalVar::new(208)));
    }

    #[test]
    fn invalid_assign_target() {
        for (text, span) in vec![
            ("1 = 2;", new_span(0, 1)),
            ("a + 1 = 2;", new_span(0, 5)),
            ("(a + 1) = 2;", new_span(1, 6)),
            ("a = 1 = 2;", new_span(4, 5)),
            ("-a = 2;", new_span(0, 2)),
        ]
        .into_iter()
        {
            let err = parse_text(text).unwrap_err();
            assert_eq!(*err.inner(), ParserError::InvalidAssignTarget, "{}", text);
            assert_eq!(err.span(), span, "{}", text);
        }
    }

    #[test]
    fn syntax_errors() {
        for (text, expected, span) in vec![
            (
                "1 + 2",
                ParserError::ExpectedButFound(vec![Lex::Semicolon], Lex::Eof),
                new_span(5, 5),
            ),
            (
                "1 2;",
                ParserError::ExpectedButFound(vec![Lex::Semicolon], Lex::Integer(2)),
                new_span(2, 3),
            ),
            (
                "(1;",
                ParserError::ExpectedButFound(vec![Lex::RParen], Lex::Semicolon),
                new_span(2, 3),
            ),
            (
                "1 + ;",
                ParserError::ExpectedTerm(Lex::Semicolon),
                new_span(4, 5),
            ),
            (";", ParserError::ExpectedTerm(Lex::Semicolon), new_span(0, 1)),
            (")", ParserError::ExpectedTerm(Lex::RParen), new_span(0, 1)),
            ("1 *", ParserError::ExpectedTerm(Lex::Eof), new_span(3, 3)),
            (
                "-;",
                ParserError::ExpectedTermAfter(Lex::Minus, Lex::Semicolon),
                new_span(1, 2),
            ),
            (
                "--1;",
                ParserError::ExpectedTermAfter(Lex::Minus, Lex::Minus),
                new_span(1, 2),
            ),
            (
                "a = +;",
                ParserError::ExpectedTermAfter(Lex::Add, Lex::Semicolon),
                new_span(5, 6),
            ),
        ]
        .into_iter()
        {
            let err = parse_text(text).unwrap_err();
            assert_eq!(*err.inner(), expected, "{}", text);
            assert_eq!(err.span(), span, "{}", text);
        }
    }

    #[test]
    fn missing_eof() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(*err.inner(), ParserError::MissingEof);

        let src = Source::new("1;");
        let mut tokens = Lexer::new(&src).tokenize().unwrap();
        tokens.pop();
        let err = parse(&tokens).unwrap_err();
        assert_eq!(*err.inner(), ParserError::MissingEof);
    }

    #[test]
    fn error_messages() {
        for (text, expected) in vec![
            ("1 + 2", "1 + 2\n     ^ L1: Expected ;, but found EOF"),
            (
                "a = 1;\n1 = 2;",
                "1 = 2;\n^ L2: Left side of = must be a variable",
            ),
            (
                "(1 + a;",
                "(1 + a;\n      ^ L1: Expected ), but found ;",
            ),
            (
                "b = -);",
                "b = -);\n     ^ L1: Expected term after -, but found )",
            ),
            (
                "7 * ;",
                "7 * ;\n    ^ L1: Expected a number, a variable or (, but found ;",
            ),
        ]
        .into_iter()
        {
            let src = Source::new(text);
            let tokens = Lexer::new(&src).tokenize().unwrap();
            let err = parse(&tokens).unwrap_err();
            assert_eq!(err.fmt(&src).unwrap(), expected, "{}", text);
        }
    }
}
