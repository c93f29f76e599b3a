use std::thread;

use rpncalc::{Calculator, EvaluationError, evaluate_expression};

fn assert_value(src: &str, expected: f64) {
    match evaluate_expression(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "'{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: &EvaluationError) {
    match evaluate_expression(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "'{src}' failed with the wrong error"),
    }
}

fn assert_malformed(src: &str) {
    let result = evaluate_expression(src);
    assert!(matches!(result, Err(EvaluationError::MalformedExpression { .. })),
            "'{src}' should be malformed, got {result:?}");
}

#[test]
fn precedence_and_parentheses() {
    assert_value("3 + 4 * 2", 11.0);
    assert_value("(3 + 4) * 2", 14.0);
    assert_value("2 * (3 + (4 - 1)) / 3", 4.0);
    assert_value("1 + 2 ^ 3 * 2", 17.0);
    assert_value("((7))", 7.0);
}

#[test]
fn left_associativity() {
    assert_value("10 - 2 - 3", 5.0);
    assert_value("12 / 4 / 3", 1.0);
    assert_value("2 ^ 3 ^ 2", 64.0);
}

#[test]
fn numbers() {
    assert_value("42", 42.0);
    assert_value("1.5 + .5", 2.0);
    assert_value("1. + 1", 2.0);
    assert_value("  7  ", 7.0);
    assert_value("0.1 + 0.2", 0.3);
}

#[test]
fn power() {
    assert_value("2 ^ 3", 8.0);
    assert_value("0 ^ 0", 1.0);
    assert_value("4 ^ 0.5", 2.0);
    assert_value("2 ^ -1", 0.5);
}

#[test]
fn negative_base_with_fractional_exponent_is_nan() {
    let value = evaluate_expression("(0 - 8) ^ 0.5").unwrap();
    assert!(value.is_nan());
}

#[test]
fn factorial() {
    assert_value("5!", 120.0);
    assert_value("0!", 1.0);
    assert_value("3!!", 720.0);
    assert_value("3! + 1", 7.0);
    assert_value("3! - 1", 5.0);
    assert_value("2 ^ 3!", 64.0);
    assert!(evaluate_expression("171!").unwrap().is_infinite());
}

#[test]
fn unary_minus() {
    assert_value("-2 + 5", 3.0);
    assert_value("2 * -3", -6.0);
    assert_value("4 - -2", 6.0);
    assert_value("- -3", 3.0);
    assert_value("-(2 + 3)", -5.0);
    assert_value("-3!", -6.0);
    assert_value("-2 ^ 2", 4.0);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("5 / 0", &EvaluationError::DivisionByZero);
    assert_failure("0 / 0", &EvaluationError::DivisionByZero);
    assert_failure("5 / (2 - 2)", &EvaluationError::DivisionByZero);
    assert_failure("5 / -0", &EvaluationError::DivisionByZero);
}

#[test]
fn invalid_factorial_operand_is_error() {
    assert_failure("(-1)!", &EvaluationError::InvalidFactorialOperand { operand: -1.0 });
    assert_failure("2.5!", &EvaluationError::InvalidFactorialOperand { operand: 2.5 });
    assert_failure("(1 / 2)!", &EvaluationError::InvalidFactorialOperand { operand: 0.5 });
    assert_failure("171!!",
                   &EvaluationError::InvalidFactorialOperand { operand: f64::INFINITY });
}

#[test]
fn malformed_expressions() {
    assert_malformed("+");
    assert_malformed("3 4");
    assert_malformed("3 +");
    assert_malformed("* 3");
    assert_malformed("-");
    assert_malformed("()");
    assert_malformed("2 (3)");
    assert_malformed("!");
}

#[test]
fn invalid_number_literal_is_malformed() {
    assert_malformed("1.2.3");
    assert_malformed(".");
    assert_malformed("1 + ..");
}

#[test]
fn invalid_characters() {
    assert_failure("3 & 4",
                   &EvaluationError::InvalidCharacter { character: '&',
                                                        position:  2, });
    assert_failure("abc",
                   &EvaluationError::InvalidCharacter { character: 'a',
                                                        position:  0, });
    assert_failure("3\t+ 4",
                   &EvaluationError::InvalidCharacter { character: '\t',
                                                        position:  1, });
    assert_failure("2 × 3",
                   &EvaluationError::InvalidCharacter { character: '×',
                                                        position:  2, });
}

#[test]
fn invalid_character_is_reported_before_empty_input() {
    assert_failure("   %",
                   &EvaluationError::InvalidCharacter { character: '%',
                                                        position:  3, });
}

#[test]
fn empty_expression() {
    assert_failure("", &EvaluationError::EmptyExpression);
    assert_failure("    ", &EvaluationError::EmptyExpression);
}

#[test]
fn unmatched_parenthesis() {
    assert_failure("(3 + 4", &EvaluationError::UnmatchedParenthesis);
    assert_failure("3 + 4)", &EvaluationError::UnmatchedParenthesis);
    assert_failure(")(", &EvaluationError::UnmatchedParenthesis);
    assert_failure("((1)", &EvaluationError::UnmatchedParenthesis);
}

#[test]
fn repeated_evaluation_is_identical() {
    for src in ["3 + 4 * 2", "5 / 0", "(-1)!", "3 4", "(0 - 8) ^ 0.5", "171!"] {
        let first = evaluate_expression(src);
        let second = evaluate_expression(src);
        match (&first, &second) {
            (Ok(a), Ok(b)) => assert_eq!(a.to_bits(), b.to_bits(), "'{src}': {a} vs {b}"),
            _ => assert_eq!(first, second, "'{src}'"),
        }
    }
}

#[test]
fn calculator_is_shared_across_threads() {
    let calculator = Calculator::default();
    thread::scope(|scope| {
        for n in 1..=8u32 {
            let calculator = &calculator;
            scope.spawn(move || {
                     let result = calculator.evaluate_expression(&format!("{n}! / {n}")).unwrap();
                     let expected = (1..n).map(f64::from).product::<f64>();
                     assert!((result - expected).abs() < 1e-9);
                 });
        }
    });
}

#[test]
fn error_messages() {
    assert_eq!(EvaluationError::DivisionByZero.to_string(), "Division by zero.");
    assert_eq!(EvaluationError::EmptyExpression.to_string(), "Expression is empty.");
    assert_eq!(EvaluationError::UnknownOperator { symbol: '&' }.to_string(),
               "Unknown operator '&'.");
    assert_eq!(EvaluationError::InvalidCharacter { character: '&',
                                                   position:  2, }.to_string(),
               "Invalid character '&' at position 2.");
    assert_eq!(EvaluationError::InvalidFactorialOperand { operand: -1.0 }.to_string(),
               "Factorial is only defined for non-negative integers, but found -1.");
}
