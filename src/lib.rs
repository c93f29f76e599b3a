//! # rpncalc
//!
//! rpncalc evaluates arithmetic expressions written as text. An expression is
//! validated, split into tokens, reordered into postfix form with the
//! shunting-yard algorithm, and reduced to a single `f64` on a value stack.
//!
//! Supported syntax: decimal numbers, `+ - * / ^`, postfix factorial `!`,
//! prefix negation `-`, and parentheses. All binary operators are
//! left-associative.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::sync::LazyLock;

use crate::interpreter::{evaluator::EvalResult, lexer::Token};
pub use crate::{error::EvaluationError, interpreter::calculator::Calculator};

/// Provides the error type for validation and evaluation.
///
/// Every failure in the pipeline is an `EvaluationError`. Errors are returned
/// to the caller as values and carry enough detail (offending character,
/// operand, or symbol) for a front end to explain them.
pub mod error;
/// Implements the expression pipeline.
///
/// # Responsibilities
/// - Tokenizes text into numbers and operator symbols.
/// - Reorders tokens into postfix order by precedence.
/// - Evaluates postfix tokens into a single number.
/// - Keeps operator precedence and arity in a data table.
pub mod interpreter;

static STANDARD: LazyLock<Calculator> = LazyLock::new(Calculator::default);

/// Validates and evaluates an expression with the standard operators.
///
/// # Errors
/// Returns an error if the expression contains unsupported characters, is
/// blank, has unbalanced parentheses, or fails during evaluation.
///
/// # Examples
/// ```
/// use rpncalc::{EvaluationError, evaluate_expression};
///
/// assert_eq!(evaluate_expression("(3 + 4) * 2").unwrap(), 14.0);
/// assert_eq!(evaluate_expression("5!").unwrap(), 120.0);
///
/// assert_eq!(evaluate_expression("3 & 4"),
///            Err(EvaluationError::InvalidCharacter { character: '&',
///                                                    position:  2, }));
/// ```
pub fn evaluate_expression(expression: &str) -> EvalResult<f64> {
    STANDARD.evaluate_expression(expression)
}

/// Splits an expression into tokens with the standard operators.
///
/// The character set is not checked here; unsupported symbols become
/// operator tokens and are rejected during evaluation.
///
/// # Errors
/// Returns `MalformedExpression` when a run of digits and decimal points is
/// not a valid number, such as `1.2.3`.
pub fn tokenize(expression: &str) -> EvalResult<Vec<Token>> {
    STANDARD.tokenize(expression)
}

/// Reorders infix tokens into postfix order with the standard operators.
///
/// # Errors
/// Returns `UnmatchedParenthesis` when parentheses do not pair up.
pub fn parse(tokens: &[Token]) -> EvalResult<Vec<Token>> {
    STANDARD.parse(tokens)
}

/// Evaluates postfix tokens with the standard operators.
///
/// # Errors
/// Returns `UnknownOperator` for symbols without a rule, `MalformedExpression`
/// when the tokens do not reduce to exactly one value, and any domain error
/// such as `DivisionByZero` or `InvalidFactorialOperand`.
pub fn evaluate(postfix: &[Token]) -> EvalResult<f64> {
    STANDARD.evaluate(postfix)
}
