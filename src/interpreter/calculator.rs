use tracing::trace;

use crate::{
    error::EvaluationError,
    interpreter::{
        evaluator::{self, EvalResult},
        lexer::{self, Token},
        operator::{CLOSE_PAREN, OPEN_PAREN, OperatorTable},
        parser::{self, render},
    },
};

/// Runs the tokenize, parse and evaluate pipeline over one operator table.
///
/// A `Calculator` holds no state besides its table, so one instance can
/// evaluate any number of expressions, from any number of threads, without
/// one evaluation affecting another.
///
/// ## Usage
///
/// `Calculator::default()` uses [`OperatorTable::standard`]. Pass a custom
/// table to [`Calculator::new`] to add or redefine operators; validation,
/// tokenizing, parsing and evaluation all follow the table.
#[derive(Debug, Clone)]
pub struct Calculator {
    operators: OperatorTable,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(OperatorTable::standard())
    }
}

impl Calculator {
    /// Creates a calculator over the given operator table.
    #[must_use]
    pub const fn new(operators: OperatorTable) -> Self {
        Self { operators }
    }

    /// Returns the operator table.
    #[must_use]
    pub const fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// Splits `source` into tokens. See [`lexer::tokenize`].
    pub fn tokenize(&self, source: &str) -> EvalResult<Vec<Token>> {
        lexer::tokenize(source, &self.operators)
    }

    /// Reorders infix tokens into postfix order. See [`parser::parse`].
    pub fn parse(&self, tokens: &[Token]) -> EvalResult<Vec<Token>> {
        parser::parse(tokens, &self.operators)
    }

    /// Evaluates postfix tokens. See [`evaluator::evaluate`].
    pub fn evaluate(&self, postfix: &[Token]) -> EvalResult<f64> {
        evaluator::evaluate(postfix, &self.operators)
    }

    /// Checks an expression before it enters the pipeline.
    ///
    /// The checks run in this order:
    /// 1. every character is a digit, `.`, a space, a parenthesis, or an
    ///    operator symbol from the table;
    /// 2. the expression is not blank;
    /// 3. parentheses are balanced and never closed before being opened.
    ///
    /// # Errors
    /// `InvalidCharacter` for the first character outside the allowed set,
    /// `EmptyExpression` for blank input, and `UnmatchedParenthesis` for
    /// unbalanced parentheses.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{Calculator, error::EvaluationError};
    ///
    /// let calculator = Calculator::default();
    /// assert!(calculator.validate("(1 + 2) * 3").is_ok());
    /// assert_eq!(calculator.validate("   "), Err(EvaluationError::EmptyExpression));
    /// assert_eq!(calculator.validate("1 ) + (2"),
    ///            Err(EvaluationError::UnmatchedParenthesis));
    /// ```
    pub fn validate(&self, expression: &str) -> EvalResult<()> {
        if let Some((position, character)) =
            expression.chars()
                      .enumerate()
                      .find(|&(_, c)| !self.is_allowed(c))
        {
            return Err(EvaluationError::InvalidCharacter { character, position });
        }

        if expression.trim().is_empty() {
            return Err(EvaluationError::EmptyExpression);
        }

        let mut depth = 0usize;
        for character in expression.chars() {
            match character {
                OPEN_PAREN => depth += 1,
                CLOSE_PAREN => {
                    depth = depth.checked_sub(1)
                                 .ok_or(EvaluationError::UnmatchedParenthesis)?;
                },
                _ => {},
            }
        }
        if depth != 0 {
            return Err(EvaluationError::UnmatchedParenthesis);
        }

        Ok(())
    }

    /// Validates and evaluates an expression.
    ///
    /// This is the single entry point for callers that hold raw text. The
    /// expression is validated, tokenized, parsed and evaluated; the first
    /// error from any stage is returned unchanged.
    ///
    /// # Errors
    /// Any [`EvaluationError`] raised by validation or a pipeline stage.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{Calculator, error::EvaluationError};
    ///
    /// let calculator = Calculator::default();
    /// assert_eq!(calculator.evaluate_expression("3 + 4 * 2").unwrap(), 11.0);
    /// assert_eq!(calculator.evaluate_expression("5 / 0"),
    ///            Err(EvaluationError::DivisionByZero));
    /// ```
    pub fn evaluate_expression(&self, expression: &str) -> EvalResult<f64> {
        self.validate(expression)?;

        let tokens = self.tokenize(expression)?;
        trace!(tokens = tokens.len(), "tokenized expression");

        let postfix = self.parse(&tokens)?;
        trace!(postfix = %render(&postfix), "reordered into postfix");

        let result = self.evaluate(&postfix)?;
        trace!(result, "evaluated expression");

        Ok(result)
    }

    fn is_allowed(&self, character: char) -> bool {
        character.is_ascii_digit()
        || matches!(character, '.' | ' ' | OPEN_PAREN | CLOSE_PAREN)
        || self.operators.contains(character)
    }
}
