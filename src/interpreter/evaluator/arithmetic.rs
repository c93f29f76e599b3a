#![allow(clippy::unnecessary_wraps)]

use crate::{error::EvaluationError, interpreter::evaluator::EvalResult};

/// `left + right`.
pub fn add(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left + right)
}

/// `left - right`.
pub fn subtract(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left - right)
}

/// `left * right`.
pub fn multiply(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left * right)
}

/// Divides `left` by `right`.
///
/// A right operand of exactly zero (either sign) is rejected before dividing,
/// so this never yields an infinity or `NaN` from a zero divisor.
///
/// # Example
/// ```
/// use rpncalc::{error::EvaluationError, interpreter::evaluator::arithmetic::divide};
///
/// assert_eq!(divide(7.0, 2.0).unwrap(), 3.5);
/// assert_eq!(divide(5.0, 0.0).unwrap_err(), EvaluationError::DivisionByZero);
/// ```
pub fn divide(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(EvaluationError::DivisionByZero);
    }
    Ok(left / right)
}

/// Raises `base` to `exponent` with IEEE-754 `pow` semantics.
///
/// `0 ^ 0` is `1`, and a negative base with a fractional exponent is `NaN`.
/// Neither is an error.
pub fn power(base: f64, exponent: f64) -> EvalResult<f64> {
    Ok(base.powf(exponent))
}

/// Negates `operand`.
pub fn negate(operand: f64) -> EvalResult<f64> {
    Ok(-operand)
}

/// Computes `operand!` as the product of the integers from 1 to `operand`.
///
/// Only non-negative whole numbers are accepted; fractional values are not
/// truncated. `0!` is `1`. Multiplication stops once the product overflows to
/// infinity, so very large operands return `inf` promptly.
///
/// # Example
/// ```
/// use rpncalc::{error::EvaluationError, interpreter::evaluator::arithmetic::factorial};
///
/// assert_eq!(factorial(5.0).unwrap(), 120.0);
/// assert_eq!(factorial(0.0).unwrap(), 1.0);
/// assert!(factorial(1000.0).unwrap().is_infinite());
/// assert_eq!(factorial(-1.0).unwrap_err(),
///            EvaluationError::InvalidFactorialOperand { operand: -1.0 });
/// assert!(factorial(2.5).is_err());
/// ```
pub fn factorial(operand: f64) -> EvalResult<f64> {
    if !operand.is_finite() || operand < 0.0 || operand.fract() != 0.0 {
        return Err(EvaluationError::InvalidFactorialOperand { operand });
    }

    let mut product: f64 = 1.0;
    let mut factor: f64 = 2.0;
    while factor <= operand && product.is_finite() {
        product *= factor;
        factor += 1.0;
    }
    Ok(product)
}
