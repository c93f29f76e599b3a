/// Arithmetic operations applied by the evaluator.
///
/// Every operator in the standard table is backed by one function here.
/// Domain errors such as division by zero or an invalid factorial operand are
/// reported from these functions.
pub mod arithmetic;

use crate::{
    error::EvaluationError,
    interpreter::{
        lexer::Token,
        operator::{Operation, OperatorTable},
    },
};

/// Result type used by every pipeline stage.
///
/// All stages return either a value of type `T` or an `EvaluationError`
/// describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Evaluates a postfix token sequence.
///
/// Numbers are pushed onto a value stack. A binary operator pops its right
/// operand and then its left operand, and pushes `left <op> right`. Postfix and
/// prefix operators pop a single operand. After the last token the stack must
/// hold exactly one value, which is the result.
///
/// # Parameters
/// - `postfix`: Tokens in postfix order, as produced by the parser.
/// - `operators`: The rules applied to each operator symbol.
///
/// # Errors
/// - `UnknownOperator` if a symbol has no rule in `operators`.
/// - `MalformedExpression` if an operator finds too few operands, or the stack
///   does not end with exactly one value.
/// - Any domain error raised by an operation, such as `DivisionByZero`.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{evaluator::evaluate, lexer::Token, operator::OperatorTable};
///
/// let postfix = [Token::Number(10.0),
///                Token::Number(2.0),
///                Token::Operator('-'),
///                Token::Number(3.0),
///                Token::Operator('-')];
/// assert_eq!(evaluate(&postfix, &OperatorTable::standard()).unwrap(), 5.0);
/// ```
pub fn evaluate(postfix: &[Token], operators: &OperatorTable) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for &token in postfix {
        let value = match token {
            Token::Number(value) => value,
            Token::Operator(symbol) => {
                let operator = operators.infix(symbol)
                                        .ok_or(EvaluationError::UnknownOperator { symbol })?;
                match operator.operation {
                    Operation::Binary(apply) => {
                        let right = pop_operand(&mut stack, symbol)?;
                        let left = pop_operand(&mut stack, symbol)?;
                        apply(left, right)?
                    },
                    Operation::Postfix(apply) => apply(pop_operand(&mut stack, symbol)?)?,
                }
            },
            Token::Prefix(symbol) => {
                let operator = operators.prefix(symbol)
                                        .ok_or(EvaluationError::UnknownOperator { symbol })?;
                (operator.apply)(pop_operand(&mut stack, symbol)?)?
            },
        };
        stack.push(value);
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        [] => Err(EvaluationError::MalformedExpression { details: "no value was produced".to_string() }),
        values => {
            Err(EvaluationError::MalformedExpression { details: format!("{} values are missing an operator",
                                                                        values.len()) })
        },
    }
}

/// Pops one operand for `symbol`, failing if the stack is empty.
fn pop_operand(stack: &mut Vec<f64>, symbol: char) -> EvalResult<f64> {
    stack.pop()
         .ok_or_else(|| EvaluationError::MalformedExpression { details: format!("operator '{symbol}' is missing an operand") })
}
