use crate::{
    error::EvaluationError,
    interpreter::{
        evaluator::EvalResult,
        lexer::Token,
        operator::{BARRIER_PRECEDENCE, CLOSE_PAREN, OPEN_PAREN, OperatorTable},
    },
};

/// Reorders infix tokens into postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm with an explicit operator stack:
/// - numbers go straight to the output;
/// - `(` is pushed and `)` pops operators until the matching `(`;
/// - prefix operators are pushed without popping, since nothing to their left
///   belongs to them;
/// - every other operator first pops all stacked operators whose precedence is
///   greater than or equal to its own, which makes operators of equal
///   precedence (including `^`) left-associative.
///
/// Remaining operators are popped to the output once the input is exhausted.
/// The output never contains parentheses.
///
/// # Parameters
/// - `tokens`: Infix tokens as produced by the tokenizer.
/// - `operators`: Precedence source for every operator symbol.
///
/// # Returns
/// The tokens in postfix order.
///
/// # Errors
/// Returns `UnmatchedParenthesis` when a `)` has no matching `(`, or when a
/// `(` is still open at the end of input.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{
///     lexer::tokenize,
///     operator::OperatorTable,
///     parser::{parse, render},
/// };
///
/// let table = OperatorTable::standard();
/// let tokens = tokenize("(3 + 4) * 2", &table).unwrap();
/// let postfix = parse(&tokens, &table).unwrap();
/// assert_eq!(render(&postfix), "3 4 + 2 *");
/// ```
pub fn parse(tokens: &[Token], operators: &OperatorTable) -> EvalResult<Vec<Token>> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Operator(OPEN_PAREN) | Token::Prefix(_) => stack.push(token),
            Token::Operator(CLOSE_PAREN) => pop_until_open_paren(&mut stack, &mut output)?,
            Token::Operator(_) => {
                let incoming = precedence(&token, operators);
                while let Some(&top) = stack.last()
                      && top != Token::Operator(OPEN_PAREN)
                      && precedence(&top, operators) >= incoming
                {
                    output.push(top);
                    stack.pop();
                }
                stack.push(token);
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top == Token::Operator(OPEN_PAREN) {
            return Err(EvaluationError::UnmatchedParenthesis);
        }
        output.push(top);
    }

    Ok(output)
}

/// Returns the precedence of a stacked or incoming token.
///
/// Parentheses, numbers and symbols the table does not know all get
/// [`BARRIER_PRECEDENCE`].
///
/// # Example
/// ```
/// use rpncalc::interpreter::{lexer::Token, operator::OperatorTable, parser::precedence};
///
/// let table = OperatorTable::standard();
/// assert_eq!(precedence(&Token::Operator('*'), &table), 2);
/// assert_eq!(precedence(&Token::Prefix('-'), &table), 3);
/// assert_eq!(precedence(&Token::Operator('('), &table), 0);
/// ```
#[must_use]
pub fn precedence(token: &Token, operators: &OperatorTable) -> u8 {
    match *token {
        Token::Operator(symbol) => {
            operators.infix(symbol)
                     .map_or(BARRIER_PRECEDENCE, |operator| operator.precedence)
        },
        Token::Prefix(symbol) => {
            operators.prefix(symbol)
                     .map_or(BARRIER_PRECEDENCE, |operator| operator.precedence)
        },
        Token::Number(_) => BARRIER_PRECEDENCE,
    }
}

/// Formats a token sequence as space separated text, e.g. `3 4 + 2 *`.
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}

/// Moves operators from `stack` to `output` until an opening parenthesis is
/// popped. The parenthesis itself is discarded.
fn pop_until_open_paren(stack: &mut Vec<Token>, output: &mut Vec<Token>) -> EvalResult<()> {
    while let Some(top) = stack.pop() {
        if top == Token::Operator(OPEN_PAREN) {
            return Ok(());
        }
        output.push(top);
    }
    Err(EvaluationError::UnmatchedParenthesis)
}
