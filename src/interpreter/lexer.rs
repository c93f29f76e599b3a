use logos::Logos;

use crate::{
    error::EvaluationError,
    interpreter::{
        evaluator::EvalResult,
        operator::{CLOSE_PAREN, OperatorTable},
    },
};

/// Represents a token of an arithmetic expression.
///
/// Tokens are produced by [`tokenize`], reordered into postfix form by the
/// parser, and consumed by the evaluator.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// A numeric literal such as `42`, `3.14` or `.5`.
    Number(f64),
    /// An operator or parenthesis in infix or postfix position, such as `+`,
    /// `!` or `(`. Symbols without a rule are kept as-is and rejected during
    /// evaluation.
    Operator(char),
    /// An operator in prefix position, such as the `-` in `-3`.
    Prefix(char),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(symbol) => write!(f, "{symbol}"),
            Self::Prefix(symbol) => write!(f, "({symbol})"),
        }
    }
}

/// Raw lexical classes recognized by the scanner before operator positions
/// are resolved.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Lexeme {
    /// A maximal run of digits and decimal points.
    #[regex(r"[0-9.]+")]
    Number,
    /// Any other single non-whitespace character.
    #[regex(r"[^0-9. \t\r\n\f]", |lex| lex.slice().chars().next())]
    Symbol(char),
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Splits an expression into tokens.
///
/// The input is scanned once from left to right. Whitespace is skipped, runs
/// of digits and decimal points become a single [`Token::Number`], and every
/// other character becomes a standalone operator token. A symbol that has a
/// prefix form in `operators` is emitted as [`Token::Prefix`] when it appears
/// where an operand is expected.
///
/// # Parameters
/// - `source`: The expression text.
/// - `operators`: The operator table used to resolve prefix positions.
///
/// # Returns
/// The tokens in input order.
///
/// # Errors
/// Returns `MalformedExpression` when a run of digits and decimal points is
/// not a valid number, such as `1.2.3`.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{
///     lexer::{Token, tokenize},
///     operator::OperatorTable,
/// };
///
/// let tokens = tokenize("-1.5 * 2", &OperatorTable::standard()).unwrap();
/// assert_eq!(tokens,
///            vec![Token::Prefix('-'),
///                 Token::Number(1.5),
///                 Token::Operator('*'),
///                 Token::Number(2.0)]);
/// ```
pub fn tokenize(source: &str, operators: &OperatorTable) -> EvalResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let token = match lexeme {
            Ok(Lexeme::Number) => Token::Number(parse_number(lexer.slice())?),
            Ok(Lexeme::Symbol(symbol)) => {
                if operators.prefix(symbol).is_some() && expects_operand(tokens.last(), operators)
                {
                    Token::Prefix(symbol)
                } else {
                    Token::Operator(symbol)
                }
            },
            Ok(Lexeme::Ignored) => continue,
            Err(()) => {
                return Err(EvaluationError::MalformedExpression { details:
                                                                      format!("unrecognized input '{}'",
                                                                              lexer.slice()) });
            },
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Returns whether the next token must start an operand.
///
/// That is the case at the start of input and after anything that leaves an
/// operator waiting for its right-hand side. Numbers, closing parentheses and
/// postfix operators complete an operand.
fn expects_operand(previous: Option<&Token>, operators: &OperatorTable) -> bool {
    match previous {
        None | Some(Token::Prefix(_)) => true,
        Some(Token::Number(_)) => false,
        Some(Token::Operator(symbol)) => *symbol != CLOSE_PAREN && !operators.is_postfix(*symbol),
    }
}

/// Parses a numeric literal from a run of digits and decimal points.
fn parse_number(literal: &str) -> EvalResult<f64> {
    literal.parse()
           .map_err(|_| EvaluationError::MalformedExpression { details: format!("invalid number '{literal}'") })
}
