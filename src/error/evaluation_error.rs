#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvaluationError {
    /// The expression is empty or contains only spaces.
    EmptyExpression,
    /// The expression contains a character outside the supported grammar.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character index of the offending character.
        position:  usize,
    },
    /// A parenthesis has no matching partner.
    UnmatchedParenthesis,
    /// The right operand of `/` was exactly zero.
    DivisionByZero,
    /// The operand of `!` was negative, fractional, or not finite.
    InvalidFactorialOperand {
        /// The rejected operand.
        operand: f64,
    },
    /// An operator reached evaluation without a defined rule.
    UnknownOperator {
        /// The operator symbol.
        symbol: char,
    },
    /// The token sequence does not reduce to exactly one value.
    MalformedExpression {
        /// Details about what went wrong.
        details: String,
    },
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Expression is empty."),
            Self::InvalidCharacter { character, position } => {
                write!(f, "Invalid character '{character}' at position {position}.")
            },
            Self::UnmatchedParenthesis => write!(f, "Unmatched parenthesis."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::InvalidFactorialOperand { operand } => write!(f,
                                                                "Factorial is only defined for non-negative integers, but found {operand}."),
            Self::UnknownOperator { symbol } => write!(f, "Unknown operator '{symbol}'."),
            Self::MalformedExpression { details } => {
                write!(f, "Malformed expression: {details}.")
            },
        }
    }
}

impl std::error::Error for EvaluationError {}
