/// Ties validation and the three pipeline stages together.
///
/// `Calculator` owns an operator table and exposes each stage as a method,
/// plus the combined `evaluate_expression` entry point.
pub mod calculator;
/// The evaluator module reduces postfix tokens to a single number.
///
/// Numbers are pushed onto a value stack; operators pop their operands and
/// push the result. Exactly one value must remain at the end.
///
/// # Responsibilities
/// - Applies binary, postfix and prefix operators from the operator table.
/// - Reports division by zero, invalid factorial operands, unknown operators
///   and malformed token sequences.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw text in a single pass and produces numbers and
/// operator symbols. It decides from position whether a symbol such as `-` is
/// a prefix operator.
pub mod lexer;
/// Operator definitions shared by every stage.
///
/// Precedence and arity live here as data, so the tokenizer, parser and
/// evaluator need no per-operator code.
pub mod operator;
/// The parser module reorders infix tokens into postfix order.
///
/// Implements the shunting-yard algorithm with an explicit operator stack,
/// handling precedence, left associativity and parentheses.
pub mod parser;
