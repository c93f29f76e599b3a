use std::collections::HashMap;

use crate::interpreter::evaluator::{EvalResult, arithmetic};

/// Opening parenthesis symbol.
pub const OPEN_PAREN: char = '(';
/// Closing parenthesis symbol.
pub const CLOSE_PAREN: char = ')';
/// Precedence of parentheses and of symbols without a rule.
///
/// Parentheses act as stack barriers and are never compared; unknown symbols
/// get the lowest precedence so that they reach the evaluator, which rejects
/// them.
pub const BARRIER_PRECEDENCE: u8 = 0;

/// Computes the result of a one-operand operator.
pub type UnaryFn = fn(f64) -> EvalResult<f64>;
/// Computes `left <op> right`.
pub type BinaryFn = fn(f64, f64) -> EvalResult<f64>;

/// How an operator written after its first operand consumes values.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Takes a left and a right operand, such as `+`.
    Binary(BinaryFn),
    /// Takes the operand written before it, such as `!`.
    Postfix(UnaryFn),
}

/// An operator written between or after its operands.
#[derive(Debug, Clone, Copy)]
pub struct InfixOperator {
    /// Binding strength; higher binds tighter.
    pub precedence: u8,
    /// Arity and computation.
    pub operation:  Operation,
}

/// An operator written before its operand.
#[derive(Debug, Clone, Copy)]
pub struct PrefixOperator {
    /// Binding strength; higher binds tighter.
    pub precedence: u8,
    /// The computation.
    pub apply:      UnaryFn,
}

/// Maps operator symbols to their precedence and arity.
///
/// The table is the only place that knows which operators exist. The
/// tokenizer consults it to tell prefix operators apart, the parser to order
/// operators, and the evaluator to apply them, so supporting a new operator is
/// a matter of adding an entry.
///
/// A symbol may have both an infix and a prefix form, as `-` does in the
/// standard table.
///
/// # Example
/// ```
/// use rpncalc::interpreter::operator::{Operation, OperatorTable};
///
/// let table = OperatorTable::standard().with_binary('%', 2, |l, r| Ok(l % r));
///
/// assert_eq!(table.infix('%').map(|op| op.precedence), Some(2));
/// assert!(matches!(table.infix('!').map(|op| op.operation),
///                  Some(Operation::Postfix(_))));
/// assert!(table.prefix('-').is_some());
/// assert!(table.prefix('+').is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
    infix:  HashMap<char, InfixOperator>,
    prefix: HashMap<char, PrefixOperator>,
}

impl OperatorTable {
    /// Creates a table with no operators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the standard arithmetic table.
    ///
    /// | Symbol | Form    | Precedence |
    /// |--------|---------|------------|
    /// | `+ -`  | binary  | 1          |
    /// | `* /`  | binary  | 2          |
    /// | `^`    | binary  | 3          |
    /// | `-`    | prefix  | 3          |
    /// | `!`    | postfix | 4          |
    #[must_use]
    pub fn standard() -> Self {
        Self::new().with_binary('+', 1, arithmetic::add)
                   .with_binary('-', 1, arithmetic::subtract)
                   .with_binary('*', 2, arithmetic::multiply)
                   .with_binary('/', 2, arithmetic::divide)
                   .with_binary('^', 3, arithmetic::power)
                   .with_postfix('!', 4, arithmetic::factorial)
                   .with_prefix('-', 3, arithmetic::negate)
    }

    /// Adds or replaces a binary operator.
    ///
    /// Reserved symbols are ignored; see [`is_reserved`].
    #[must_use]
    pub fn with_binary(self, symbol: char, precedence: u8, apply: BinaryFn) -> Self {
        self.with_infix(symbol, InfixOperator { precedence,
                                                operation: Operation::Binary(apply) })
    }

    /// Adds or replaces a postfix operator.
    ///
    /// Reserved symbols are ignored; see [`is_reserved`].
    #[must_use]
    pub fn with_postfix(self, symbol: char, precedence: u8, apply: UnaryFn) -> Self {
        self.with_infix(symbol, InfixOperator { precedence,
                                                operation: Operation::Postfix(apply) })
    }

    /// Adds or replaces a prefix operator.
    ///
    /// Reserved symbols are ignored; see [`is_reserved`].
    #[must_use]
    pub fn with_prefix(mut self, symbol: char, precedence: u8, apply: UnaryFn) -> Self {
        if !is_reserved(symbol) {
            self.prefix.insert(symbol, PrefixOperator { precedence, apply });
        }
        self
    }

    fn with_infix(mut self, symbol: char, operator: InfixOperator) -> Self {
        if !is_reserved(symbol) {
            self.infix.insert(symbol, operator);
        }
        self
    }

    /// Looks up the infix or postfix form of `symbol`.
    #[must_use]
    pub fn infix(&self, symbol: char) -> Option<&InfixOperator> {
        self.infix.get(&symbol)
    }

    /// Looks up the prefix form of `symbol`.
    #[must_use]
    pub fn prefix(&self, symbol: char) -> Option<&PrefixOperator> {
        self.prefix.get(&symbol)
    }

    /// Returns whether `symbol` is a postfix operator.
    #[must_use]
    pub fn is_postfix(&self, symbol: char) -> bool {
        matches!(self.infix(symbol),
                 Some(InfixOperator { operation: Operation::Postfix(_),
                                      .. }))
    }

    /// Returns whether `symbol` has any form in this table.
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.infix.contains_key(&symbol) || self.prefix.contains_key(&symbol)
    }
}

/// Returns whether `symbol` is `(` or `)`.
#[must_use]
pub const fn is_parenthesis(symbol: char) -> bool {
    symbol == OPEN_PAREN || symbol == CLOSE_PAREN
}

/// Returns whether `symbol` can never name an operator.
///
/// Parentheses are stack barriers, digits and `.` are scanned as part of
/// numbers, and whitespace is skipped by the tokenizer.
///
/// # Example
/// ```
/// use rpncalc::interpreter::operator::is_reserved;
///
/// assert!(is_reserved('('));
/// assert!(is_reserved('.'));
/// assert!(is_reserved('7'));
/// assert!(is_reserved(' '));
/// assert!(!is_reserved('%'));
/// ```
#[must_use]
pub fn is_reserved(symbol: char) -> bool {
    is_parenthesis(symbol) || symbol == '.' || symbol.is_ascii_digit() || symbol.is_whitespace()
}
