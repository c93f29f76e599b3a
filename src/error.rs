/// Evaluation errors.
///
/// Defines every failure the pipeline can report, from input validation
/// through tokenizing, parsing, and postfix evaluation. Each error is raised
/// by the first stage that observes the violating condition.
pub mod evaluation_error;

pub use evaluation_error::EvaluationError;
