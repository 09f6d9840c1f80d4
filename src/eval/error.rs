//! Evaluation error types.

use thiserror::Error;

/// Errors that can occur while evaluating an expression.
///
/// None of these surface to the UI adapter as failures - the engine maps
/// every variant to the blank result sentinel. They exist so evaluation
/// semantics stay explicit and testable.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvalError {
    /// Expression contains a character outside the calculator alphabet
    #[error("Unexpected character '{0}' in expression")]
    UnexpectedChar(char),

    /// A numeric literal could not be parsed (e.g. `1.2.3` or a lone `.`)
    #[error("Malformed number '{0}'")]
    MalformedNumber(String),

    /// Expression is empty
    #[error("Expression is empty")]
    Empty,

    /// Expression ended where an operand was expected (e.g. `12+`)
    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    /// An operand was expected but an operator was found
    #[error("Unexpected token at position {0}")]
    UnexpectedToken(usize),

    /// The computed value is NaN or infinite (e.g. division by zero)
    #[error("Result is not a finite number")]
    NonFinite,
}
