//! Build errors for engine construction.

use thiserror::Error;

/// Errors that can occur when building an engine with custom limits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Expression capacity must be at least 1")]
    ZeroExpressionCapacity,

    #[error("Number capacity must be at least 1")]
    ZeroNumberCapacity,

    #[error("Number capacity ({number}) must not exceed expression capacity ({expression})")]
    NumberCapacityTooLarge { number: usize, expression: usize },

    #[error("History capacity must be at least 1")]
    ZeroHistoryCapacity,
}
