//! Builder API for ergonomic engine construction.
//!
//! `Engine::new()` covers the common case; the builder exists for hosts
//! that need different capacities, with validation at build time instead
//! of surprises at input time.

mod error;

pub use error::BuildError;

use crate::core::Limits;
use crate::engine::Engine;

/// Builder for constructing engines with a fluent API.
///
/// # Example
///
/// ```rust
/// use reckon::builder::EngineBuilder;
///
/// let engine = EngineBuilder::new()
///     .max_expression_len(40)
///     .max_number_len(12)
///     .history_capacity(50)
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.limits().max_expression_len, 40);
/// ```
pub struct EngineBuilder {
    limits: Limits,
}

impl EngineBuilder {
    /// Create a builder seeded with the default limits.
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
        }
    }

    /// Set the maximum expression length in characters.
    pub fn max_expression_len(mut self, len: usize) -> Self {
        self.limits.max_expression_len = len;
        self
    }

    /// Set the maximum numeric segment length in characters.
    pub fn max_number_len(mut self, len: usize) -> Self {
        self.limits.max_number_len = len;
        self
    }

    /// Set how many history entries are retained.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.limits.history_capacity = capacity;
        self
    }

    /// Build the engine.
    /// Returns an error if any capacity is unusable.
    pub fn build(self) -> Result<Engine, BuildError> {
        let Limits {
            max_expression_len,
            max_number_len,
            history_capacity,
        } = self.limits;

        if max_expression_len == 0 {
            return Err(BuildError::ZeroExpressionCapacity);
        }
        if max_number_len == 0 {
            return Err(BuildError::ZeroNumberCapacity);
        }
        if max_number_len > max_expression_len {
            return Err(BuildError::NumberCapacityTooLarge {
                number: max_number_len,
                expression: max_expression_len,
            });
        }
        if history_capacity == 0 {
            return Err(BuildError::ZeroHistoryCapacity);
        }

        Ok(Engine::with_limits(self.limits))
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
