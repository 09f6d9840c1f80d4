//! Capacity limits for expression input and history retention.

use serde::{Deserialize, Serialize};

/// Default maximum number of characters in an expression.
pub const MAX_EXPRESSION_LENGTH: usize = 30;

/// Default maximum number of characters in a single numeric segment.
pub const MAX_NUMBER_LENGTH: usize = 15;

/// Default maximum number of retained history entries.
pub const MAX_HISTORY_ENTRIES: usize = 20;

/// Capacity configuration consulted by the engine's input rules.
///
/// # Example
///
/// ```rust
/// use reckon::core::Limits;
///
/// let limits = Limits::default();
/// assert_eq!(limits.max_expression_len, 30);
/// assert_eq!(limits.max_number_len, 15);
/// assert_eq!(limits.history_capacity, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum expression length in characters
    pub max_expression_len: usize,
    /// Maximum length of the numeric segment being typed
    pub max_number_len: usize,
    /// Maximum number of history entries retained
    pub history_capacity: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_expression_len: MAX_EXPRESSION_LENGTH,
            max_number_len: MAX_NUMBER_LENGTH,
            history_capacity: MAX_HISTORY_ENTRIES,
        }
    }
}
