//! Calculation history tracking.
//!
//! Provides immutable tracking of submitted calculations over time,
//! following functional programming principles: recording returns a new
//! log instead of mutating the old one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::limits::MAX_HISTORY_ENTRIES;

/// Record of a single submitted calculation.
///
/// Entries are immutable values capturing the expression text and the
/// value it evaluated to at submit time.
///
/// # Example
///
/// ```rust
/// use reckon::core::HistoryEntry;
/// use chrono::Utc;
///
/// let entry = HistoryEntry {
///     expression: "12+8".to_string(),
///     value: 20.0,
///     recorded_at: Utc::now(),
/// };
/// assert_eq!(entry.expression, "12+8");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression exactly as it was submitted
    pub expression: String,
    /// The value the expression evaluated to
    pub value: f64,
    /// When the calculation was recorded
    pub recorded_at: DateTime<Utc>,
}

/// Bounded, newest-first log of submitted calculations.
///
/// The log is immutable - `record` returns a new log with the entry
/// prepended, evicting the oldest entry once capacity is exceeded.
///
/// # Example
///
/// ```rust
/// use reckon::core::{HistoryEntry, HistoryLog};
/// use chrono::Utc;
///
/// let log = HistoryLog::new(20);
///
/// let log = log.record(HistoryEntry {
///     expression: "12+8".to_string(),
///     value: 20.0,
///     recorded_at: Utc::now(),
/// });
///
/// let log = log.record(HistoryEntry {
///     expression: "3*4".to_string(),
///     value: 12.0,
///     recorded_at: Utc::now(),
/// });
///
/// // Newest first.
/// assert_eq!(log.entries()[0].expression, "3*4");
/// assert_eq!(log.entries()[1].expression, "12+8");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(MAX_HISTORY_ENTRIES)
    }
}

impl HistoryLog {
    /// Create a new empty log with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Record an entry, returning a new log.
    ///
    /// This is a pure function - the existing log is unchanged. Entries
    /// with an empty expression or a non-finite value are skipped and the
    /// log is returned as-is: only completed calculations are recallable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::core::{HistoryEntry, HistoryLog};
    /// use chrono::Utc;
    ///
    /// let log = HistoryLog::new(20);
    /// let entry = HistoryEntry {
    ///     expression: "50+50".to_string(),
    ///     value: 100.0,
    ///     recorded_at: Utc::now(),
    /// };
    ///
    /// let recorded = log.record(entry);
    /// assert_eq!(recorded.len(), 1);
    /// assert_eq!(log.len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, entry: HistoryEntry) -> Self {
        if entry.expression.is_empty() || !entry.value.is_finite() {
            return self.clone();
        }

        let mut entries = self.entries.clone();
        entries.insert(0, entry);
        entries.truncate(self.capacity);

        Self {
            entries,
            capacity: self.capacity,
        }
    }

    /// Find the first entry matching both fields, newest first.
    ///
    /// Matching is by value equality on the raw expression text and the
    /// recorded number, the contract the recall action is built on.
    pub fn find(&self, expression: &str, value: f64) -> Option<&HistoryEntry> {
        self.entries
            .iter()
            .find(|e| e.expression == expression && e.value == value)
    }

    /// Empty the log unconditionally, returning a new log.
    pub fn clear_all(&self) -> Self {
        Self::new(self.capacity)
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
