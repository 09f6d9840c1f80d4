//! The calculator engine: an imperative shell over the pure core.
//!
//! `Engine` owns the in-progress expression, the last result, and the
//! history log, and advances them in response to `Action`s. Every
//! operation runs synchronously to completion; failures degrade to a
//! rejected outcome or a blank result, never a panic or a propagated
//! error. The engine has no rendering dependency - adapters feed actions
//! in and read `display()` back out.

mod action;
mod rules;

pub use action::Action;
pub use rules::{InputRules, RejectReason};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::{Expression, HistoryEntry, HistoryLog, Limits};
use crate::eval;
use crate::format::{format_expression, format_number};

/// Result of applying a single action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The action ran and engine state advanced
    Applied,
    /// The action was rejected; engine state is unchanged
    Rejected(RejectReason),
}

/// Formatted render state, recomputed after every action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Expression text with thousands grouping per numeric segment
    pub expression: String,
    /// Result text; empty when there is no valid result
    pub result: String,
}

/// One formatted row of the recall list, newest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub expression: String,
    pub result: String,
}

/// The expression-building and evaluation engine.
///
/// # Example
///
/// ```rust
/// use reckon::engine::{Action, Engine};
///
/// let mut engine = Engine::new();
/// engine.apply_keys("12+8");
/// assert_eq!(engine.display().expression, "12+8");
///
/// engine.apply(Action::Submit);
/// assert_eq!(engine.display().result, "20");
/// assert_eq!(engine.display().expression, "");
/// assert_eq!(engine.history().len(), 1);
/// ```
pub struct Engine {
    expression: Expression,
    result: Option<f64>,
    history: HistoryLog,
    rules: InputRules,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine with default limits.
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Create an engine with explicit limits. Validation happens in the
    /// builder; this trusts its input.
    pub(crate) fn with_limits(limits: Limits) -> Self {
        Self {
            expression: Expression::new(),
            result: None,
            history: HistoryLog::new(limits.history_capacity),
            rules: InputRules::new(limits),
        }
    }

    /// Apply one input action.
    pub fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::Number(digit) => self.press_digit(digit),
            Action::Decimal => self.press_decimal(),
            Action::Addition => self.press_operator('+'),
            Action::Subtraction => self.press_operator('-'),
            Action::Multiplication => self.press_operator('*'),
            Action::Division => self.press_operator('/'),
            Action::Submit => self.submit(),
            Action::Mod => self.percentage(),
            Action::Backspace => self.backspace(),
            Action::Clear => self.clear(),
        }
    }

    /// Apply the action a keyboard key maps to, if any.
    pub fn apply_key(&mut self, key: &str) -> Option<Outcome> {
        Action::from_key(key).map(|action| self.apply(action))
    }

    /// Feed a run of single-character keys through the keyboard mapping.
    ///
    /// Convenient for scripted sessions: `engine.apply_keys("12+8=")`.
    /// Characters with no mapping are skipped.
    pub fn apply_keys(&mut self, keys: &str) {
        for c in keys.chars() {
            self.apply_key(&c.to_string());
        }
    }

    fn press_digit(&mut self, digit: char) -> Outcome {
        if !digit.is_ascii_digit() {
            return Outcome::Rejected(RejectReason::NotADigit);
        }
        match self.rules.check_digit(&self.expression) {
            Ok(()) => {
                self.expression.push(digit);
                Outcome::Applied
            }
            Err(reason) => Outcome::Rejected(reason),
        }
    }

    fn press_decimal(&mut self) -> Outcome {
        match self.rules.check_decimal(&self.expression) {
            Ok(()) => {
                self.expression.push('.');
                Outcome::Applied
            }
            Err(reason) => Outcome::Rejected(reason),
        }
    }

    fn press_operator(&mut self, operator: char) -> Outcome {
        if self.expression.is_empty() {
            return match self.result {
                Some(value) => self.start_from_result(value, operator),
                None => Outcome::Rejected(RejectReason::EmptyExpression),
            };
        }
        match self.rules.check_operator(&self.expression) {
            Ok(()) => {
                self.expression.push(operator);
                Outcome::Applied
            }
            Err(reason) => Outcome::Rejected(reason),
        }
    }

    /// Seed a fresh expression from the previous result, enabling
    /// chained calculations.
    fn start_from_result(&mut self, value: f64, operator: char) -> Outcome {
        let rendered = value.to_string();
        match self.rules.check_seed(&rendered) {
            Ok(()) => {
                self.expression = Expression::from(rendered.as_str());
                self.expression.push(operator);
                Outcome::Applied
            }
            Err(reason) => Outcome::Rejected(reason),
        }
    }

    fn submit(&mut self) -> Outcome {
        if self.expression.is_empty() {
            return Outcome::Rejected(RejectReason::EmptyExpression);
        }

        match eval::evaluate(self.expression.as_str()) {
            Ok(value) => {
                self.history = self.history.record(HistoryEntry {
                    expression: self.expression.as_str().to_string(),
                    value,
                    recorded_at: Utc::now(),
                });
                self.result = Some(value);
            }
            Err(_) => {
                self.result = None;
            }
        }

        // The expression is consumed either way; a blank result is the
        // only signal of failure.
        self.expression.clear();
        Outcome::Applied
    }

    fn percentage(&mut self) -> Outcome {
        if !self.expression.is_empty() {
            match eval::evaluate(self.expression.as_str()) {
                Ok(value) => {
                    let scaled = value / 100.0;
                    self.history = self.history.record(HistoryEntry {
                        expression: self.expression.as_str().to_string(),
                        value: scaled,
                        recorded_at: Utc::now(),
                    });
                    self.result = Some(scaled);
                    self.expression.clear();
                }
                Err(_) => {
                    self.result = None;
                }
            }
            return Outcome::Applied;
        }

        match self.result {
            Some(value) => {
                self.result = Some(value / 100.0);
                Outcome::Applied
            }
            None => Outcome::Rejected(RejectReason::EmptyExpression),
        }
    }

    fn backspace(&mut self) -> Outcome {
        match self.expression.pop() {
            Some(_) => Outcome::Applied,
            None => Outcome::Rejected(RejectReason::EmptyExpression),
        }
    }

    fn clear(&mut self) -> Outcome {
        self.expression.clear();
        self.result = None;
        Outcome::Applied
    }

    /// Restore a previously recorded pair as the active state.
    ///
    /// Matches by value equality on both fields, newest first. An unknown
    /// pair is a rejected no-op.
    pub fn recall(&mut self, expression: &str, value: f64) -> Outcome {
        match self.history.find(expression, value) {
            Some(entry) => {
                let restored = Expression::from(entry.expression.as_str());
                let restored_value = entry.value;
                self.expression = restored;
                self.result = Some(restored_value);
                Outcome::Applied
            }
            None => Outcome::Rejected(RejectReason::UnknownHistoryEntry),
        }
    }

    /// Empty the history log unconditionally.
    pub fn clear_history(&mut self) {
        self.history = self.history.clear_all();
    }

    /// Formatted expression and result for rendering.
    pub fn display(&self) -> DisplayState {
        DisplayState {
            expression: format_expression(self.expression.as_str()),
            result: self.result.map(format_number).unwrap_or_default(),
        }
    }

    /// Formatted history rows for the recall list, newest first.
    pub fn history_display(&self) -> Vec<HistoryRow> {
        self.history
            .entries()
            .iter()
            .map(|entry| HistoryRow {
                expression: format_expression(&entry.expression),
                result: format_number(entry.value),
            })
            .collect()
    }

    /// The raw in-progress expression.
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// The last computed value; `None` is the blank sentinel.
    pub fn result(&self) -> Option<f64> {
        self.result
    }

    /// The history log.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// The limits this engine was built with.
    pub fn limits(&self) -> Limits {
        self.rules.limits()
    }
}
