//! Input acceptance rules for the engine.
//!
//! Each constraint the calculator enforces on raw input is a guard over
//! the expression buffer; violations carry a typed reason. The UI adapter
//! is free to ignore the reason - a rejected input is a silent no-op on
//! screen - but tests and embedders can see exactly why.

use thiserror::Error;

use crate::core::{Expression, Guard, Limits};

/// Why an input was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RejectReason {
    /// The expression is at its length capacity
    #[error("Expression is at capacity ({max} characters)")]
    ExpressionFull { max: usize },

    /// The numeric segment being typed is at its length capacity
    #[error("Number is at capacity ({max} characters)")]
    NumberTooLong { max: usize },

    /// The numeric segment being typed already contains a decimal point
    #[error("Number already contains a decimal point")]
    DuplicateDecimal,

    /// An operator may only follow a digit
    #[error("Operator must follow a digit")]
    MisplacedOperator,

    /// The action needs an expression (or a prior result) to work on
    #[error("Nothing to operate on")]
    EmptyExpression,

    /// A number action carried something other than a digit
    #[error("Token is not a digit")]
    NotADigit,

    /// No history entry matches the requested pair
    #[error("No matching history entry")]
    UnknownHistoryEntry,
}

/// The engine's input constraints, expressed as guards built once from
/// the configured limits.
pub struct InputRules {
    limits: Limits,
    expression_capacity: Guard<Expression>,
    segment_capacity: Guard<Expression>,
    single_decimal: Guard<Expression>,
    operator_anchor: Guard<Expression>,
}

impl InputRules {
    /// Build the rule set for the given limits.
    pub fn new(limits: Limits) -> Self {
        Self {
            expression_capacity: Guard::new(move |e: &Expression| {
                e.len() < limits.max_expression_len
            }),
            segment_capacity: Guard::new(move |e: &Expression| {
                e.last_segment().len() < limits.max_number_len
            }),
            single_decimal: Guard::new(|e: &Expression| !e.last_segment().contains('.')),
            operator_anchor: Guard::new(|e: &Expression| e.ends_with_digit()),
            limits,
        }
    }

    /// May a digit be appended?
    pub fn check_digit(&self, expression: &Expression) -> Result<(), RejectReason> {
        if !self.expression_capacity.check(expression) {
            return Err(RejectReason::ExpressionFull {
                max: self.limits.max_expression_len,
            });
        }
        if !self.segment_capacity.check(expression) {
            return Err(RejectReason::NumberTooLong {
                max: self.limits.max_number_len,
            });
        }
        Ok(())
    }

    /// May a decimal point be appended?
    pub fn check_decimal(&self, expression: &Expression) -> Result<(), RejectReason> {
        self.check_digit(expression)?;
        if !self.single_decimal.check(expression) {
            return Err(RejectReason::DuplicateDecimal);
        }
        Ok(())
    }

    /// May an operator be appended?
    pub fn check_operator(&self, expression: &Expression) -> Result<(), RejectReason> {
        if !self.expression_capacity.check(expression) {
            return Err(RejectReason::ExpressionFull {
                max: self.limits.max_expression_len,
            });
        }
        if !self.operator_anchor.check(expression) {
            return Err(RejectReason::MisplacedOperator);
        }
        Ok(())
    }

    /// May a stringified prior result seed a new expression?
    pub fn check_seed(&self, rendered: &str) -> Result<(), RejectReason> {
        if rendered.len() > self.limits.max_number_len {
            return Err(RejectReason::NumberTooLong {
                max: self.limits.max_number_len,
            });
        }
        Ok(())
    }

    /// The limits the rules were built from.
    pub fn limits(&self) -> Limits {
        self.limits
    }
}
