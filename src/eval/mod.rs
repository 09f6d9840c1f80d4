//! Constrained arithmetic evaluation.
//!
//! The evaluator accepts only the calculator alphabet - digits, decimal
//! points, and the four binary operators - and computes values with
//! standard infix precedence. It never panics on malformed input: every
//! failure mode is a typed error the engine degrades to a blank result.

mod error;
mod lexer;
mod parser;

pub use error::EvalError;
pub use lexer::{tokenize, Token};
pub use parser::Parser;

/// Evaluate an expression to a rounded, finite value.
///
/// Values are rounded to 10 fractional digits when the magnitude is
/// below 1, else to 2 - then re-parsed so trailing zeros vanish. NaN and
/// infinite results (division by zero) are reported as errors.
///
/// # Example
///
/// ```rust
/// use reckon::eval::{evaluate, EvalError};
///
/// assert_eq!(evaluate("12+8").unwrap(), 20.0);
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("1/3").unwrap(), 0.3333333333);
/// assert_eq!(evaluate("10/3").unwrap(), 3.33);
/// assert_eq!(evaluate("5/0"), Err(EvalError::NonFinite));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let value = Parser::parse(expression)?;

    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }

    Ok(round_result(value))
}

/// Round through a decimal string so the result carries no binary
/// residue beyond the chosen precision.
fn round_result(value: f64) -> f64 {
    let decimals = if value.abs() < 1.0 { 10 } else { 2 };
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_magnitudes_keep_ten_fractional_digits() {
        assert_eq!(evaluate("1/3").unwrap(), 0.3333333333);
        assert_eq!(evaluate("2/3").unwrap(), 0.6666666667);
    }

    #[test]
    fn larger_magnitudes_round_to_two_fractional_digits() {
        assert_eq!(evaluate("10/3").unwrap(), 3.33);
        assert_eq!(evaluate("20/3").unwrap(), 6.67);
    }

    #[test]
    fn negative_magnitudes_use_the_absolute_value_rule() {
        assert_eq!(evaluate("0-10/3").unwrap(), -3.33);
        assert_eq!(evaluate("0-1/3").unwrap(), -0.3333333333);
    }

    #[test]
    fn integers_come_back_exact() {
        assert_eq!(evaluate("12+8").unwrap(), 20.0);
        assert_eq!(evaluate("7*6").unwrap(), 42.0);
    }

    #[test]
    fn division_by_zero_degrades_to_error() {
        assert_eq!(evaluate("5/0"), Err(EvalError::NonFinite));
        assert_eq!(evaluate("0/0"), Err(EvalError::NonFinite));
    }

    #[test]
    fn malformed_expressions_never_panic() {
        assert!(evaluate("12+").is_err());
        assert!(evaluate("+").is_err());
        assert!(evaluate(".").is_err());
        assert!(evaluate("").is_err());
    }

    #[test]
    fn seeded_negative_expressions_evaluate() {
        assert_eq!(evaluate("-5+3").unwrap(), -2.0);
    }
}
