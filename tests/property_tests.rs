//! Property-based tests for the calculator core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::Utc;
use proptest::prelude::*;
use reckon::core::{HistoryEntry, HistoryLog};
use reckon::engine::{Action, Engine, Outcome};
use reckon::eval::{evaluate, EvalError};
use reckon::format::format_number;

prop_compose! {
    fn arbitrary_operand()(int in 0u32..1_000_000, frac in proptest::option::of(0u32..1000)) -> String {
        match frac {
            Some(frac) => format!("{int}.{frac}"),
            None => int.to_string(),
        }
    }
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4u8) -> char {
        match variant {
            0 => '+',
            1 => '-',
            2 => '*',
            _ => '/',
        }
    }
}

prop_compose! {
    fn arbitrary_expression()(
        first in arbitrary_operand(),
        rest in prop::collection::vec((arbitrary_operator(), arbitrary_operand()), 0..4),
    ) -> (String, Vec<f64>, Vec<char>) {
        let mut text = first.clone();
        let mut operands = vec![first.parse::<f64>().unwrap()];
        let mut operators = Vec::new();

        for (op, operand) in rest {
            text.push(op);
            text.push_str(&operand);
            operators.push(op);
            operands.push(operand.parse::<f64>().unwrap());
        }

        (text, operands, operators)
    }
}

/// Flat two-pass reference: fold `*` and `/` into terms first, then sum
/// the terms left to right.
fn reference_eval(operands: &[f64], operators: &[char]) -> f64 {
    let mut terms = vec![operands[0]];
    let mut signs = Vec::new();

    for (op, operand) in operators.iter().zip(&operands[1..]) {
        match op {
            '*' => *terms.last_mut().unwrap() *= operand,
            '/' => *terms.last_mut().unwrap() /= operand,
            sign => {
                signs.push(*sign);
                terms.push(*operand);
            }
        }
    }

    let mut total = terms[0];
    for (sign, term) in signs.iter().zip(&terms[1..]) {
        if *sign == '+' {
            total += term;
        } else {
            total -= term;
        }
    }
    total
}

fn round_like_engine(value: f64) -> f64 {
    let decimals = if value.abs() < 1.0 { 10 } else { 2 };
    format!("{value:.decimals$}").parse().unwrap()
}

fn entry(expression: &str, value: f64) -> HistoryEntry {
    HistoryEntry {
        expression: expression.to_string(),
        value,
        recorded_at: Utc::now(),
    }
}

proptest! {
    #[test]
    fn evaluator_matches_infix_reference((text, operands, operators) in arbitrary_expression()) {
        let expected = reference_eval(&operands, &operators);

        if expected.is_finite() {
            prop_assert_eq!(evaluate(&text).unwrap(), round_like_engine(expected));
        } else {
            // Division by zero somewhere in the chain.
            prop_assert_eq!(evaluate(&text), Err(EvalError::NonFinite));
        }
    }

    #[test]
    fn evaluation_is_deterministic((text, _, _) in arbitrary_expression()) {
        prop_assert_eq!(evaluate(&text), evaluate(&text));
    }

    #[test]
    fn doubled_operator_never_mutates_the_expression(
        digits in "[0-9]{1,5}",
        first in arbitrary_operator(),
        second in arbitrary_operator(),
    ) {
        let mut engine = Engine::new();
        engine.apply_keys(&digits);
        engine.apply_key(&first.to_string());
        let before = engine.expression().as_str().to_string();

        let outcome = engine.apply_key(&second.to_string()).unwrap();
        prop_assert!(matches!(outcome, Outcome::Rejected(_)));
        prop_assert_eq!(engine.expression().as_str(), before);
    }

    #[test]
    fn digit_at_segment_capacity_never_mutates_the_expression(digit in 0u32..10) {
        let mut engine = Engine::new();
        engine.apply_keys("123456789012345");
        let before = engine.expression().as_str().to_string();

        let token = char::from_digit(digit, 10).unwrap();
        let outcome = engine.apply(Action::Number(token));
        prop_assert!(matches!(outcome, Outcome::Rejected(_)));
        prop_assert_eq!(engine.expression().as_str(), before);
    }

    #[test]
    fn second_decimal_never_mutates_the_expression(digits in "[0-9]{1,4}", more in "[0-9]{1,4}") {
        let mut engine = Engine::new();
        engine.apply_keys(&digits);
        engine.apply(Action::Decimal);
        engine.apply_keys(&more);
        let before = engine.expression().as_str().to_string();

        let outcome = engine.apply(Action::Decimal);
        prop_assert!(matches!(outcome, Outcome::Rejected(_)));
        prop_assert_eq!(engine.expression().as_str(), before);
    }

    #[test]
    fn log_never_exceeds_capacity_and_stays_newest_first(count in 1usize..50) {
        let mut log = HistoryLog::new(20);
        for i in 0..count {
            log = log.record(entry(&format!("{i}+0"), i as f64));
        }

        prop_assert!(log.len() <= 20);
        prop_assert_eq!(log.len(), count.min(20));
        prop_assert_eq!(
            log.entries()[0].expression.clone(),
            format!("{}+0", count - 1)
        );
    }

    #[test]
    fn record_is_pure(expression in "[0-9]{1,5}\\+[0-9]{1,5}", value in -1e6f64..1e6) {
        let log = HistoryLog::new(20).record(entry("1+1", 2.0));
        let recorded = log.record(entry(&expression, value));

        prop_assert_eq!(log.len(), 1);
        prop_assert_eq!(recorded.len(), 2);
    }

    #[test]
    fn grouped_integers_strip_back_to_their_digits(value in 0u64..1_000_000_000_000_000) {
        let formatted = format_number(value as f64);
        let stripped: String = formatted.chars().filter(|c| *c != ',').collect();
        prop_assert_eq!(stripped, value.to_string());

        let groups: Vec<&str> = formatted.split(',').collect();
        prop_assert!((1..=3).contains(&groups[0].len()));
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
    }

    #[test]
    fn rejected_submissions_never_panic(text in "[0-9+*/.-]{0,12}") {
        // Whatever the outcome, malformed input must degrade, not crash.
        let _ = evaluate(&text);

        let mut engine = Engine::new();
        engine.apply_keys(&text);
        engine.apply(Action::Submit);
    }
}
