//! Pure display formatting for values and live expressions.
//!
//! Maps numeric values to human-readable strings: thousands grouping for
//! ordinary magnitudes, exponential notation at the extremes, and the
//! empty string for anything that is not a finite number.

/// Format a value for result and history display.
///
/// - non-finite → `""`
/// - |v| ≥ 1e15, or 0 < |v| ≤ 1e-15 → exponential with 6 fractional
///   digits and an explicit exponent sign
/// - 0 < |v| < 1e-6 → shortest exponential form
/// - otherwise → shortest decimal form with `,` grouping every three
///   digits of the integer portion
///
/// # Example
///
/// ```rust
/// use reckon::format::format_number;
///
/// assert_eq!(format_number(1234567.0), "1,234,567");
/// assert_eq!(format_number(0.00000000001), "1e-11");
/// assert_eq!(format_number(f64::NAN), "");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let magnitude = value.abs();

    if magnitude >= 1e15 || (magnitude > 0.0 && magnitude <= 1e-15) {
        return format_exponential(value);
    }

    // Sub-microscopic values keep their natural exponential spelling
    // rather than a 0.000… tail.
    if magnitude > 0.0 && magnitude < 1e-6 {
        return format!("{value:e}");
    }

    group_decimal(&value.to_string())
}

/// Format live expression text for display.
///
/// Thousands grouping is applied to the integer portion of each numeric
/// segment; fractional digits and operators pass through untouched.
///
/// # Example
///
/// ```rust
/// use reckon::format::format_expression;
///
/// assert_eq!(format_expression("1234567+89"), "1,234,567+89");
/// assert_eq!(format_expression("1234.5678"), "1,234.5678");
/// ```
pub fn format_expression(expression: &str) -> String {
    let mut out = String::with_capacity(expression.len() + expression.len() / 3);
    let mut run = String::new();
    let mut in_fraction = false;

    for c in expression.chars() {
        if c.is_ascii_digit() {
            run.push(c);
            continue;
        }
        flush_run(&mut out, &run, in_fraction);
        run.clear();
        out.push(c);
        in_fraction = c == '.';
    }
    flush_run(&mut out, &run, in_fraction);

    out
}

fn flush_run(out: &mut String, run: &str, in_fraction: bool) {
    if in_fraction {
        out.push_str(run);
    } else {
        out.push_str(&group_digits(run));
    }
}

/// Exponential rendering with 6 fractional digits, a signed exponent,
/// and grouping applied to the mantissa's integer part.
fn format_exponential(value: f64) -> String {
    let text = format!("{value:.6e}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };

    let mantissa = group_decimal(mantissa);
    if exponent.starts_with('-') {
        format!("{mantissa}e{exponent}")
    } else {
        format!("{mantissa}e+{exponent}")
    }
}

/// Group the integer portion of a plain decimal string, preserving sign
/// and fractional digits.
fn group_decimal(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let grouped = group_digits(int_part);
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Insert `,` every three digits, counting from the right.
fn group_digits(digits: &str) -> String {
    let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(c);
    }
    reversed.chars().rev().collect()
}
