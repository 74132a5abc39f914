//! Number formatting and the bounded factorial.

/// Largest `n` whose factorial is finite in double precision.
pub const FACTORIAL_LIMIT: u32 = 170;

/// Format a number the way the evaluation service and its clients expect.
///
/// Integral values print without a fraction; very large or very small
/// magnitudes switch to exponent form with an explicit exponent sign.
///
/// ```rust
/// use calculon::core::format_number;
///
/// assert_eq!(format_number(42.0), "42");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1e-7), "1e-7");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }

    let exponential = format!("{:e}", value);
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

/// Iterative factorial in double precision, `None` above [`FACTORIAL_LIMIT`].
pub fn factorial(n: u32) -> Option<f64> {
    if n > FACTORIAL_LIMIT {
        return None;
    }
    Some((2..=n).fold(1.0, |acc, i| acc * f64::from(i)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(120.0), "120");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn fractions_use_shortest_representation() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(0.0000015), "0.0000015");
    }

    #[test]
    fn large_magnitudes_use_signed_exponent() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e300), "-2.5e+300");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn non_finite_values_have_names() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn factorial_small_values() {
        assert_eq!(factorial(0), Some(1.0));
        assert_eq!(factorial(1), Some(1.0));
        assert_eq!(factorial(5), Some(120.0));
        assert_eq!(factorial(10), Some(3628800.0));
    }

    #[test]
    fn factorial_at_limit_is_finite() {
        let value = factorial(FACTORIAL_LIMIT).unwrap();
        assert!(value.is_finite());
        assert_eq!(format_number(value), "7.257415615307994e+306");
    }

    #[test]
    fn factorial_beyond_limit_is_rejected() {
        assert_eq!(factorial(FACTORIAL_LIMIT + 1), None);
    }
}
