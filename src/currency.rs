//! Currency precision helpers

/// Number of decimal places kept on stored outputs
pub const CURRENCY_DECIMALS: i32 = 2;

/// Round a value to currency precision (2 dp) for storage in a result row.
///
/// Negative zero is normalised to zero so rounded outputs compare bit-for-bit.
pub fn round_currency(value: f64) -> f64 {
    let scale = 10f64.powi(CURRENCY_DECIMALS);
    (value * scale).round() / scale + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_cents() {
        assert_eq!(round_currency(10.004), 10.0);
        assert_eq!(round_currency(10.006), 10.01);
        assert_eq!(round_currency(0.1 + 0.2), 0.3);
        assert_eq!(round_currency(-2.345_6), -2.35);
    }

    #[test]
    fn test_negative_zero_normalised() {
        let rounded = round_currency(-0.001);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }
}
