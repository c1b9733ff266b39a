//! Utility functions for the wallet core
//!
//! Timestamps and fixed-point amount formatting/parsing.

use crate::shared::constants::messages;
use crate::shared::error::WalletError;
use crate::shared::types::DecimalAmount;

/// Current time in milliseconds since the Unix epoch
pub fn current_timestamp_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format a smallest-unit amount with exactly `decimals` fraction digits.
///
/// `format_amount(1_000_000, 6)` is `"1.000000"`.
pub fn format_amount(raw: u128, decimals: u8) -> String {
    let digits = raw.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    if digits.len() <= decimals {
        // Pad with leading zeros
        let mut formatted = "0.".to_string();
        formatted.push_str(&"0".repeat(decimals - digits.len()));
        formatted.push_str(&digits);
        formatted
    } else {
        // Insert decimal point
        let mut formatted = digits;
        let decimal_pos = formatted.len() - decimals;
        formatted.insert(decimal_pos, '.');
        formatted
    }
}

/// Parse a user-entered decimal string.
///
/// Rejects anything that is not `[+-]?digits[.digits]`, and rejects
/// negative values with the "zero or less" message rather than the
/// "not a number" one.
pub fn parse_decimal(amount: &str) -> Result<DecimalAmount, WalletError> {
    let amount = amount.trim();
    let (negative, unsigned) = match amount.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, amount.strip_prefix('+').unwrap_or(amount)),
    };

    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(WalletError::validation(messages::INVALID_AMOUNT));
    }

    if negative {
        return Err(WalletError::validation(messages::AMOUNT_NOT_POSITIVE));
    }

    Ok(DecimalAmount::new(
        whole.trim_start_matches('0'),
        fraction.trim_end_matches('0'),
    ))
}

/// Parse a decimal string into smallest units for a token with `decimals`
pub fn parse_amount(amount: &str, decimals: u8) -> Result<u128, WalletError> {
    parse_decimal(amount)?.to_raw(decimals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_current_timestamp() {
        assert!(current_timestamp_millis() > 1_600_000_000_000);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1_000_000, 6), "1.000000");
        assert_eq!(format_amount(100_000, 6), "0.100000");
        assert_eq!(format_amount(0, 6), "0.000000");
        assert_eq!(format_amount(1, 18), "0.000000000000000001");
        assert_eq!(format_amount(42, 0), "42");
        assert_eq!(format_amount(123_456_789, 6), "123.456789");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1", 6).expect("whole"), 1_000_000);
        assert_eq!(parse_amount("1.5", 6).expect("fraction"), 1_500_000);
        assert_eq!(parse_amount(".25", 6).expect("leading dot"), 250_000);
        assert_eq!(parse_amount("0.000001", 6).expect("one sun"), 1);
        assert_eq!(parse_amount(" 2.10 ", 2).expect("trimmed"), 210);
        assert_eq!(parse_amount("1.2300000", 6).expect("trailing zeros"), 1_230_000);
    }

    #[test]
    fn test_parse_amount_rejections() {
        let message = |s: &str, d: u8| parse_amount(s, d).unwrap_err().user_message();

        assert_eq!(message("abc", 6), messages::INVALID_AMOUNT);
        assert_eq!(message("", 6), messages::INVALID_AMOUNT);
        assert_eq!(message(".", 6), messages::INVALID_AMOUNT);
        assert_eq!(message("1.2.3", 6), messages::INVALID_AMOUNT);
        assert_eq!(message("1e5", 6), messages::INVALID_AMOUNT);
        assert_eq!(message("-1", 6), messages::AMOUNT_NOT_POSITIVE);
        assert_eq!(message("0.0000001", 6), messages::TOO_MANY_DECIMALS);
        assert_eq!(message("999999999999999999999999999999999999999999", 6), messages::INVALID_AMOUNT);
    }

    #[test]
    fn test_parse_decimal_zero() {
        assert!(parse_decimal("0").expect("zero parses").is_zero());
        assert!(parse_decimal("0.000").expect("zero parses").is_zero());
        assert!(!parse_decimal("0.001").expect("non-zero").is_zero());
    }

    proptest! {
        #[test]
        fn prop_format_then_parse_is_identity(raw in 0u128..u64::MAX as u128, decimals in 0u8..=18) {
            let formatted = format_amount(raw, decimals);
            prop_assert_eq!(parse_amount(&formatted, decimals).unwrap(), raw);
        }

        #[test]
        fn prop_formatted_amount_has_exact_fraction_digits(raw in any::<u64>(), decimals in 1u8..=18) {
            let formatted = format_amount(raw as u128, decimals);
            let fraction = formatted.split('.').nth(1).unwrap();
            prop_assert_eq!(fraction.len(), decimals as usize);
        }
    }
}
