//! Currency converter tests
//!
//! Covers the conversion formula, the three rate-table failure kinds and the
//! full stdin payload pipeline.

use approx::{assert_relative_eq, relative_eq};
use pocket_tools::currency::{self, convert_amount, ConversionRequest, CurrencyConverter, RateTable};
use pocket_tools::error::ToolError;
use proptest::prelude::*;

#[cfg(test)]
mod converter_tests {
    use super::*;

    // ========== Conversion ==========

    #[test]
    fn test_usd_to_eur_example() {
        let result = currency::run("100 USD EUR\n{\"USD\": 1.0, \"EUR\": 0.5}").unwrap();
        assert_relative_eq!(result, 50.0);
        assert_eq!(currency::format_amount(result), "50");
    }

    #[test]
    fn test_cross_conversion_through_base() {
        let converter =
            CurrencyConverter::from_json(r#"{"USD": 1.0, "EUR": 0.92, "PLN": 4.0}"#).unwrap();
        let result = converter
            .convert(&ConversionRequest::new(92.0, "EUR", "PLN"))
            .unwrap();
        assert_relative_eq!(result, 400.0, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_and_zero_amounts_pass_through() {
        let converter = CurrencyConverter::from_json(r#"{"USD": 1.0, "EUR": 0.5}"#).unwrap();
        let negative = converter
            .convert(&ConversionRequest::new(-10.0, "USD", "EUR"))
            .unwrap();
        assert_relative_eq!(negative, -5.0);
        let zero = converter
            .convert(&ConversionRequest::new(0.0, "USD", "EUR"))
            .unwrap();
        assert_eq!(zero, 0.0);
    }

    #[test]
    fn test_lowercase_request_codes() {
        let result = currency::run("10 usd eur\n{\"USD\": 1.0, \"EUR\": 0.5}").unwrap();
        assert_relative_eq!(result, 5.0);
    }

    #[test]
    fn test_snapshot_layout() {
        let input = "100 EUR USD\n{\"base\": \"EUR\", \"date\": \"2024-05-01\", \"rates\": {\"USD\": 1.07, \"GBP\": 0.85}}";
        assert_relative_eq!(currency::run(input).unwrap(), 107.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flat_table_with_nested_rates_key() {
        let input = "100 USD EUR\n{\"USD\": 1.0, \"EUR\": 0.5, \"rates\": {\"note\": 1}}";
        assert_relative_eq!(currency::run(input).unwrap(), 50.0);
    }

    #[test]
    fn test_snapshot_base_is_always_one() {
        let input = "1 EUR USD\n{\"base\": \"EUR\", \"rates\": {\"eur\": 2.0, \"USD\": 1.0}}";
        assert_relative_eq!(currency::run(input).unwrap(), 1.0);
    }

    // ========== Failure kinds ==========

    #[test]
    fn test_malformed_rate_table() {
        let err = currency::run("100 USD EUR\n{\"USD\": }").unwrap_err();
        assert!(matches!(err, ToolError::MalformedRateTable(_)));
    }

    #[test]
    fn test_trailing_garbage_is_malformed() {
        let err = currency::run("100 USD EUR\n{\"USD\": 1.0} extra").unwrap_err();
        assert!(matches!(err, ToolError::MalformedRateTable(_)));
    }

    #[test]
    fn test_unknown_currency() {
        let err = currency::run("100 USD XYZ\n{\"USD\": 1.0}").unwrap_err();
        assert!(matches!(err, ToolError::UnknownCurrency { .. }));
        assert_eq!(err.unknown_codes(), ["XYZ".to_string()]);
        assert!(err.to_string().contains("XYZ"));
    }

    #[test]
    fn test_both_currencies_unknown() {
        let err = currency::run("1 ABC XYZ\n{\"USD\": 1.0}").unwrap_err();
        assert_eq!(err.unknown_codes(), ["ABC".to_string(), "XYZ".to_string()]);
    }

    #[test]
    fn test_zero_rate_is_invalid_not_missing() {
        let err = currency::run("100 USD EUR\n{\"USD\": 1.0, \"EUR\": 0}").unwrap_err();
        assert!(matches!(err, ToolError::InvalidRate { ref code, .. } if code == "EUR"));
    }

    #[test]
    fn test_non_numeric_rate_is_invalid() {
        let err = currency::run("100 USD EUR\n{\"USD\": \"one\", \"EUR\": 0.5}").unwrap_err();
        assert!(matches!(err, ToolError::InvalidRate { ref code, .. } if code == "USD"));
    }

    #[test]
    fn test_unrequested_bad_entries_are_ignored() {
        let input = "100 USD EUR\n{\"USD\": 1.0, \"EUR\": 0.5, \"BAD\": -3, \"META\": {\"x\": 1}}";
        assert_relative_eq!(currency::run(input).unwrap(), 50.0);
    }

    #[test]
    fn test_overflow_is_out_of_range() {
        let err = currency::run("1e308 USD EUR\n{\"USD\": 1e-10, \"EUR\": 1.0}").unwrap_err();
        assert!(matches!(err, ToolError::ResultOutOfRange(_)));
    }

    #[test]
    fn test_subnormal_rate_is_invalid() {
        let err = currency::run("1 USD EUR\n{\"USD\": 5e-324, \"EUR\": 1.0}").unwrap_err();
        assert!(matches!(err, ToolError::InvalidRate { ref code, .. } if code == "USD"));
    }

    #[test]
    fn test_malformed_request() {
        for input in ["", "100 USD\n{}", "abc USD EUR\n{}"] {
            assert!(
                matches!(currency::run(input), Err(ToolError::MalformedRequest(_))),
                "expected malformed request for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_idempotent() {
        let input = "12.34 USD EUR\n{\"USD\": 1.0, \"EUR\": 0.92}";
        assert_eq!(
            currency::run(input).unwrap(),
            currency::run(input).unwrap()
        );
    }
}

proptest! {
    #[test]
    fn prop_conversion_formula(a in 0.01f64..1e6, r1 in 0.001f64..1e4, r2 in 0.001f64..1e4) {
        let table = RateTable::from_rates([("AAA", r1), ("BBB", r2)]);
        let converter = CurrencyConverter::new(table);
        let result = converter.convert(&ConversionRequest::new(a, "AAA", "BBB")).unwrap();
        prop_assert_eq!(result, (a / r1) * r2);
    }

    #[test]
    fn prop_identity_conversion(a in 0.01f64..1e6, r in 0.001f64..1e4) {
        prop_assert!(relative_eq!(convert_amount(a, r, r), a, max_relative = 1e-12));
    }

    #[test]
    fn prop_round_trip(a in 0.01f64..1e6, r1 in 0.001f64..1e4, r2 in 0.001f64..1e4) {
        let there = convert_amount(a, r1, r2);
        let back = convert_amount(there, r2, r1);
        prop_assert!(relative_eq!(back, a, max_relative = 1e-9));
    }
}
