use super::*;

// =============================================================
// Known and generic currencies
// =============================================================

#[test]
fn usd_uses_dollar_symbol_and_two_decimals() {
    assert_eq!(format_price(109.95, "USD"), "$109.95");
    assert_eq!(format_price(7.0, "USD"), "$7.00");
}

#[test]
fn large_amounts_are_grouped() {
    assert_eq!(format_price(1_234_567.891, "USD"), "$1,234,567.89");
    assert_eq!(format_price(1000.0, "EUR"), "€1,000.00");
    assert_eq!(format_price(999.0, "GBP"), "£999.00");
}

#[test]
fn zero_decimal_currencies_round_to_whole_units() {
    assert_eq!(format_price(1234.4, "JPY"), "¥1,234");
    assert_eq!(format_price(50_000.0, "KRW"), "₩50,000");
}

#[test]
fn code_is_case_insensitive() {
    assert_eq!(format_price(5.5, "usd"), "$5.50");
}

#[test]
fn unknown_but_well_formed_code_uses_code_prefix() {
    assert_eq!(format_price(12.0, "CHF"), "CHF\u{a0}12.00");
    assert_eq!(format_price(3.14159, "KWD"), "KWD\u{a0}3.142");
}

#[test]
fn negative_amounts_lead_with_minus() {
    assert_eq!(format_price(-5.0, "USD"), "-$5.00");
}

// =============================================================
// Fallback path
// =============================================================

#[test]
fn malformed_code_falls_back_to_dollar_format() {
    assert_eq!(format_price(19.999, "US"), "$20.00");
    assert_eq!(format_price(19.5, "not-a-code"), "$19.50");
    assert_eq!(format_price(0.0, ""), "$0.00");
    assert_eq!(format_price(2.0, "U$D"), "$2.00");
}

#[test]
fn malformed_code_is_reported_by_try_format() {
    assert_eq!(try_format_currency(1.0, "12"), Err(CurrencyError::MalformedCode("12".to_owned())));
}

#[test]
fn non_finite_price_falls_back_without_panicking() {
    assert_eq!(try_format_currency(f64::NAN, "USD"), Err(CurrencyError::NonFinite));
    assert_eq!(format_price(f64::NAN, "USD"), "$NaN");
    assert_eq!(format_price(f64::INFINITY, "bogus"), "$inf");
}

#[test]
fn fallback_never_panics_for_arbitrary_inputs() {
    let prices = [0.0, -0.5, 1e-9, 1e12, f64::MAX, f64::MIN, f64::NAN];
    let codes = ["", "X", "XYZW", "€€€", "usd", " U S D "];
    for price in prices {
        for code in codes {
            assert!(!format_price(price, code).is_empty());
        }
    }
}

#[test]
fn group_thousands_handles_short_inputs() {
    assert_eq!(group_thousands("0"), "0");
    assert_eq!(group_thousands("999"), "999");
    assert_eq!(group_thousands("1000"), "1,000");
}

#[test]
fn intl_failure_is_a_formatting_error() {
    let err = CurrencyError::Intl("RangeError: invalid currency code".to_owned());
    assert_eq!(err.to_string(), "Intl.NumberFormat failed: RangeError: invalid currency code");
}
