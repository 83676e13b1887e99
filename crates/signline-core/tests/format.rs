// File: crates/signline-core/tests/format.rs
// Purpose: Plain and currency label formatting, reparsing, and exact half-up rounding.

use signline_core::format::plain;
use signline_core::{round, ChartError, Locale, NumberFormatter};

fn currency() -> NumberFormatter {
    NumberFormatter::new(true, Locale::en, "$")
}

#[test]
fn round_is_half_up_on_decimal_digits() {
    assert_eq!(round(2.345, 2).unwrap(), 2.35);
    assert_eq!(round(1.005, 2).unwrap(), 1.01);
    assert_eq!(round(-2.345, 2).unwrap(), -2.35);
    assert_eq!(round(2.5, 0).unwrap(), 3.0);
    assert_eq!(round(43000.0, 2).unwrap(), 43000.0);
}

#[test]
fn round_maps_non_finite_and_zero_to_zero() {
    assert_eq!(round(f64::NAN, 2).unwrap(), 0.0);
    assert_eq!(round(f64::INFINITY, 2).unwrap(), 0.0);
    assert_eq!(round(f64::NEG_INFINITY, 2).unwrap(), 0.0);
    assert_eq!(round(0.0, 3).unwrap(), 0.0);
}

#[test]
fn round_rejects_negative_places() {
    match round(-1.0, -1) {
        Err(ChartError::InvalidArgument(_)) => {}
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn currency_groups_thousands_with_prefix() {
    let f = currency();
    assert_eq!(f.format(1234567.5), "$ 1,234,567.5");
    assert_eq!(f.format(43000.0), "$ 43,000");
    assert_eq!(f.format(0.0), "$ 0");
    assert_eq!(f.format(-1500.25), "$ -1,500.25");
    // at most three fraction digits
    assert_eq!(f.format(1.23456), "$ 1.235");
}

#[test]
fn plain_keeps_a_fractional_part() {
    assert_eq!(plain(5000.0), "5000.0");
    assert_eq!(plain(2.345), "2.345");
    assert_eq!(plain(-8.0), "-8.0");
    let f = NumberFormatter::default();
    assert_eq!(f.format(100000.0), "100000.0");
}

#[test]
fn reformat_is_idempotent() {
    let f = currency();
    for x in [0.0, 5000.0, 100000.0, 1234567.5, -42.125, 0.5] {
        let once = f.format(x);
        assert_eq!(f.reformat(&once).unwrap(), once);
        assert_eq!(f.parse(&once).unwrap(), x);
    }
}

#[test]
fn reformat_accepts_plain_input() {
    let f = currency();
    assert_eq!(f.reformat("1234.5").unwrap(), "$ 1,234.5");
    assert_eq!(f.reformat(" $ 9,999 ").unwrap(), "$ 9,999");
}

#[test]
fn reformat_rejects_non_numeric_text() {
    let f = currency();
    match f.reformat("$ twelve") {
        Err(ChartError::Format { input }) => assert_eq!(input, "$ twelve"),
        other => panic!("expected Format error, got {other:?}"),
    }
}

#[test]
fn other_locales_round_trip() {
    let f = NumberFormatter::new(true, Locale::de, "€");
    let text = f.format(1234567.5);
    assert!(text.starts_with("€ "));
    assert_eq!(f.parse(&text).unwrap(), 1234567.5);
}

#[test]
fn currency_keeps_every_digit_beyond_decimal_range() {
    let f = currency();
    let text = f.format(1e40);
    assert_eq!(text, "$ 10,000,000,000,000,000,303,786,028,427,003,666,890,752");
    assert_eq!(f.parse(&text).unwrap(), 1e40);

    let text = f.format(-3.5e38);
    assert!(text.starts_with("$ -350,000,000"), "{text}");
    assert_eq!(f.parse(&text).unwrap(), -3.5e38);
}
