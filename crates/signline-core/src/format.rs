// File: crates/signline-core/src/format.rs
// Summary: Axis/tooltip number formatting (plain or grouped currency) and exact decimal rounding.

use num_format::{Locale, ToFormattedString};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ChartError, Result};

/// Fraction digits kept by the currency form.
const CURRENCY_FRACTION_DIGITS: u32 = 3;
/// Largest scale `rust_decimal` can represent.
const MAX_SCALE: u32 = 28;

#[derive(Clone, Debug)]
pub struct NumberFormatter {
    pub currency: bool,
    pub locale: Locale,
    pub symbol: String,
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self { currency: false, locale: Locale::en, symbol: "$".to_string() }
    }
}

impl NumberFormatter {
    pub fn new(currency: bool, locale: Locale, symbol: impl Into<String>) -> Self {
        Self { currency, locale, symbol: symbol.into() }
    }

    pub fn format(&self, value: f64) -> String {
        if self.currency { self.currency_text(value) } else { plain(value) }
    }

    /// Strip symbol, whitespace and grouping from previously formatted text and
    /// format the number again in this formatter's mode.
    pub fn reformat(&self, text: &str) -> Result<String> {
        Ok(self.format(self.parse(text)?))
    }

    /// Read back a number produced by `format`.
    pub fn parse(&self, text: &str) -> Result<f64> {
        let separator = self.locale.separator();
        let mut cleaned: String = text
            .replace(self.symbol.as_str(), "")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if !separator.is_empty() {
            cleaned = cleaned.replace(separator, "");
        }
        let decimal = self.locale.decimal();
        if decimal != "." {
            cleaned = cleaned.replace(decimal, ".");
        }
        cleaned
            .parse::<f64>()
            .map_err(|_| ChartError::Format { input: text.to_string() })
    }

    fn currency_text(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{} {}", self.symbol, value);
        }
        let (negative, int_part, frac_digits) = match exact_decimal(value) {
            Some(d) => {
                let d = d
                    .round_dp_with_strategy(CURRENCY_FRACTION_DIGITS, RoundingStrategy::MidpointNearestEven)
                    .normalize();
                let abs = d.abs();
                let int_part = abs.trunc();
                let frac = (abs - int_part).normalize().to_string();
                let frac_digits = frac.split_once('.').map(|(_, f)| f.to_string()).unwrap_or_default();
                let grouped = int_part.to_i128().unwrap_or(0).to_formatted_string(&self.locale);
                (d.is_sign_negative() && !d.is_zero(), grouped, frac_digits)
            }
            // beyond Decimal range there is no fractional part left to show
            None => (value < 0.0, self.group_digits(&format!("{:.0}", value.abs())), String::new()),
        };

        let mut out = String::with_capacity(24);
        out.push_str(&self.symbol);
        out.push(' ');
        if negative {
            out.push_str(self.locale.minus_sign());
        }
        out.push_str(&int_part);
        if !frac_digits.is_empty() {
            out.push_str(self.locale.decimal());
            out.push_str(&frac_digits);
        }
        out
    }

    /// Group an unsigned digit string by thousands with the locale separator.
    fn group_digits(&self, digits: &str) -> String {
        let separator = self.locale.separator();
        let lead = digits.len() % 3;
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (i + 3 - lead) % 3 == 0 {
                out.push_str(separator);
            }
            out.push(c);
        }
        out
    }
}

/// Locale-invariant decimal text with the shortest round-trip digits and
/// always a fractional part (`5000.0`, `2.345`).
pub fn plain(value: f64) -> String {
    let s = value.to_string();
    if value.is_finite() && !s.contains('.') { s + ".0" } else { s }
}

/// Round half-up (away from zero) to `places` decimals on the exact decimal of
/// the shortest representation of `value`, so `2.345` rounds to `2.35`.
/// NaN, infinities and zero round to 0.
pub fn round(value: f64, places: i32) -> Result<f64> {
    if places < 0 {
        return Err(ChartError::InvalidArgument(format!(
            "decimal places must be non-negative, got {places}"
        )));
    }
    if value == 0.0 || !value.is_finite() {
        return Ok(0.0);
    }
    let Some(d) = exact_decimal(value) else {
        return Ok(value);
    };
    let dp = (places as u32).min(MAX_SCALE);
    Ok(d
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(value))
}

fn exact_decimal(value: f64) -> Option<Decimal> {
    value
        .to_string()
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_f64_retain(value))
}
