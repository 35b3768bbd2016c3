//! Locale-aware number formatting for displayed amounts.
//!
//! Every function here is a pure function of its numeric input, so the
//! formatting can be exercised independently of the ticker. Rounding goes
//! through [`rust_decimal`] to avoid the binary-float artefacts of
//! `format!("{:.2}")` on values such as `0.125`.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::calculation::RateUnit;
use crate::models::Currency;

/// Decimal places used for accrued amounts.
pub const AMOUNT_DECIMALS: u32 = 2;

/// Deepest decimal place checked when looking for a significant digit.
const MAX_RATE_DECIMALS: u32 = 6;

/// Number formatting conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NumberLocale {
    /// `1,234.56`
    #[default]
    #[serde(rename = "en")]
    En,
    /// `1.234,56`
    #[serde(rename = "es-AR")]
    EsAr,
}

impl NumberLocale {
    /// Thousands separator.
    pub fn grouping(self) -> char {
        match self {
            NumberLocale::En => ',',
            NumberLocale::EsAr => '.',
        }
    }

    /// Decimal separator.
    pub fn decimal(self) -> char {
        match self {
            NumberLocale::En => '.',
            NumberLocale::EsAr => ',',
        }
    }
}

impl std::str::FromStr for NumberLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" | "en-US" => Ok(NumberLocale::En),
            "es" | "es-AR" => Ok(NumberLocale::EsAr),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

/// Formats `value` with exactly `decimals` places and grouped thousands.
///
/// Midpoints round away from zero.
///
/// # Example
///
/// ```
/// use paystream::format::{format_number, NumberLocale};
///
/// assert_eq!(format_number(1234567.891, 2, NumberLocale::En), "1,234,567.89");
/// assert_eq!(format_number(1234567.891, 2, NumberLocale::EsAr), "1.234.567,89");
/// assert_eq!(format_number(0.125, 2, NumberLocale::En), "0.13");
/// ```
pub fn format_number(value: f64, decimals: u32, locale: NumberLocale) -> String {
    let plain = fixed_point(value, decimals);
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(plain.len() + integer.len() / 3 + 1);
    out.push_str(sign);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(locale.grouping());
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push(locale.decimal());
        out.push_str(fraction);
    }
    out
}

/// Renders `value` with exactly `decimals` places, `.` as separator and no
/// grouping.
fn fixed_point(value: f64, decimals: u32) -> String {
    match Decimal::from_f64(value) {
        Some(d) => {
            let mut rounded = d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            if rounded.is_zero() {
                rounded.set_sign_positive(true);
            }
            rounded.rescale(decimals);
            rounded.to_string()
        }
        // Out of Decimal's range (or not finite): fall back to float formatting.
        None => format!("{:.*}", decimals as usize, value),
    }
}

/// Formats an accrued amount as `"<CODE> <number>"` with two decimals.
///
/// # Example
///
/// ```
/// use paystream::format::{format_amount, NumberLocale};
/// use paystream::models::Currency;
///
/// assert_eq!(format_amount(1500.0, Currency::Usd, NumberLocale::En), "USD 1,500.00");
/// assert_eq!(format_amount(1.5, Currency::Ars, NumberLocale::EsAr), "ARS 1,50");
/// ```
pub fn format_amount(value: f64, currency: Currency, locale: NumberLocale) -> String {
    format!(
        "{} {}",
        currency.code(),
        format_number(value, AMOUNT_DECIMALS, locale)
    )
}

/// Chooses how many decimals a small rate needs so that at least one
/// non-zero decimal digit is visible.
///
/// Two decimals when either of the first two is non-zero (or there is no
/// fractional part worth showing); otherwise enough places to reach the
/// first non-zero digit, never fewer than 3 nor more than 6.
///
/// # Example
///
/// ```
/// use paystream::format::significant_decimals;
///
/// assert_eq!(significant_decimals(27.78), 2);
/// assert_eq!(significant_decimals(0.004), 3);
/// assert_eq!(significant_decimals(0.000463), 4);
/// assert_eq!(significant_decimals(1500.0), 2);
/// ```
pub fn significant_decimals(value: f64) -> u32 {
    let digits = fixed_point(value.abs(), MAX_RATE_DECIMALS);
    let fraction = digits.split_once('.').map_or("", |(_, f)| f).as_bytes();

    if fraction.len() < 2 || fraction[0] != b'0' || fraction[1] != b'0' {
        return AMOUNT_DECIMALS;
    }
    match fraction.iter().position(|b| *b != b'0') {
        Some(index) => (index as u32 + 1).clamp(3, MAX_RATE_DECIMALS),
        None => AMOUNT_DECIMALS,
    }
}

/// Formats an earning rate as `"<CODE> <number> / <unit>"`.
///
/// # Example
///
/// ```
/// use paystream::calculation::RateUnit;
/// use paystream::format::{format_rate, NumberLocale};
/// use paystream::models::Currency;
///
/// assert_eq!(
///     format_rate(0.000463, Currency::Usd, RateUnit::Second, NumberLocale::En),
///     "USD 0.0005 / s"
/// );
/// assert_eq!(
///     format_rate(1666.67, Currency::Ars, RateUnit::Hour, NumberLocale::EsAr),
///     "ARS 1.666,67 / h"
/// );
/// ```
pub fn format_rate(value: f64, currency: Currency, unit: RateUnit, locale: NumberLocale) -> String {
    format!(
        "{} {} / {}",
        currency.code(),
        format_number(value, significant_decimals(value), locale),
        unit.label()
    )
}

/// One rendered character of a formatted amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitCell {
    /// The character.
    pub ch: char,
    /// True for characters after the decimal separator.
    pub is_decimal: bool,
}

/// Splits a formatted number into cells for a digit-flip renderer.
pub fn digit_cells(formatted: &str, locale: NumberLocale) -> Vec<DigitCell> {
    let decimal_at = formatted.chars().position(|c| c == locale.decimal());
    formatted
        .chars()
        .enumerate()
        .map(|(i, ch)| DigitCell {
            ch,
            is_decimal: decimal_at.is_some_and(|at| i > at),
        })
        .collect()
}

/// Width in characters of the widest amount a configuration can reach,
/// used to keep the counter from reflowing as digits are added.
pub fn max_amount_width(month_end: (f64, f64), currency: Currency, locale: NumberLocale) -> usize {
    let primary = format_amount(month_end.0, currency, locale);
    let other = format_amount(month_end.1, currency.other(), locale);
    primary.chars().count().max(other.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_groups_thousands() {
        assert_eq!(format_number(0.0, 2, NumberLocale::En), "0.00");
        assert_eq!(format_number(999.0, 2, NumberLocale::En), "999.00");
        assert_eq!(format_number(1000.0, 2, NumberLocale::En), "1,000.00");
        assert_eq!(format_number(1_200_000.0, 0, NumberLocale::EsAr), "1.200.000");
    }

    #[test]
    fn test_negative_values_keep_sign_outside_grouping() {
        assert_eq!(format_number(-1234.5, 2, NumberLocale::En), "-1,234.50");
    }

    #[test]
    fn test_rounds_to_zero_without_negative_sign() {
        assert_eq!(format_number(-0.001, 2, NumberLocale::En), "0.00");
    }

    #[test]
    fn test_non_finite_falls_back() {
        assert_eq!(format_number(f64::INFINITY, 2, NumberLocale::En), "inf");
    }

    #[test]
    fn test_format_amount_pads_decimals() {
        assert_eq!(format_amount(600.0, Currency::Usd, NumberLocale::En), "USD 600.00");
        assert_eq!(
            format_amount(600_000.0, Currency::Ars, NumberLocale::EsAr),
            "ARS 600.000,00"
        );
    }

    #[test]
    fn test_significant_decimals_caps_at_six() {
        assert_eq!(significant_decimals(0.0000046), 6);
        assert_eq!(significant_decimals(0.00000001), 2);
    }

    #[test]
    fn test_significant_decimals_ignores_sign() {
        assert_eq!(significant_decimals(-0.004), 3);
    }

    #[test]
    fn test_digit_cells_flags_decimals() {
        let cells = digit_cells("1.234,56", NumberLocale::EsAr);
        let decimals: String = cells.iter().filter(|c| c.is_decimal).map(|c| c.ch).collect();
        assert_eq!(decimals, "56");
        assert!(!cells[1].is_decimal);
    }

    #[test]
    fn test_digit_cells_without_separator() {
        let cells = digit_cells("1500", NumberLocale::En);
        assert!(cells.iter().all(|c| !c.is_decimal));
    }

    #[test]
    fn test_max_amount_width_uses_wider_side() {
        // "ARS 1,200,000.00" is wider than "USD 1,200.00".
        let width = max_amount_width((1200.0, 1_200_000.0), Currency::Usd, NumberLocale::En);
        assert_eq!(width, "ARS 1,200,000.00".len());
    }

    #[test]
    fn test_locale_parses_and_deserializes() {
        assert_eq!("es-AR".parse::<NumberLocale>().unwrap(), NumberLocale::EsAr);
        assert_eq!(
            serde_json::from_str::<NumberLocale>("\"en\"").unwrap(),
            NumberLocale::En
        );
        assert!("fr".parse::<NumberLocale>().is_err());
    }

    proptest! {
        #[test]
        fn prop_small_rates_show_a_significant_digit(value in 0.00001f64..0.99) {
            let text = format_number(value, significant_decimals(value), NumberLocale::En);
            let fraction = text.split_once('.').map(|(_, f)| f).unwrap_or("");
            prop_assert!(fraction.chars().any(|c| c != '0'), "no significant digit in {}", text);
        }
    }
}
