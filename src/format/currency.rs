//! US dollar currency formatting (en-US style)
//!
//! `5239.95` → `"$5,239.95"`, `-1234.5` → `"-$1,234.50"`.
//!
//! Rounding works on the shortest decimal representation of the value and
//! rounds half away from zero on the cent, so `1.005` formats as `$1.01`
//! just like a browser's `Intl.NumberFormat`. Digit grouping comes from the
//! ICU en-US decimal formatter.

use std::sync::OnceLock;

use icu_decimal::input::Decimal;
use icu_decimal::options::DecimalFormatterOptions;
use icu_decimal::DecimalFormatter;
use icu_locale_core::Locale;

fn make_en_us_formatter() -> Option<DecimalFormatter> {
    let locale: Locale = "en-US".parse().ok()?;
    DecimalFormatter::try_new(locale.into(), DecimalFormatterOptions::default()).ok()
}

fn formatter() -> Option<&'static DecimalFormatter> {
    static FORMATTER: OnceLock<Option<DecimalFormatter>> = OnceLock::new();
    FORMATTER.get_or_init(make_en_us_formatter).as_ref()
}

/// Format a dollar amount with thousands separators and exactly two decimals
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };

    if value.is_nan() {
        return "$NaN".to_string();
    }
    if value.is_infinite() {
        return format!("{}$∞", sign);
    }

    let Some(cents) = round_to_cents(value.abs()) else {
        return format!("{}$∞", sign);
    };

    let mut amount = Decimal::from(cents);
    amount.multiply_pow10(-2);

    let digits = match formatter() {
        Some(formatter) => formatter.format(&amount).to_string(),
        None => amount.to_string(),
    };
    format!("{}${}", sign, digits)
}

/// Whole cents of a non-negative amount, half away from zero on the third
/// fraction digit of its shortest decimal form
fn round_to_cents(amount: f64) -> Option<i64> {
    let decimal = amount.to_string();
    let (whole, fraction) = decimal.split_once('.').unwrap_or((decimal.as_str(), ""));

    let mut fraction = fraction.chars().chain(std::iter::repeat('0'));
    let mut next_digit = || fraction.next().and_then(|c| c.to_digit(10)).map(i64::from);

    let tenths = next_digit()?;
    let hundredths = next_digit()?;
    let round_up = next_digit()? >= 5;

    let cents = whole
        .parse::<i64>()
        .ok()?
        .checked_mul(100)?
        .checked_add(tenths * 10 + hundredths)?;
    Some(if round_up { cents + 1 } else { cents })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example() {
        assert_eq!(format_currency(5239.95), "$5,239.95");
        // the summed total carries float noise
        assert_eq!(format_currency(1228.5 + 2010.75 + 2000.7000000000003), "$5,239.95");
    }

    #[test]
    fn test_two_decimals_always() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(7.0), "$7.00");
        assert_eq!(format_currency(7.5), "$7.50");
        assert_eq!(format_currency(0.05), "$0.05");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_currency(999.0), "$999.00");
        assert_eq!(format_currency(1000.0), "$1,000.00");
        assert_eq!(format_currency(123456.0), "$123,456.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(format_currency(1.005), "$1.01");
        assert_eq!(format_currency(1.004), "$1.00");
        assert_eq!(format_currency(0.125), "$0.13");
        assert_eq!(format_currency(999.995), "$1,000.00");
        assert_eq!(format_currency(9.999), "$10.00");
        assert_eq!(format_currency(0.999), "$1.00");
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(0.0), Some(0));
        assert_eq!(round_to_cents(12.0), Some(1200));
        assert_eq!(round_to_cents(1.005), Some(101));
        assert_eq!(round_to_cents(999.995), Some(100000));
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
        assert_eq!(format_currency(-0.004), "-$0.00");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_currency(f64::NAN), "$NaN");
        assert_eq!(format_currency(f64::INFINITY), "$∞");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-$∞");
    }
}
