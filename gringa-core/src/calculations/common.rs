//! Common utility functions for the calculation modules.
//!
//! This module provides the lenient amount parser shared by every entry
//! point, the rounding used for display, and the saturating arithmetic that
//! keeps the engine total for any numeric input.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

/// Digits a [`Decimal`] mantissa can hold.
const MAX_DIGITS: usize = 28;

/// Exponents beyond this magnitude saturate (or vanish) without looping.
const MAX_EXPONENT: i64 = 60;

/// Leading numeric prefix: sign, digits, optional fraction, optional exponent.
///
/// Only ASCII digits count; `\d` would also match other scripts' digits,
/// which `Decimal` cannot parse.
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<sign>[+-]?)(?P<int>[0-9]*)(?:\.(?P<frac>[0-9]*))?(?:[eE](?P<exp>[+-]?[0-9]+))?")
        .expect("numeric prefix pattern is valid")
});

/// Parses user text into an amount, returning `None` when no number is present.
///
/// Leading whitespace is skipped and anything after the numeric prefix is
/// ignored, so `"10abc"` reads as 10 and `"1,5"` reads as 1. Values too large
/// for a [`Decimal`] saturate to [`Decimal::MAX`] or [`Decimal::MIN`];
/// exponents too small to represent give zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use gringa_core::calculations::common::try_parse_amount;
///
/// assert_eq!(try_parse_amount("  12.5"), Some(dec!(12.5)));
/// assert_eq!(try_parse_amount("10abc"), Some(dec!(10)));
/// assert_eq!(try_parse_amount("1.5e3"), Some(dec!(1500)));
/// assert_eq!(try_parse_amount("abc"), None);
/// assert_eq!(try_parse_amount(""), None);
/// ```
pub fn try_parse_amount(text: &str) -> Option<Decimal> {
    let caps = NUMERIC_PREFIX.captures(text.trim_start())?;

    let negative = &caps["sign"] == "-";
    let int_digits = caps["int"].trim_start_matches('0');
    let frac_digits = caps.name("frac").map_or("", |m| m.as_str());

    // A bare sign or dot is not a number.
    if caps["int"].is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mantissa = parse_mantissa(int_digits, frac_digits, negative);

    let Some(exp) = caps.name("exp") else {
        return Some(mantissa);
    };
    let exponent = exp.as_str().parse::<i64>().unwrap_or_else(|_| {
        if exp.as_str().starts_with('-') { i64::MIN } else { i64::MAX }
    });

    Some(apply_exponent(mantissa, exponent))
}

/// Parses user text into an amount, treating anything unparsable as zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use gringa_core::calculations::common::parse_amount;
///
/// assert_eq!(parse_amount("100"), dec!(100));
/// assert_eq!(parse_amount("not a number"), Decimal::ZERO);
/// ```
pub fn parse_amount(text: &str) -> Decimal {
    try_parse_amount(text).unwrap_or(Decimal::ZERO)
}

/// Whether the whole of `text` (ignoring surrounding whitespace) is one number.
///
/// `try_parse_amount` accepts `"1,5"` as 1; this is how callers find out
/// that part of the input was dropped.
///
/// # Examples
///
/// ```
/// use gringa_core::calculations::common::is_complete_amount;
///
/// assert!(is_complete_amount(" 1.5e3 "));
/// assert!(!is_complete_amount("1,5"));
/// assert!(!is_complete_amount(""));
/// ```
pub fn is_complete_amount(text: &str) -> bool {
    let trimmed = text.trim();

    try_parse_amount(trimmed).is_some()
        && NUMERIC_PREFIX
            .find(trimmed)
            .is_some_and(|m| m.end() == trimmed.len())
}

fn parse_mantissa(
    int_digits: &str,
    frac_digits: &str,
    negative: bool,
) -> Decimal {
    if int_digits.len() > MAX_DIGITS + 1 {
        return saturate(negative);
    }

    let keep = MAX_DIGITS.saturating_sub(int_digits.len()).min(frac_digits.len());
    let int_part = if int_digits.is_empty() { "0" } else { int_digits };
    let literal = if keep == 0 {
        int_part.to_string()
    } else {
        format!("{int_part}.{}", &frac_digits[..keep])
    };

    match literal.parse::<Decimal>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => saturate(negative),
    }
}

fn apply_exponent(
    mantissa: Decimal,
    exponent: i64,
) -> Decimal {
    if mantissa.is_zero() {
        return Decimal::ZERO;
    }
    if exponent > MAX_EXPONENT {
        return saturate(mantissa.is_sign_negative());
    }
    if exponent < -MAX_EXPONENT {
        return Decimal::ZERO;
    }

    let mut value = mantissa;
    if exponent >= 0 {
        for _ in 0..exponent {
            value = value.saturating_mul(Decimal::TEN);
        }
    } else {
        for _ in 0..exponent.unsigned_abs() {
            value /= Decimal::TEN;
        }
    }
    value
}

fn saturate(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}

/// Returns `rate` only when it can be used for a conversion (strictly positive).
pub fn usable_rate(rate: Option<Decimal>) -> Option<Decimal> {
    rate.filter(|r| *r > Decimal::ZERO)
}

/// `base * percent / 100`, saturating on overflow.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use gringa_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(4998), dec!(13)), dec!(649.74));
/// ```
pub fn percent_of(
    base: Decimal,
    percent: Decimal,
) -> Decimal {
    base.saturating_mul(percent) / Decimal::ONE_HUNDRED
}

/// `amount / rate`, saturating when the quotient does not fit.
///
/// Callers guarantee `rate` is non-zero.
pub fn divide_by_rate(
    amount: Decimal,
    rate: Decimal,
) -> Decimal {
    amount
        .checked_div(rate)
        .unwrap_or_else(|| saturate(amount.is_sign_negative() != rate.is_sign_negative()))
}

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero, matching how amounts
/// are displayed.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use gringa_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
