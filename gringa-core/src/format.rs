//! pt-BR display formatting for monetary values.
//!
//! Period as thousands separator, comma as decimal separator, always two
//! fraction digits rounded half away from zero.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::Currency;

/// Formats a number without symbol: `"1.234,56"`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use gringa_core::format::format_decimal_br;
///
/// assert_eq!(format_decimal_br(dec!(1234.567)), "1.234,57");
/// assert_eq!(format_decimal_br(dec!(0)), "0,00");
/// assert_eq!(format_decimal_br(dec!(-500)), "-500,00");
/// ```
pub fn format_decimal_br(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

    let digits = format!("{:.2}", rounded.abs());
    let (integer_part, fraction_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}{},{fraction_part}", group_thousands(integer_part))
}

/// Formats with the currency symbol: `"R$ 1.234,56"`, `"$ 50,00"`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use gringa_core::Currency;
/// use gringa_core::format::format_currency;
///
/// assert_eq!(format_currency(dec!(450), Currency::Brl), "R$ 450,00");
/// assert_eq!(format_currency(dec!(1000), Currency::Usd), "$ 1.000,00");
/// ```
pub fn format_currency(
    value: Decimal,
    currency: Currency,
) -> String {
    format!("{} {}", currency.symbol(), format_decimal_br(value))
}

/// Formats with symbol and trailing code: `"R$ 1.234,56 BRL"`.
pub fn format_currency_with_code(
    value: Decimal,
    currency: Currency,
) -> String {
    format!("{} {}", format_currency(value, currency), currency.as_str())
}

fn group_thousands(integer_part: &str) -> String {
    let len = integer_part.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}
