//! Monetary conversion primitives.
//!
//! Each function turns one entry (amount text, kind, currency) into a BRL
//! figure. None of them can fail: a missing or non-positive rate and an
//! unparsable amount both produce zero, and no range checking happens here.
//!
//! | Entry       | Percent basis                         | Fixed USD       | Fixed BRL |
//! |-------------|---------------------------------------|-----------------|-----------|
//! | fee / tax   | `base_usd × a / 100 × rate`           | `a × rate`      | `a`       |
//! | extra tax   | USD: `base × a / 100 × rate`, BRL: `base × a / 100` | `a × rate` | `a` |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use gringa_core::calculations::conversion::{extra_tax_to_brl, fee_or_tax_to_brl};
//! use gringa_core::{AmountKind, Currency};
//!
//! let rate = Some(dec!(5));
//!
//! assert_eq!(fee_or_tax_to_brl("10", AmountKind::Percent, Currency::Usd, dec!(100), rate), dec!(50));
//! assert_eq!(extra_tax_to_brl("13", AmountKind::Percent, Currency::Brl, dec!(4998), rate), dec!(649.74));
//! assert_eq!(extra_tax_to_brl("13", AmountKind::Percent, Currency::Usd, dec!(4998), rate), dec!(3248.70));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::{parse_amount, percent_of, usable_rate};
use crate::models::{AmountKind, Currency};

/// Converts a fee or tax entry into BRL.
///
/// A percentage is always taken of the USD gross `base_usd` and then
/// converted, whatever currency the entry itself names.
pub fn fee_or_tax_to_brl(
    amount: &str,
    kind: AmountKind,
    currency: Currency,
    base_usd: Decimal,
    rate: Option<Decimal>,
) -> Decimal {
    let Some(rate) = usable_rate(rate) else {
        return Decimal::ZERO;
    };
    let value = parse_amount(amount);

    match kind {
        AmountKind::Percent => percent_of(base_usd, value).saturating_mul(rate),
        AmountKind::Fixed => fixed_to_brl(value, currency, rate),
    }
}

/// Converts the extra income into BRL.
pub fn extra_income_to_brl(
    amount: &str,
    currency: Currency,
    rate: Option<Decimal>,
) -> Decimal {
    let Some(rate) = usable_rate(rate) else {
        return Decimal::ZERO;
    };

    fixed_to_brl(parse_amount(amount), currency, rate)
}

/// Converts the extra tax into BRL.
///
/// For a percentage the basis is the raw extra-income amount read in the
/// extra tax's own currency: in USD it is converted with `rate`, in BRL it
/// is used as is. The two are not interchangeable even when the nominal
/// numbers match.
pub fn extra_tax_to_brl(
    amount: &str,
    kind: AmountKind,
    currency: Currency,
    extra_income_base: Decimal,
    rate: Option<Decimal>,
) -> Decimal {
    let Some(rate) = usable_rate(rate) else {
        return Decimal::ZERO;
    };
    let value = parse_amount(amount);

    match (kind, currency) {
        (AmountKind::Percent, Currency::Usd) => {
            percent_of(extra_income_base, value).saturating_mul(rate)
        }
        (AmountKind::Percent, Currency::Brl) => percent_of(extra_income_base, value),
        (AmountKind::Fixed, _) => fixed_to_brl(value, currency, rate),
    }
}

fn fixed_to_brl(
    value: Decimal,
    currency: Currency,
    rate: Decimal,
) -> Decimal {
    match currency {
        Currency::Usd => value.saturating_mul(rate),
        Currency::Brl => value,
    }
}
