//! Compact command-line syntax for one calculator entry.
//!
//! | Text       | Kind    | Currency          |
//! |------------|---------|-------------------|
//! | `10%`      | percent | unchanged         |
//! | `50USD`    | fixed   | USD               |
//! | `100 brl`  | fixed   | BRL               |
//! | `25`       | fixed   | unchanged         |
//!
//! The amount text is kept as typed; range checks happen later.

use std::sync::LazyLock;

use gringa_core::{AmountKind, Currency};
use regex::Regex;
use thiserror::Error;

static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<amount>[-+]?[0-9.,]+(?:[eE][-+]?[0-9]+)?)\s*(?:(?P<percent>%)|(?P<code>[A-Za-z]+))?\s*$",
    )
    .expect("entry pattern is valid")
});

/// Errors for malformed entry flags.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryParseError {
    #[error("expected an amount followed by '%' or a currency code, got '{0}'")]
    Malformed(String),

    #[error("unknown currency '{0}', expected USD or BRL")]
    UnknownCurrency(String),

    #[error("'{0}' cannot be a percentage")]
    PercentNotAllowed(String),
}

/// One parsed entry flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub amount: String,
    pub kind: AmountKind,
    /// `None` keeps whatever currency the field already has.
    pub currency: Option<Currency>,
}

/// Parses `10%`, `50USD`, `100 BRL` or a bare amount.
pub fn parse_entry(text: &str) -> Result<Entry, EntryParseError> {
    let caps = ENTRY
        .captures(text)
        .ok_or_else(|| EntryParseError::Malformed(text.to_string()))?;

    let amount = caps["amount"].to_string();

    if caps.name("percent").is_some() {
        return Ok(Entry {
            amount,
            kind: AmountKind::Percent,
            currency: None,
        });
    }

    let currency = caps
        .name("code")
        .map(|code| {
            Currency::parse(code.as_str())
                .ok_or_else(|| EntryParseError::UnknownCurrency(code.as_str().to_string()))
        })
        .transpose()?;

    Ok(Entry {
        amount,
        kind: AmountKind::Fixed,
        currency,
    })
}

/// Like [`parse_entry`], for fields that are never percentages.
pub fn parse_fixed_entry(text: &str) -> Result<Entry, EntryParseError> {
    let entry = parse_entry(text)?;
    if entry.kind == AmountKind::Percent {
        return Err(EntryParseError::PercentNotAllowed(text.to_string()));
    }
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_percentage() {
        assert_eq!(
            parse_entry("10%"),
            Ok(Entry {
                amount: "10".to_string(),
                kind: AmountKind::Percent,
                currency: None,
            })
        );
    }

    #[test]
    fn parses_fixed_amount_with_code() {
        let entry = parse_entry("50USD").unwrap();

        assert_eq!(entry.amount, "50");
        assert_eq!(entry.kind, AmountKind::Fixed);
        assert_eq!(entry.currency, Some(Currency::Usd));
    }

    #[test]
    fn code_is_case_insensitive_and_may_be_spaced() {
        let entry = parse_entry(" 100.5 brl ").unwrap();

        assert_eq!(entry.amount, "100.5");
        assert_eq!(entry.currency, Some(Currency::Brl));
    }

    #[test]
    fn bare_amount_is_fixed_without_currency() {
        let entry = parse_entry("25").unwrap();

        assert_eq!(entry.kind, AmountKind::Fixed);
        assert_eq!(entry.currency, None);
    }

    #[test]
    fn negative_amount_is_kept_for_validation() {
        assert_eq!(parse_entry("-10%").unwrap().amount, "-10");
    }

    #[test]
    fn rejects_unknown_currency() {
        assert_eq!(
            parse_entry("10 EUR"),
            Err(EntryParseError::UnknownCurrency("EUR".to_string()))
        );
    }

    #[test]
    fn rejects_text_without_amount() {
        assert_eq!(
            parse_entry("USD"),
            Err(EntryParseError::Malformed("USD".to_string()))
        );
    }

    #[test]
    fn fixed_entry_rejects_percentage() {
        assert_eq!(
            parse_fixed_entry("5%"),
            Err(EntryParseError::PercentNotAllowed("5%".to_string()))
        );
        assert!(parse_fixed_entry("5 BRL").is_ok());
    }
}
