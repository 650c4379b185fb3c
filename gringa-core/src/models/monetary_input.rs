use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AmountKind, Currency};
use crate::calculations::common::parse_amount;

/// One user-editable quantity: a fee, a tax, or the extra tax.
///
/// The amount is kept as the raw text the user typed and parsed on every
/// read, so a half-typed value never needs to be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonetaryInput {
    pub amount: String,
    pub kind: AmountKind,
    pub currency: Currency,
}

impl MonetaryInput {
    /// An empty entry of the given kind, denominated in USD.
    pub fn empty(kind: AmountKind) -> Self {
        Self {
            amount: String::new(),
            kind,
            currency: Currency::Usd,
        }
    }

    pub fn new(
        amount: impl Into<String>,
        kind: AmountKind,
        currency: Currency,
    ) -> Self {
        Self {
            amount: amount.into(),
            kind,
            currency,
        }
    }

    /// The parsed amount, zero when the text holds no number.
    pub fn value(&self) -> Decimal {
        parse_amount(&self.amount)
    }

    /// Short label as shown next to the result: `"10%"`, `"50 USD"`.
    pub fn label(&self) -> String {
        let value = self.value().normalize();
        match self.kind {
            AmountKind::Percent => format!("{value}%"),
            AmountKind::Fixed => format!("{value} {}", self.currency.as_str()),
        }
    }
}

/// Extra income has a currency but is never a percentage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraIncomeInput {
    pub amount: String,
    pub currency: Currency,
}

impl ExtraIncomeInput {
    pub fn new(
        amount: impl Into<String>,
        currency: Currency,
    ) -> Self {
        Self {
            amount: amount.into(),
            currency,
        }
    }

    pub fn value(&self) -> Decimal {
        parse_amount(&self.amount)
    }
}
