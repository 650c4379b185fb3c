//! Editable state of the income calculator.
//!
//! Holds the text and selectors for every entry. Writes are plain setters;
//! the only derived behaviour at write time is the extra-tax currency sync
//! (see [`synced_extra_tax_currency`]). Reads recompute everything from
//! scratch through [`CalculatorState::derive`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::calculate_net_brl;
use crate::models::{AmountKind, Currency, DerivedResult, ExtraIncomeInput, MonetaryInput};

/// Every user-entered value of one calculation.
///
/// Lives as long as the view that edits it and is never persisted. It can be
/// deserialized from a partial document (missing fields take their reset
/// values), which the CLI uses for scenario files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StateDocument")]
pub struct CalculatorState {
    pub gross_amount_usd: String,
    pub fees: MonetaryInput,
    pub taxes: MonetaryInput,
    pub extra_income: ExtraIncomeInput,
    pub extra_tax: MonetaryInput,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            gross_amount_usd: String::new(),
            fees: MonetaryInput::empty(AmountKind::Percent),
            taxes: MonetaryInput::empty(AmountKind::Percent),
            extra_income: ExtraIncomeInput::default(),
            extra_tax: MonetaryInput::empty(AmountKind::Fixed),
        }
    }
}

/// Currency the extra tax should have after a sync-triggering change.
///
/// A fixed extra tax follows the extra-income currency; a percentage keeps
/// whatever currency it already has.
///
/// # Examples
///
/// ```
/// use gringa_core::state::synced_extra_tax_currency;
/// use gringa_core::{AmountKind, Currency};
///
/// assert_eq!(
///     synced_extra_tax_currency(AmountKind::Fixed, Currency::Usd, Currency::Brl),
///     Currency::Brl
/// );
/// assert_eq!(
///     synced_extra_tax_currency(AmountKind::Percent, Currency::Usd, Currency::Brl),
///     Currency::Usd
/// );
/// ```
pub fn synced_extra_tax_currency(
    extra_tax_kind: AmountKind,
    extra_tax_currency: Currency,
    extra_income_currency: Currency,
) -> Currency {
    match extra_tax_kind {
        AmountKind::Fixed => extra_income_currency,
        AmountKind::Percent => extra_tax_currency,
    }
}

impl CalculatorState {
    /// A state with every field at its reset value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores every field: empty amounts, percent fees and taxes, fixed
    /// extra tax, USD everywhere.
    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("calculator reset");
    }

    pub fn set_gross_amount(
        &mut self,
        value: impl Into<String>,
    ) {
        self.gross_amount_usd = value.into();
    }

    pub fn set_fees_amount(
        &mut self,
        value: impl Into<String>,
    ) {
        self.fees.amount = value.into();
    }

    pub fn set_fees_kind(
        &mut self,
        kind: AmountKind,
    ) {
        self.fees.kind = kind;
    }

    pub fn set_fees_currency(
        &mut self,
        currency: Currency,
    ) {
        self.fees.currency = currency;
    }

    pub fn set_taxes_amount(
        &mut self,
        value: impl Into<String>,
    ) {
        self.taxes.amount = value.into();
    }

    pub fn set_taxes_kind(
        &mut self,
        kind: AmountKind,
    ) {
        self.taxes.kind = kind;
    }

    pub fn set_taxes_currency(
        &mut self,
        currency: Currency,
    ) {
        self.taxes.currency = currency;
    }

    pub fn set_extra_income_amount(
        &mut self,
        value: impl Into<String>,
    ) {
        self.extra_income.amount = value.into();
    }

    /// Changes the extra-income currency; a fixed extra tax follows it.
    pub fn set_extra_income_currency(
        &mut self,
        currency: Currency,
    ) {
        self.extra_income.currency = currency;
        self.sync_extra_tax_currency();
    }

    pub fn set_extra_tax_amount(
        &mut self,
        value: impl Into<String>,
    ) {
        self.extra_tax.amount = value.into();
    }

    /// Changes the extra-tax kind. Switching to fixed picks up the current
    /// extra-income currency.
    pub fn set_extra_tax_kind(
        &mut self,
        kind: AmountKind,
    ) {
        self.extra_tax.kind = kind;
        self.sync_extra_tax_currency();
    }

    pub fn set_extra_tax_currency(
        &mut self,
        currency: Currency,
    ) {
        self.extra_tax.currency = currency;
    }

    fn sync_extra_tax_currency(&mut self) {
        let synced = synced_extra_tax_currency(
            self.extra_tax.kind,
            self.extra_tax.currency,
            self.extra_income.currency,
        );
        if synced != self.extra_tax.currency {
            debug!(
                from = self.extra_tax.currency.as_str(),
                to = synced.as_str(),
                "extra tax currency synced to extra income"
            );
            self.extra_tax.currency = synced;
        }
    }

    /// Whether a non-zero extra income has been typed; the extra-tax entry
    /// only matters (and is only shown) once it has.
    pub fn has_extra_income(&self) -> bool {
        !self.extra_income.value().is_zero()
    }

    /// Recomputes every displayed figure for the current rate.
    pub fn derive(
        &self,
        rate: Option<Decimal>,
    ) -> DerivedResult {
        calculate_net_brl(self, rate)
    }
}

// ---------------------------------------------------------------------------
// Partial document accepted by Deserialize
// ---------------------------------------------------------------------------

/// Amounts may be written as text or as bare numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AmountField {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl AmountField {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Integer(n) => n.to_string(),
            Self::Float(x) => x.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EntryDocument {
    amount: Option<AmountField>,
    kind: Option<AmountKind>,
    currency: Option<Currency>,
}

impl EntryDocument {
    fn into_input(
        self,
        default_kind: AmountKind,
    ) -> MonetaryInput {
        MonetaryInput {
            amount: self.amount.map(AmountField::into_text).unwrap_or_default(),
            kind: self.kind.unwrap_or(default_kind),
            currency: self.currency.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StateDocument {
    gross_amount_usd: Option<AmountField>,
    fees: EntryDocument,
    taxes: EntryDocument,
    extra_income: EntryDocument,
    extra_tax: EntryDocument,
}

impl From<StateDocument> for CalculatorState {
    fn from(doc: StateDocument) -> Self {
        let extra_income = doc.extra_income.into_input(AmountKind::Fixed);

        Self {
            gross_amount_usd: doc
                .gross_amount_usd
                .map(AmountField::into_text)
                .unwrap_or_default(),
            fees: doc.fees.into_input(AmountKind::Percent),
            taxes: doc.taxes.into_input(AmountKind::Percent),
            extra_income: ExtraIncomeInput::new(extra_income.amount, extra_income.currency),
            extra_tax: doc.extra_tax.into_input(AmountKind::Fixed),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // reset / defaults
    // =========================================================================

    #[test]
    fn new_state_has_reset_values() {
        let state = CalculatorState::new();

        assert_eq!(state.gross_amount_usd, "");
        assert_eq!(state.fees, MonetaryInput::empty(AmountKind::Percent));
        assert_eq!(state.taxes, MonetaryInput::empty(AmountKind::Percent));
        assert_eq!(state.extra_income, ExtraIncomeInput::default());
        assert_eq!(state.extra_tax, MonetaryInput::empty(AmountKind::Fixed));
    }

    #[test]
    fn reset_restores_every_field() {
        let mut state = CalculatorState::new();
        state.set_gross_amount("100");
        state.set_fees_amount("5");
        state.set_fees_kind(AmountKind::Fixed);
        state.set_fees_currency(Currency::Brl);
        state.set_taxes_amount("7");
        state.set_extra_income_amount("30");
        state.set_extra_income_currency(Currency::Brl);
        state.set_extra_tax_kind(AmountKind::Percent);

        state.reset();

        assert_eq!(state, CalculatorState::new());
    }

    // =========================================================================
    // setters
    // =========================================================================

    #[test]
    fn setters_store_raw_text() {
        let mut state = CalculatorState::new();

        state.set_gross_amount(" 12abc");
        state.set_taxes_amount("3");
        state.set_taxes_kind(AmountKind::Fixed);
        state.set_taxes_currency(Currency::Brl);

        assert_eq!(state.gross_amount_usd, " 12abc");
        assert_eq!(
            state.taxes,
            MonetaryInput::new("3", AmountKind::Fixed, Currency::Brl)
        );
    }

    // =========================================================================
    // extra tax currency sync
    // =========================================================================

    #[test]
    fn extra_income_currency_change_moves_fixed_extra_tax() {
        let mut state = CalculatorState::new();

        state.set_extra_income_currency(Currency::Brl);

        assert_eq!(state.extra_tax.currency, Currency::Brl);
    }

    #[test]
    fn extra_income_currency_change_leaves_percent_extra_tax() {
        let mut state = CalculatorState::new();
        state.set_extra_tax_kind(AmountKind::Percent);

        state.set_extra_income_currency(Currency::Brl);

        assert_eq!(state.extra_tax.currency, Currency::Usd);
    }

    #[test]
    fn switching_to_percent_does_not_sync_retroactively() {
        let mut state = CalculatorState::new();
        state.set_extra_tax_kind(AmountKind::Percent);
        state.set_extra_income_currency(Currency::Brl);
        state.set_extra_tax_currency(Currency::Usd);

        state.set_extra_tax_kind(AmountKind::Percent);

        assert_eq!(state.extra_tax.currency, Currency::Usd);
    }

    #[test]
    fn switching_to_fixed_resyncs_to_current_income_currency() {
        let mut state = CalculatorState::new();
        state.set_extra_tax_kind(AmountKind::Percent);
        state.set_extra_income_currency(Currency::Brl);
        assert_eq!(state.extra_tax.currency, Currency::Usd);

        state.set_extra_tax_kind(AmountKind::Fixed);

        assert_eq!(state.extra_tax.currency, Currency::Brl);
    }

    #[test]
    fn explicit_extra_tax_currency_is_kept_until_next_trigger() {
        let mut state = CalculatorState::new();
        state.set_extra_income_currency(Currency::Brl);

        state.set_extra_tax_currency(Currency::Usd);
        state.set_extra_tax_amount("10");

        assert_eq!(state.extra_tax.currency, Currency::Usd);

        state.set_extra_income_currency(Currency::Brl);

        assert_eq!(state.extra_tax.currency, Currency::Brl);
    }

    // =========================================================================
    // has_extra_income
    // =========================================================================

    #[test]
    fn has_extra_income_requires_non_zero_amount() {
        let mut state = CalculatorState::new();
        assert!(!state.has_extra_income());

        state.set_extra_income_amount("0");
        assert!(!state.has_extra_income());

        state.set_extra_income_amount("100");
        assert!(state.has_extra_income());
    }

    // =========================================================================
    // derive
    // =========================================================================

    #[test]
    fn derive_recomputes_after_each_change() {
        let mut state = CalculatorState::new();
        state.set_gross_amount("100");
        let rate = Some(dec!(5));

        assert_eq!(state.derive(rate).net_brl, dec!(500));

        state.set_fees_amount("10");

        assert_eq!(state.derive(rate).net_brl, dec!(450));
        assert_eq!(state.derive(Some(dec!(6))).net_brl, dec!(540));
    }

    // =========================================================================
    // deserialization
    // =========================================================================

    #[test]
    fn deserializes_partial_document_with_defaults() {
        let doc = r#"
            gross_amount_usd = 5000

            [fees]
            amount = "3.5"

            [extra_income]
            amount = 250.5
            currency = "BRL"

            [extra_tax]
            amount = "10"
        "#;

        let state: CalculatorState = toml::from_str(doc).unwrap();

        assert_eq!(state.gross_amount_usd, "5000");
        assert_eq!(state.fees, MonetaryInput::new("3.5", AmountKind::Percent, Currency::Usd));
        assert_eq!(state.taxes, MonetaryInput::empty(AmountKind::Percent));
        assert_eq!(state.extra_income, ExtraIncomeInput::new("250.5", Currency::Brl));
        assert_eq!(state.extra_tax, MonetaryInput::new("10", AmountKind::Fixed, Currency::Usd));
    }

    #[test]
    fn empty_document_is_default_state() {
        let state: CalculatorState = toml::from_str("").unwrap();

        assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn serialized_state_reads_back() {
        let mut state = CalculatorState::new();
        state.set_gross_amount("100");
        state.set_taxes_kind(AmountKind::Fixed);
        state.set_extra_income_currency(Currency::Brl);

        let text = toml::to_string(&state).unwrap();
        let back: CalculatorState = toml::from_str(&text).unwrap();

        assert_eq!(back, state);
    }
}
