//! Net income calculation for the "working abroad" scenario.
//!
//! Combines the five entries of a [`CalculatorState`] into a single
//! [`DerivedResult`] in BRL.
//!
//! # Worksheet Structure
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Gross (USD) × rate |
//! | 2    | Fees, percent of line-1 USD base or fixed |
//! | 3    | Taxes, same rule as fees |
//! | 4    | Extra income, converted when in USD |
//! | 5    | Extra tax, percent of the raw extra income or fixed |
//! | 6    | Total gross (Line 1 + Line 4) |
//! | 7    | Total discount (Line 2 + Line 3 + Line 5) |
//! | 8    | Net (Line 1 - Line 2 - Line 3 + Line 4 - Line 5) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use gringa_core::calculations::calculate_net_brl;
//! use gringa_core::{AmountKind, CalculatorState, Currency};
//!
//! let mut state = CalculatorState::new();
//! state.set_gross_amount("100");
//! state.set_fees_amount("10");
//! state.set_fees_kind(AmountKind::Percent);
//!
//! let result = calculate_net_brl(&state, Some(dec!(5)));
//!
//! assert_eq!(result.gross_brl, dec!(500));
//! assert_eq!(result.fees_brl, dec!(50));
//! assert_eq!(result.net_brl, dec!(450));
//! ```

use rust_decimal::Decimal;
use tracing::trace;

use crate::calculations::common::{parse_amount, usable_rate};
use crate::calculations::conversion::{extra_income_to_brl, extra_tax_to_brl, fee_or_tax_to_brl};
use crate::models::{DerivedResult, MonetaryInput};
use crate::state::CalculatorState;

/// Calculator for the net income worksheet at a fixed exchange rate.
///
/// Holds only the rate; the state is passed to [`NetIncomeWorksheet::calculate`]
/// so one worksheet can be reused while the user edits.
#[derive(Debug, Clone, Copy)]
pub struct NetIncomeWorksheet {
    rate: Option<Decimal>,
}

impl NetIncomeWorksheet {
    /// Creates a worksheet for the given rate. A missing, zero or negative
    /// rate makes every figure zero.
    pub fn new(rate: Option<Decimal>) -> Self {
        Self {
            rate: usable_rate(rate),
        }
    }

    /// Calculates every line of the worksheet.
    ///
    /// Never fails: out-of-range inputs are computed as given.
    pub fn calculate(
        &self,
        state: &CalculatorState,
    ) -> DerivedResult {
        let Some(rate) = self.rate else {
            trace!("no exchange rate, returning zero result");
            return DerivedResult::zero();
        };

        let gross_usd = parse_amount(&state.gross_amount_usd);
        let gross_brl = self.gross_brl(gross_usd, rate);
        let fees_brl = self.deduction_brl(&state.fees, gross_usd);
        let taxes_brl = self.deduction_brl(&state.taxes, gross_usd);
        let extra_income_brl = extra_income_to_brl(
            &state.extra_income.amount,
            state.extra_income.currency,
            self.rate,
        );
        let extra_tax_brl = self.extra_tax_brl(state);

        let result = DerivedResult::from_components(
            gross_brl,
            fees_brl,
            taxes_brl,
            extra_income_brl,
            extra_tax_brl,
        );

        trace!(%rate, %gross_usd, net_brl = %result.net_brl, "net income calculated");
        result
    }

    /// Converts the USD gross into BRL.
    fn gross_brl(
        &self,
        gross_usd: Decimal,
        rate: Decimal,
    ) -> Decimal {
        gross_usd.saturating_mul(rate)
    }

    /// Converts a fee or tax entry, using the USD gross as percent basis.
    fn deduction_brl(
        &self,
        entry: &MonetaryInput,
        gross_usd: Decimal,
    ) -> Decimal {
        fee_or_tax_to_brl(&entry.amount, entry.kind, entry.currency, gross_usd, self.rate)
    }

    /// Converts the extra tax; the basis is the raw extra-income amount, not
    /// its BRL conversion.
    fn extra_tax_brl(
        &self,
        state: &CalculatorState,
    ) -> Decimal {
        extra_tax_to_brl(
            &state.extra_tax.amount,
            state.extra_tax.kind,
            state.extra_tax.currency,
            state.extra_income.value(),
            self.rate,
        )
    }
}

/// Computes the [`DerivedResult`] for `state` at `rate`.
///
/// Shorthand for `NetIncomeWorksheet::new(rate).calculate(state)`.
pub fn calculate_net_brl(
    state: &CalculatorState,
    rate: Option<Decimal>,
) -> DerivedResult {
    NetIncomeWorksheet::new(rate).calculate(state)
}
