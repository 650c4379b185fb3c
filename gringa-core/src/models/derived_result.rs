use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Every figure the result panel shows, all in BRL.
///
/// Computed on each read and never stored. The totals are derived from the
/// five components so the invariants hold by construction:
///
/// * `net_brl = gross_brl - fees_brl - taxes_brl + extra_income_brl - extra_tax_brl`
/// * `total_gross_brl = gross_brl + extra_income_brl`
/// * `total_discount_brl = fees_brl + taxes_brl + extra_tax_brl`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedResult {
    pub gross_brl: Decimal,
    pub fees_brl: Decimal,
    pub taxes_brl: Decimal,
    pub extra_income_brl: Decimal,
    pub extra_tax_brl: Decimal,
    pub total_gross_brl: Decimal,
    pub total_discount_brl: Decimal,
    pub net_brl: Decimal,
}

impl DerivedResult {
    /// Builds a result from its five components.
    pub fn from_components(
        gross_brl: Decimal,
        fees_brl: Decimal,
        taxes_brl: Decimal,
        extra_income_brl: Decimal,
        extra_tax_brl: Decimal,
    ) -> Self {
        let net_brl = gross_brl
            .saturating_sub(fees_brl)
            .saturating_sub(taxes_brl)
            .saturating_add(extra_income_brl)
            .saturating_sub(extra_tax_brl);

        Self {
            gross_brl,
            fees_brl,
            taxes_brl,
            extra_income_brl,
            extra_tax_brl,
            total_gross_brl: gross_brl.saturating_add(extra_income_brl),
            total_discount_brl: fees_brl.saturating_add(taxes_brl).saturating_add(extra_tax_brl),
            net_brl,
        }
    }

    /// The all-zero result used while no exchange rate is available.
    pub fn zero() -> Self {
        Self::from_components(
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn from_components_derives_totals_and_net() {
        let result = DerivedResult::from_components(
            dec!(500),
            dec!(50),
            dec!(25),
            dec!(100),
            dec!(10),
        );

        assert_eq!(result.total_gross_brl, dec!(600));
        assert_eq!(result.total_discount_brl, dec!(85));
        assert_eq!(result.net_brl, dec!(515));
    }

    #[test]
    fn zero_has_every_field_zero() {
        let result = DerivedResult::zero();

        for field in [
            result.gross_brl,
            result.fees_brl,
            result.taxes_brl,
            result.extra_income_brl,
            result.extra_tax_brl,
            result.total_gross_brl,
            result.total_discount_brl,
            result.net_brl,
        ] {
            assert_eq!(field, Decimal::ZERO);
        }
    }
}
