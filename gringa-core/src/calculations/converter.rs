//! Bidirectional USD/BRL amount converter.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::InputError;
use crate::calculations::common::{divide_by_rate, try_parse_amount, usable_rate};
use crate::format::format_decimal_br;
use crate::models::Currency;

/// Which way the converter is currently pointing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionDirection {
    #[default]
    UsdToBrl,
    BrlToUsd,
}

impl ConversionDirection {
    pub fn inverted(self) -> Self {
        match self {
            Self::UsdToBrl => Self::BrlToUsd,
            Self::BrlToUsd => Self::UsdToBrl,
        }
    }
}

/// State of the quick converter: the typed text and the direction.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use gringa_core::calculations::CurrencyConverter;
///
/// let mut converter = CurrencyConverter::new();
/// converter.set_input_amount("1000");
/// assert_eq!(converter.converted_amount(Some(dec!(5.25))), "5.250,00");
///
/// converter.invert();
/// assert_eq!(converter.input_amount(), "");
/// assert_eq!(converter.converted_amount(Some(dec!(5.25))), "0,00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyConverter {
    input_amount: String,
    direction: ConversionDirection,
}

impl CurrencyConverter {
    /// Empty input, converting USD to BRL.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_amount(&self) -> &str {
        &self.input_amount
    }

    pub fn direction(&self) -> ConversionDirection {
        self.direction
    }

    pub fn set_input_amount(
        &mut self,
        value: impl Into<String>,
    ) {
        self.input_amount = value.into();
    }

    /// Flips the direction and clears the input.
    ///
    /// The typed number is not carried over to the other side.
    pub fn invert(&mut self) {
        self.direction = self.direction.inverted();
        self.input_amount.clear();
        debug!(direction = ?self.direction, "converter inverted");
    }

    /// Currency the typed amount is in.
    pub fn source_currency(&self) -> Currency {
        match self.direction {
            ConversionDirection::UsdToBrl => Currency::Usd,
            ConversionDirection::BrlToUsd => Currency::Brl,
        }
    }

    /// Currency of the converted figure.
    pub fn target_currency(&self) -> Currency {
        match self.direction {
            ConversionDirection::UsdToBrl => Currency::Brl,
            ConversionDirection::BrlToUsd => Currency::Usd,
        }
    }

    /// Reports non-empty text that holds no number.
    pub fn input_error(&self) -> Option<InputError> {
        let text = self.input_amount.trim();
        if text.is_empty() || try_parse_amount(text).is_some() {
            None
        } else {
            Some(InputError::NotANumber)
        }
    }

    /// The converted amount, zero when there is nothing to convert.
    pub fn converted_value(
        &self,
        rate: Option<Decimal>,
    ) -> Decimal {
        let (Some(rate), Some(amount)) = (usable_rate(rate), try_parse_amount(&self.input_amount))
        else {
            return Decimal::ZERO;
        };

        match self.direction {
            ConversionDirection::UsdToBrl => amount.saturating_mul(rate),
            ConversionDirection::BrlToUsd => divide_by_rate(amount, rate),
        }
    }

    /// The converted amount formatted as `"1.234,56"`.
    pub fn converted_amount(
        &self,
        rate: Option<Decimal>,
    ) -> String {
        format_decimal_br(self.converted_value(rate))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn rate() -> Option<Decimal> {
        Some(dec!(5))
    }

    fn converter_with(text: &str) -> CurrencyConverter {
        let mut converter = CurrencyConverter::new();
        converter.set_input_amount(text);
        converter
    }

    #[test]
    fn new_converter_points_usd_to_brl() {
        let converter = CurrencyConverter::new();

        assert_eq!(converter.direction(), ConversionDirection::UsdToBrl);
        assert_eq!(converter.source_currency(), Currency::Usd);
        assert_eq!(converter.target_currency(), Currency::Brl);
    }

    #[test]
    fn converts_usd_to_brl() {
        let converter = converter_with("100");

        assert_eq!(converter.converted_value(rate()), dec!(500));
        assert_eq!(converter.converted_amount(rate()), "500,00");
    }

    #[test]
    fn converts_brl_to_usd() {
        let mut converter = CurrencyConverter::new();
        converter.invert();
        converter.set_input_amount("100");

        assert_eq!(converter.converted_value(rate()), dec!(20));
        assert_eq!(converter.converted_amount(rate()), "20,00");
    }

    #[test]
    fn formats_thousands_and_rounds_to_two_digits() {
        let converter = converter_with("1234.567");

        assert_eq!(converter.converted_amount(Some(dec!(1))), "1.234,57");
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(CurrencyConverter::new().converted_amount(rate()), "0,00");
    }

    #[test]
    fn unparsable_input_is_zero_and_flagged() {
        let converter = converter_with("abc");

        assert_eq!(converter.converted_amount(rate()), "0,00");
        assert_eq!(converter.input_error(), Some(InputError::NotANumber));
    }

    #[test]
    fn empty_input_is_not_an_error() {
        assert_eq!(converter_with("  ").input_error(), None);
    }

    #[test]
    fn missing_rate_is_zero() {
        let converter = converter_with("100");

        assert_eq!(converter.converted_amount(None), "0,00");
        assert_eq!(converter.converted_amount(Some(Decimal::ZERO)), "0,00");
    }

    #[test]
    fn invert_clears_input_and_flips_direction() {
        let mut converter = converter_with("250");

        converter.invert();

        assert_eq!(converter.input_amount(), "");
        assert_eq!(converter.direction(), ConversionDirection::BrlToUsd);
        assert_eq!(converter.source_currency(), Currency::Brl);
    }

    #[test]
    fn invert_twice_returns_to_usd_to_brl_with_empty_input() {
        let mut converter = converter_with("10");

        converter.invert();
        converter.set_input_amount("20");
        converter.invert();

        assert_eq!(converter.direction(), ConversionDirection::UsdToBrl);
        assert_eq!(converter.input_amount(), "");
    }
}
