use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::CalculatorError;
use crate::calculations::common::usable_rate;

/// Latest value published by the exchange-rate provider (BRL per 1 USD).
///
/// The provider itself lives outside this crate. A failed refresh keeps the
/// previous rate around, which then counts as stale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub rate: Option<Decimal>,
    pub last_update: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl ExchangeRate {
    /// Nothing loaded yet.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// A successful fetch observed at `at`.
    pub fn loaded(
        rate: Decimal,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            rate: Some(rate),
            last_update: Some(at),
            error: None,
        }
    }

    /// Records a failed refresh; any previously loaded rate is kept.
    pub fn record_failure(
        &mut self,
        message: impl Into<String>,
    ) {
        let message = message.into();
        warn!(error = %message, has_previous = self.rate.is_some(), "exchange rate refresh failed");
        self.error = Some(message);
    }

    /// True when the last refresh failed but an older rate is still held.
    pub fn is_stale(&self) -> bool {
        self.error.is_some() && self.rate.is_some()
    }

    /// The rate, if it can be used for conversions.
    pub fn value(&self) -> Option<Decimal> {
        usable_rate(self.rate)
    }

    /// Like [`ExchangeRate::value`], but reports the absence as an error.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::MissingRate`] when no positive rate is held.
    pub fn require(&self) -> Result<Decimal, CalculatorError> {
        self.value().ok_or(CalculatorError::MissingRate)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn unavailable_has_no_value() {
        let rate = ExchangeRate::unavailable();

        assert_eq!(rate.value(), None);
        assert!(!rate.is_stale());
        assert_eq!(rate.require(), Err(CalculatorError::MissingRate));
    }

    #[test]
    fn loaded_exposes_rate_and_timestamp() {
        let rate = ExchangeRate::loaded(dec!(5.43), noon());

        assert_eq!(rate.value(), Some(dec!(5.43)));
        assert_eq!(rate.last_update, Some(noon()));
        assert_eq!(rate.require(), Ok(dec!(5.43)));
    }

    #[test]
    fn failure_after_success_keeps_stale_rate() {
        let mut rate = ExchangeRate::loaded(dec!(5.43), noon());

        rate.record_failure("timeout");

        assert!(rate.is_stale());
        assert_eq!(rate.value(), Some(dec!(5.43)));
        assert_eq!(rate.error.as_deref(), Some("timeout"));
    }

    #[test]
    fn failure_before_any_success_is_not_stale() {
        let mut rate = ExchangeRate::unavailable();

        rate.record_failure("offline");

        assert!(!rate.is_stale());
        assert_eq!(rate.value(), None);
    }

    #[test]
    fn zero_rate_is_treated_as_missing() {
        let rate = ExchangeRate::loaded(Decimal::ZERO, noon());

        assert_eq!(rate.value(), None);
    }
}
