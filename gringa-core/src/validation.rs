//! Input checks for the widgets that feed the calculator.
//!
//! The calculation functions accept any number. Range policing happens here,
//! before a value is stored: the stored text is clamped and the problem is
//! reported separately so the UI can show it next to the field.

use rust_decimal::Decimal;
use tracing::debug;

use crate::InputError;
use crate::calculations::common::{is_complete_amount, try_parse_amount};
use crate::models::AmountKind;

const PERCENT_LIMIT: Decimal = Decimal::ONE_HUNDRED;

/// The text to store plus the problem to display, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedAmount {
    pub value: String,
    pub error: Option<InputError>,
}

impl SanitizedAmount {
    fn accepted(value: &str) -> Self {
        Self {
            value: value.to_string(),
            error: None,
        }
    }

    fn clamped(
        value: Decimal,
        error: InputError,
    ) -> Self {
        Self {
            value: value.to_string(),
            error: Some(error),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Checks one field's text.
///
/// `kind` is the entry's current kind; pass `None` for fields that are never
/// percentages (gross amount, extra income, converter input). Text with
/// anything after the number, like a decimal comma, is kept as typed but
/// reported as [`InputError::NotANumber`].
///
/// # Examples
///
/// ```
/// use gringa_core::validation::sanitize_amount;
/// use gringa_core::{AmountKind, InputError};
///
/// let negative = sanitize_amount("-100", None);
/// assert_eq!(negative.value, "0");
/// assert_eq!(negative.error, Some(InputError::Negative));
///
/// let too_high = sanitize_amount("150", Some(AmountKind::Percent));
/// assert_eq!(too_high.value, "100");
/// assert_eq!(too_high.error, Some(InputError::PercentAboveLimit));
///
/// assert!(sanitize_amount("150", Some(AmountKind::Fixed)).is_valid());
/// ```
pub fn sanitize_amount(
    text: &str,
    kind: Option<AmountKind>,
) -> SanitizedAmount {
    if text.trim().is_empty() {
        return SanitizedAmount::accepted(text);
    }

    let Some(value) = try_parse_amount(text) else {
        debug!(input = %text, "rejected non-numeric amount");
        return SanitizedAmount {
            value: text.to_string(),
            error: Some(InputError::NotANumber),
        };
    };

    if value < Decimal::ZERO {
        debug!(input = %text, "clamped negative amount to zero");
        return SanitizedAmount::clamped(Decimal::ZERO, InputError::Negative);
    }

    if kind == Some(AmountKind::Percent) && value > PERCENT_LIMIT {
        debug!(input = %text, "clamped percentage to limit");
        return SanitizedAmount::clamped(PERCENT_LIMIT, InputError::PercentAboveLimit);
    }

    // "1,5" would silently be read as 1.
    if !is_complete_amount(text) {
        debug!(input = %text, read_as = %value, "amount has trailing text");
        return SanitizedAmount {
            value: text.to_string(),
            error: Some(InputError::NotANumber),
        };
    }

    SanitizedAmount::accepted(text)
}
