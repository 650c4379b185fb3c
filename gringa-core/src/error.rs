//! Error types shared across the calculator.
//!
//! Neither error is fatal: calculations degrade to zero when the rate is
//! missing, and invalid input is reported alongside a clamped value.

use thiserror::Error;

/// Problems with a single piece of user-entered text.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InputError {
    /// Non-empty text that holds no number.
    #[error("valor inválido")]
    NotANumber,

    /// A negative amount where only non-negative ones make sense.
    #[error("o valor não pode ser negativo")]
    Negative,

    /// A percentage above 100.
    #[error("o percentual não pode ser maior que 100%")]
    PercentAboveLimit,
}

/// Errors surfaced by the calculator to its caller.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CalculatorError {
    /// The exchange rate has not been loaded, or its last fetch failed
    /// before any rate was ever obtained.
    #[error("exchange rate not available")]
    MissingRate,

    #[error(transparent)]
    InvalidInput(#[from] InputError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn input_errors_read_as_user_messages() {
        assert_eq!(InputError::NotANumber.to_string(), "valor inválido");
        assert_eq!(
            InputError::PercentAboveLimit.to_string(),
            "o percentual não pode ser maior que 100%"
        );
    }

    #[test]
    fn invalid_input_is_transparent() {
        let err = CalculatorError::from(InputError::Negative);

        assert_eq!(err.to_string(), "o valor não pode ser negativo");
    }
}
