//! Calculation engine for the USD/BRL currency and foreign-income calculator.
//!
//! The exchange rate (BRL per 1 USD) comes from outside as an
//! `Option<Decimal>`; every function here treats a missing rate as a normal
//! input and degrades to zero instead of failing.

pub mod calculations;
pub mod error;
pub mod format;
pub mod models;
pub mod state;
pub mod validation;

pub use calculations::{ConversionDirection, CurrencyConverter, NetIncomeWorksheet, calculate_net_brl};
pub use error::{CalculatorError, InputError};
pub use models::*;
pub use state::CalculatorState;
