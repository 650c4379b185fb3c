//! Calculation modules for the currency and income calculator.
//!
//! This module provides the conversion primitives, the net income worksheet
//! built on top of them, and the quick USD/BRL converter.

pub mod common;
pub mod conversion;
pub mod converter;
pub mod net_income;

pub use converter::{ConversionDirection, CurrencyConverter};
pub use net_income::{NetIncomeWorksheet, calculate_net_brl};
