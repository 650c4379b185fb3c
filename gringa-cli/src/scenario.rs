//! Loading a starting [`CalculatorState`] from a TOML file.
//!
//! ```toml
//! gross_amount_usd = "5000"
//!
//! [fees]
//! amount = "3.5"
//! kind = "percent"
//!
//! [extra_income]
//! amount = 1000
//! currency = "BRL"
//!
//! [extra_tax]
//! amount = "13"
//! kind = "percent"
//! currency = "BRL"
//! ```
//!
//! Every field is optional; missing ones take their reset values.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use gringa_core::CalculatorState;
use tracing::debug;

/// Parses a scenario from TOML text.
pub fn parse_scenario(text: &str) -> Result<CalculatorState> {
    toml::from_str(text).context("invalid scenario document")
}

/// Reads and parses a scenario file.
pub fn load_scenario(path: &Path) -> Result<CalculatorState> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario '{}'", path.display()))?;
    let state =
        parse_scenario(&text).with_context(|| format!("failed to parse '{}'", path.display()))?;

    debug!(path = %path.display(), "scenario loaded");
    Ok(state)
}
