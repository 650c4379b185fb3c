//! Runs the parsed commands against the calculator.
//!
//! This is the UI boundary: flag values are sanitized here before they reach
//! the state, and the exchange rate is wrapped into a snapshot.

use anyhow::Result;
use chrono::Utc;
use gringa_core::validation::sanitize_amount;
use gringa_core::{AmountKind, CalculatorState, Currency, CurrencyConverter, ExchangeRate};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::cli::{Command, ConvertArgs, NetArgs};
use crate::entry::Entry;
use crate::report::{render_conversion, render_net_report};
use crate::scenario::load_scenario;

/// Runs one command and returns the text to print.
pub fn run(command: &Command) -> Result<String> {
    match command {
        Command::Convert(args) => Ok(run_convert(args)),
        Command::Net(args) => run_net(args),
    }
}

/// Wraps the rate given on the command line, warning when none is usable.
pub fn rate_snapshot(rate: Option<Decimal>) -> ExchangeRate {
    let snapshot = match rate {
        Some(rate) => ExchangeRate::loaded(rate, Utc::now()),
        None => ExchangeRate::unavailable(),
    };

    if let Err(err) = snapshot.require() {
        warn!(error = %err, "every amount will show as zero; pass --rate");
    }
    snapshot
}

pub fn run_convert(args: &ConvertArgs) -> String {
    let rate = rate_snapshot(args.rate);

    let mut converter = CurrencyConverter::new();
    if converter.source_currency() != Currency::from(args.from) {
        converter.invert();
    }
    converter.set_input_amount(sanitized("amount", &args.amount, None));

    if let Some(err) = converter.input_error() {
        warn!(input = %args.amount, error = %err, "amount not converted");
    }

    render_conversion(&converter, &rate)
}

pub fn run_net(args: &NetArgs) -> Result<String> {
    let rate = rate_snapshot(args.rate);
    let state = build_state(args)?;

    let result = state.derive(rate.value());
    info!(net_brl = %result.net_brl, "net income computed");

    Ok(render_net_report(&state, &rate, &result))
}

/// Starts from the scenario file (if any) and applies the flags through the
/// state setters, in the order a user would fill the form.
pub fn build_state(args: &NetArgs) -> Result<CalculatorState> {
    let mut state = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => CalculatorState::new(),
    };

    if let Some(gross) = &args.gross {
        state.set_gross_amount(sanitized("gross", gross, None));
    }

    if let Some(entry) = &args.fees {
        state.set_fees_kind(entry.kind);
        if let Some(currency) = entry.currency {
            state.set_fees_currency(currency);
        }
        state.set_fees_amount(sanitized("fees", &entry.amount, Some(entry.kind)));
    }

    if let Some(entry) = &args.taxes {
        state.set_taxes_kind(entry.kind);
        if let Some(currency) = entry.currency {
            state.set_taxes_currency(currency);
        }
        state.set_taxes_amount(sanitized("taxes", &entry.amount, Some(entry.kind)));
    }

    if let Some(entry) = &args.extra_income {
        if let Some(currency) = entry.currency {
            state.set_extra_income_currency(currency);
        }
        state.set_extra_income_amount(sanitized("extra income", &entry.amount, None));
    }

    if let Some(entry) = &args.extra_tax {
        apply_extra_tax(&mut state, entry);
    }

    Ok(state)
}

fn apply_extra_tax(
    state: &mut CalculatorState,
    entry: &Entry,
) {
    state.set_extra_tax_kind(entry.kind);
    if let Some(currency) = entry.currency {
        state.set_extra_tax_currency(currency);
    }
    state.set_extra_tax_amount(sanitized("extra tax", &entry.amount, Some(entry.kind)));
}

/// Clamps an out-of-range amount, logging what was wrong with it.
fn sanitized(
    field: &'static str,
    text: &str,
    kind: Option<AmountKind>,
) -> String {
    let checked = sanitize_amount(text, kind);
    if let Some(err) = checked.error {
        warn!(field, input = %text, stored = %checked.value, "{err}");
    }
    checked.value
}
