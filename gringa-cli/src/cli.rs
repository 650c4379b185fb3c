//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use gringa_core::Currency;
use rust_decimal::Decimal;

use crate::entry::{Entry, parse_entry, parse_fixed_entry};

/// Currency and foreign-income calculator (USD/BRL).
///
/// Converts amounts between dollars and reais and works out how much of a
/// payment in dollars arrives as reais after fees and taxes.
#[derive(Debug, Parser)]
#[command(name = "gringa", version, about)]
pub struct Cli {
    /// Log filter, e.g. `debug` or `gringa_core=trace`. Overrides `RUST_LOG`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert an amount between USD and BRL.
    Convert(ConvertArgs),
    /// Compute the net amount received in BRL.
    Net(NetArgs),
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Amount to convert.
    pub amount: String,

    /// Exchange rate in BRL per 1 USD.
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Currency of the amount.
    #[arg(long, value_enum, default_value_t = CurrencyArg::Usd)]
    pub from: CurrencyArg,
}

#[derive(Debug, Args)]
pub struct NetArgs {
    /// Exchange rate in BRL per 1 USD.
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// TOML file with a starting scenario; flags below override it.
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    /// Gross amount in USD.
    #[arg(long)]
    pub gross: Option<String>,

    /// Fees: `10%` of gross, or a fixed `50USD` / `100BRL`.
    #[arg(long, value_parser = parse_entry)]
    pub fees: Option<Entry>,

    /// Taxes, same syntax as `--fees`.
    #[arg(long, value_parser = parse_entry)]
    pub taxes: Option<Entry>,

    /// Extra income: `200USD` or `1000BRL`.
    #[arg(long, value_parser = parse_fixed_entry)]
    pub extra_income: Option<Entry>,

    /// Tax on the extra income: `13%` or a fixed amount.
    #[arg(long, value_parser = parse_entry)]
    pub extra_tax: Option<Entry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CurrencyArg {
    Usd,
    Brl,
}

impl From<CurrencyArg> for Currency {
    fn from(arg: CurrencyArg) -> Self {
        match arg {
            CurrencyArg::Usd => Currency::Usd,
            CurrencyArg::Brl => Currency::Brl,
        }
    }
}
