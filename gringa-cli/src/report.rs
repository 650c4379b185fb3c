//! Plain-text rendering of calculator results.

use chrono::{DateTime, Local, Utc};
use gringa_core::calculations::common::parse_amount;
use gringa_core::format::{format_currency, format_currency_with_code};
use gringa_core::{CalculatorState, Currency, CurrencyConverter, DerivedResult, ExchangeRate};

/// Renders the net income panel as aligned `label  value` lines.
///
/// `result` must be `state.derive(rate.value())`.
pub fn render_net_report(
    state: &CalculatorState,
    rate: &ExchangeRate,
    result: &DerivedResult,
) -> String {
    let brl = |value| format_currency_with_code(value, Currency::Brl);

    let mut rows = vec![
        ("Cotação".to_string(), render_rate(rate)),
        (
            format!("Valor bruto ({} USD)", state_gross_label(state)),
            brl(result.gross_brl),
        ),
        (format!("Taxas ({})", state.fees.label()), brl(result.fees_brl)),
        (
            format!("Impostos ({})", state.taxes.label()),
            brl(result.taxes_brl),
        ),
    ];

    if state.has_extra_income() {
        rows.push((
            format!(
                "Renda extra ({} {})",
                state.extra_income.value().normalize(),
                state.extra_income.currency.as_str()
            ),
            brl(result.extra_income_brl),
        ));
        rows.push((
            format!("Taxa sobre renda extra ({})", state.extra_tax.label()),
            brl(result.extra_tax_brl),
        ));
    }

    rows.push(("Valor Total Bruto".to_string(), brl(result.total_gross_brl)));
    rows.push(("Desconto Total".to_string(), brl(result.total_discount_brl)));
    rows.push(("Valor Líquido".to_string(), brl(result.net_brl)));

    render_rows(&rows)
}

/// Renders one conversion: `"$ 100,00 = R$ 525,00"`.
pub fn render_conversion(
    converter: &CurrencyConverter,
    rate: &ExchangeRate,
) -> String {
    let source = converter.source_currency();
    let target = converter.target_currency();
    let amount = parse_amount(converter.input_amount());

    format!(
        "{} = {} {}",
        format_currency(amount, source),
        target.symbol(),
        converter.converted_amount(rate.value())
    )
}

fn render_rate(rate: &ExchangeRate) -> String {
    let Some(value) = rate.value() else {
        return "indisponível".to_string();
    };

    let mut line = format!("{} por 1 USD", format_currency(value, Currency::Brl));
    if let Some(at) = &rate.last_update {
        line.push_str(&format!(", atualizada em {}", format_update_time(at)));
    }
    if rate.is_stale() {
        line.push_str(" (desatualizada)");
    }
    line
}

/// `dd/mm/yyyy, HH:MM:SS` in local time.
fn format_update_time(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%d/%m/%Y, %H:%M:%S")
        .to_string()
}

fn state_gross_label(state: &CalculatorState) -> String {
    parse_amount(&state.gross_amount_usd)
        .normalize()
        .to_string()
}

fn render_rows(rows: &[(String, String)]) -> String {
    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|(label, value)| format!("{label:<width$}  {value}\n"))
        .collect()
}
