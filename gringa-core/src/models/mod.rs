mod currency;
mod derived_result;
mod exchange_rate;
mod monetary_input;

pub use currency::{AmountKind, Currency};
pub use derived_result::DerivedResult;
pub use exchange_rate::ExchangeRate;
pub use monetary_input::{ExtraIncomeInput, MonetaryInput};
