use serde::{Deserialize, Serialize};

/// The two currencies the calculator understands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Brl,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Brl => "BRL",
        }
    }

    /// Display prefix used in front of formatted amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Brl => "R$",
        }
    }

    /// Case-insensitive parse of an ISO code.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Some(Self::Usd),
            "BRL" => Some(Self::Brl),
            _ => None,
        }
    }
}

/// Whether an entry is a percentage of some basis or an absolute amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountKind {
    Percent,
    #[serde(alias = "value")]
    Fixed,
}

impl AmountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percent => "percent",
            Self::Fixed => "fixed",
        }
    }

    /// Accepts `"value"` as a synonym for [`AmountKind::Fixed`].
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percent" | "%" => Some(Self::Percent),
            "fixed" | "value" => Some(Self::Fixed),
            _ => None,
        }
    }
}
