//! Display-name lookup tables for extras, sauces and payment methods.
//!
//! Every table follows the same fallback rule: a code that is not in the
//! table renders as the raw code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Extra ingredients that can be added to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extra {
    Avocado,
    Tempura,
    Ginger,
}

impl Extra {
    pub const ALL: [Self; 3] = [Self::Avocado, Self::Tempura, Self::Ginger];

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|extra| extra.code() == code)
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Avocado => "aguacate",
            Self::Tempura => "tempura",
            Self::Ginger => "jengibre",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Avocado => "Aguacate Extra",
            Self::Tempura => "Hojuelas Tempura",
            Self::Ginger => "Jengibre Fresco",
        }
    }
}

/// Display name for an extra ingredient code.
#[must_use]
pub fn extra_display_name(code: &str) -> &str {
    Extra::from_code(code).map_or(code, |extra| extra.display_name())
}

/// Included sauce chosen once per product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MainSauce {
    Soy,
    SweetAndSour,
}

impl MainSauce {
    pub const ALL: [Self; 2] = [Self::Soy, Self::SweetAndSour];

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sauce| sauce.code() == code)
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Soy => "soya",
            Self::SweetAndSour => "agridulce",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Soy => "Salsa Soya",
            Self::SweetAndSour => "Salsa Agridulce",
        }
    }
}

/// Display name for a main sauce code.
#[must_use]
pub fn main_sauce_display_name(code: &str) -> &str {
    MainSauce::from_code(code).map_or(code, |sauce| sauce.display_name())
}

/// Payment method selected at checkout.
///
/// Unknown codes are kept verbatim in [`PaymentMethod::Other`] so they can be
/// echoed back in the order summary instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Transfer,
    Other(String),
}

impl PaymentMethod {
    /// Methods offered by the checkout form, in display order.
    pub const OFFERED: [Self; 3] = [Self::Cash, Self::Card, Self::Transfer];

    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "efectivo" => Self::Cash,
            "tarjeta" => Self::Card,
            "transferencia" => Self::Transfer,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Cash => "efectivo",
            Self::Card => "tarjeta",
            Self::Transfer => "transferencia",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Cash => "Efectivo",
            Self::Card => "Tarjeta",
            Self::Transfer => "Transferencia",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<PaymentMethod> for String {
    fn from(method: PaymentMethod) -> Self {
        method.code().to_string()
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
