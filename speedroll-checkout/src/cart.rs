//! Cart contents read by the checkout
use serde::{Deserialize, Serialize};

use crate::catalog::{extra_display_name, main_sauce_display_name};
use crate::numbers::{format_amount, qty_to_f64};

/// Per-item choices made on the product page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customizations {
    #[serde(default)]
    pub sauces: Vec<String>,
    /// Extra ingredient codes, see [`crate::catalog::Extra`].
    #[serde(default)]
    pub extras: Vec<String>,
    #[serde(default)]
    pub instructions: String,
}

impl Customizations {
    /// Extra codes mapped to their display names.
    #[must_use]
    pub fn extra_names(&self) -> Vec<&str> {
        self.extras
            .iter()
            .map(|code| extra_display_name(code))
            .collect()
    }
}

/// A single product entry in the cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    #[serde(rename = "price")]
    pub unit_price: f64,
    /// Supplied by the cart alongside the unit price; it is not recomputed.
    pub subtotal: f64,
    #[serde(default)]
    pub customizations: Option<Customizations>,
    /// Free-form extras description from items added before customizations existed.
    #[serde(default, rename = "extras")]
    pub extras_note: Option<String>,
}

impl LineItem {
    /// Build an uncustomized item whose subtotal is `quantity * unit_price`.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
            subtotal: qty_to_f64(quantity) * unit_price,
            customizations: None,
            extras_note: None,
        }
    }

    #[must_use]
    pub fn with_customizations(mut self, customizations: Customizations) -> Self {
        self.customizations = Some(customizations);
        self
    }
}

/// The single included sauce picked for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainSauceChoice {
    #[serde(rename = "productName")]
    pub product_name: String,
    pub sauce: String,
}

impl MainSauceChoice {
    #[must_use]
    pub fn sauce_name(&self) -> &str {
        main_sauce_display_name(&self.sauce)
    }
}

/// A separately priced sauce add-on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraSauce {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    pub quantity: u32,
    #[serde(rename = "price")]
    pub unit_price: f64,
}

impl ExtraSauce {
    /// Name, else kind, else identifier. Empty strings count as missing.
    #[must_use]
    pub fn label(&self) -> &str {
        [self.name.as_deref(), self.kind.as_deref()]
            .into_iter()
            .flatten()
            .find(|value| !value.is_empty())
            .unwrap_or(self.id.as_str())
    }

    #[must_use]
    pub fn line_total(&self) -> f64 {
        qty_to_f64(self.quantity) * self.unit_price
    }
}

/// Sauce choices collected across the cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SauceSelection {
    #[serde(default, rename = "productMainSauces")]
    pub product_main_sauces: Vec<MainSauceChoice>,
    #[serde(default, rename = "extraSauces")]
    pub extra_sauces: Vec<ExtraSauce>,
}

impl SauceSelection {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.product_main_sauces.is_empty() && self.extra_sauces.is_empty()
    }

    /// Rows for the checkout sauce panel.
    #[must_use]
    pub fn summary(&self) -> SauceSummary {
        SauceSummary {
            main: self
                .product_main_sauces
                .iter()
                .map(|choice| SauceLine {
                    label: choice.product_name.clone(),
                    detail: choice.sauce_name().to_string(),
                })
                .collect(),
            extra: self
                .extra_sauces
                .iter()
                .map(|sauce| SauceLine {
                    label: format!("{} x{}", sauce.label(), sauce.quantity),
                    detail: format_amount(sauce.line_total()),
                })
                .collect(),
        }
    }
}

/// One label/value row of the sauce panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SauceLine {
    pub label: String,
    pub detail: String,
}

/// Display rows for the sauces chosen across the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SauceSummary {
    pub main: Vec<SauceLine>,
    pub extra: Vec<SauceLine>,
}

impl SauceSummary {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.extra.is_empty()
    }
}

/// In-memory cart state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub sauces: SauceSelection,
}

impl Cart {
    /// Create a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Sum of line item subtotals. Extra sauces are not included.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        crate::totals::items_subtotal(&self.items)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every item and sauce selection.
    pub fn clear(&mut self) {
        self.items.clear();
        self.sauces = SauceSelection::default();
    }
}
