//! Order files: a stored cart plus the checkout form as the customer filled it.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use speedroll_checkout::{Cart, CheckoutConfig, CheckoutState, load_checkout_config};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderFile {
    #[serde(default)]
    pub cart: Cart,
    #[serde(default)]
    pub checkout: CheckoutState,
}

pub fn parse_order(raw: &str) -> serde_json::Result<OrderFile> {
    serde_json::from_str(raw)
}

pub fn load_order(path: &Path) -> Result<OrderFile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read order file {}", path.display()))?;
    parse_order(&raw).with_context(|| format!("failed to parse order file {}", path.display()))
}

pub fn load_config(path: Option<&Path>) -> Result<CheckoutConfig> {
    let Some(path) = path else {
        return Ok(CheckoutConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    load_checkout_config(&raw).with_context(|| format!("invalid config {}", path.display()))
}
