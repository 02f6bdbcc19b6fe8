//! Checkout submission settings.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_BUSINESS_PHONE, DEFAULT_CONFIRMATION_DELAY_MS};

/// Settings for where orders are sent and how the confirmation is paced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    /// Shop number the order chat opens with; `None` opens the generic compose view.
    pub business_phone: Option<String>,
    /// Pause between sending the order and showing the confirmation view.
    pub confirmation_delay_ms: u32,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            business_phone: Some(DEFAULT_BUSINESS_PHONE.to_string()),
            confirmation_delay_ms: DEFAULT_CONFIRMATION_DELAY_MS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a checkout config, filling missing fields with defaults.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or a field has the wrong type.
pub fn load_checkout_config(json: &str) -> Result<CheckoutConfig, ConfigError> {
    Ok(serde_json::from_str(json)?)
}
