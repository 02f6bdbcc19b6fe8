//! Browser implementations of the checkout collaborators
//!
//! The cart lives in `localStorage` under [`CART_STORAGE_KEY`] and order links
//! open in a new tab.

use speedroll_checkout::{Cart, CartStore, LineItem, MessageLauncher, SauceSelection};

use crate::dom;

pub const CART_STORAGE_KEY: &str = "speedroll.cart";

#[derive(Debug, thiserror::Error)]
pub enum WebCartError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Cart store backed by `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebCartStore;

impl WebCartStore {
    /// Read the stored cart. A missing entry is an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unavailable or the entry is not a cart.
    pub fn load(&self) -> Result<Cart, WebCartError> {
        let storage = dom::local_storage()
            .map_err(|e| WebCartError::Storage(dom::js_error_message(&e)))?;
        let raw = storage
            .get_item(CART_STORAGE_KEY)
            .map_err(|e| WebCartError::Storage(dom::js_error_message(&e)))?;
        match raw {
            Some(json) => Ok(parse_cart(&json)?),
            None => Ok(Cart::default()),
        }
    }

    /// Persist `cart`, replacing the stored entry.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unavailable or the write is refused.
    pub fn save(&self, cart: &Cart) -> Result<(), WebCartError> {
        let json = serde_json::to_string(cart)?;
        dom::local_storage()
            .and_then(|storage| storage.set_item(CART_STORAGE_KEY, &json))
            .map_err(|e| WebCartError::Storage(dom::js_error_message(&e)))
    }

    /// Stored cart, or an empty one when it cannot be read.
    #[must_use]
    pub fn load_or_empty(&self) -> Cart {
        self.load().unwrap_or_else(|err| {
            log::error!("Failed to load cart: {err}");
            Cart::default()
        })
    }
}

impl CartStore for WebCartStore {
    fn items(&self) -> Vec<LineItem> {
        self.load_or_empty().items
    }

    fn sauces(&self) -> SauceSelection {
        self.load_or_empty().sauces
    }

    fn clear(&mut self) {
        let result = dom::local_storage()
            .and_then(|storage| storage.remove_item(CART_STORAGE_KEY))
            .map_err(|e| WebCartError::Storage(dom::js_error_message(&e)));
        if let Err(err) = result {
            log::error!("Failed to clear cart: {err}");
        }
    }

    fn snapshot(&self) -> Cart {
        self.load_or_empty()
    }
}

/// Opens order links in a new browser tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowLauncher;

impl MessageLauncher for WindowLauncher {
    fn open(&self, url: &str) {
        if let Err(err) = dom::open_in_new_tab(url) {
            let message = dom::js_error_message(&err);
            log::error!("Failed to open order link: {message}");
            dom::console_error(&message);
        }
    }
}

/// Parse the cart JSON written by the storefront.
///
/// # Errors
///
/// Returns an error if the JSON does not describe a cart.
pub fn parse_cart(json: &str) -> Result<Cart, WebCartError> {
    Ok(serde_json::from_str(json)?)
}
