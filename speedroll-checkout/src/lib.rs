//! Speed Roll checkout
//!
//! Platform-agnostic checkout logic for the Speed Roll ordering site: order
//! totals, the WhatsApp order summary, the pickup/delivery toggle and the
//! submission flow. Cart storage and link opening are supplied by the platform.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod constants;
pub mod link;
pub mod message;
pub mod numbers;
pub mod session;
pub mod totals;
pub mod validation;

// Re-export commonly used types
pub use cart::{
    Cart, Customizations, ExtraSauce, LineItem, MainSauceChoice, SauceLine, SauceSelection,
    SauceSummary,
};
pub use catalog::{Extra, MainSauce, PaymentMethod, extra_display_name, main_sauce_display_name};
pub use checkout::{CheckoutContext, CheckoutState, DeliveryType};
pub use config::{CheckoutConfig, ConfigError, load_checkout_config};
pub use constants::DELIVERY_COST;
pub use link::build_message_link;
pub use message::{OrderMessage, format_order_message};
pub use session::{CheckoutSession, PendingNavigation, SubmitReceipt, View};
pub use totals::{compute_total, extra_sauces_total, items_subtotal};
pub use validation::{CheckoutError, validate_submission};

/// Trait for abstracting the cart the checkout reads from.
/// Platform-specific implementations should provide this
pub trait CartStore {
    /// Line items in the order they were added.
    fn items(&self) -> Vec<LineItem>;

    /// Main and extra sauce selections.
    fn sauces(&self) -> SauceSelection;

    /// Items-only subtotal.
    fn subtotal(&self) -> f64 {
        items_subtotal(&self.items())
    }

    /// Remove every item and sauce selection.
    fn clear(&mut self);

    /// Items and sauces read together.
    fn snapshot(&self) -> Cart {
        Cart {
            items: self.items(),
            sauces: self.sauces(),
        }
    }
}

/// Trait for opening the order link with the messaging service.
///
/// Opening is fire-and-forget: implementations report their own failures.
pub trait MessageLauncher {
    fn open(&self, url: &str);
}

impl<F> MessageLauncher for F
where
    F: Fn(&str),
{
    fn open(&self, url: &str) {
        self(url);
    }
}

impl CartStore for Cart {
    fn items(&self) -> Vec<LineItem> {
        self.items.clone()
    }

    fn sauces(&self) -> SauceSelection {
        self.sauces.clone()
    }

    fn subtotal(&self) -> f64 {
        Cart::subtotal(self)
    }

    fn clear(&mut self) {
        Cart::clear(self);
    }

    fn snapshot(&self) -> Cart {
        self.clone()
    }
}
