//! Checkout form state and the pickup/delivery toggle.
//!
//! The state is the single source of truth for the delivery mode and the
//! displayed total; the UI renders it and never reads values back.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cart::{Cart, SauceSelection};
use crate::catalog::PaymentMethod;
use crate::totals::compute_total;

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeliveryType {
    /// Customer collects the order at the shop
    #[default]
    #[serde(rename = "retiro")]
    Pickup,
    /// Order is delivered to an address for a fixed surcharge
    #[serde(rename = "despacho")]
    Delivery,
}

impl DeliveryType {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pickup => "retiro",
            Self::Delivery => "despacho",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pickup => "Retiro",
            Self::Delivery => "Despacho",
        }
    }

    /// The other delivery mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Pickup => Self::Delivery,
            Self::Delivery => Self::Pickup,
        }
    }
}

impl fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Everything the checkout form holds for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutState {
    #[serde(default, rename = "fullName")]
    pub full_name: String,
    #[serde(default, rename = "paymentMethod")]
    pub payment_method: PaymentMethod,
    #[serde(default, rename = "deliveryType")]
    pub delivery_type: DeliveryType,
    #[serde(default, rename = "deliveryAddress")]
    pub delivery_address: String,
    #[serde(default)]
    pub observations: String,
    /// Total shown to the customer, recomputed whenever the cart or the
    /// delivery mode changes.
    #[serde(default)]
    pub total: f64,
}

impl CheckoutState {
    /// Fresh form state with the total computed for `cart`.
    #[must_use]
    pub fn for_cart(cart: &Cart) -> Self {
        let mut state = Self::default();
        state.refresh_total(cart);
        state
    }

    /// Switch delivery mode on explicit user selection and recompute the total.
    pub fn select_delivery(&mut self, delivery_type: DeliveryType, cart: &Cart) {
        if self.delivery_type != delivery_type {
            log::debug!("delivery mode {} -> {}", self.delivery_type, delivery_type);
        }
        self.delivery_type = delivery_type;
        self.refresh_total(cart);
    }

    /// Recompute the displayed total from the cart and the current mode.
    pub fn refresh_total(&mut self, cart: &Cart) {
        self.total = compute_total(&cart.items, &cart.sauces.extra_sauces, self.delivery_type);
    }

    /// Address entry is only available while delivery is selected.
    #[must_use]
    pub const fn address_enabled(&self) -> bool {
        matches!(self.delivery_type, DeliveryType::Delivery)
    }

    /// Restore form defaults: empty fields, cash payment, pickup.
    pub fn reset(&mut self, cart: &Cart) {
        *self = Self::for_cart(cart);
    }

    /// Snapshot consumed by the message builder.
    #[must_use]
    pub fn context(&self, sauces: &SauceSelection) -> CheckoutContext {
        CheckoutContext {
            full_name: self.full_name.clone(),
            payment_method: self.payment_method.clone(),
            delivery_type: self.delivery_type,
            delivery_address: self.delivery_address.clone(),
            observations: self.observations.clone(),
            total: self.total,
            sauces: sauces.clone(),
        }
    }
}

/// Checkout data rendered into the order message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutContext {
    pub full_name: String,
    pub payment_method: PaymentMethod,
    pub delivery_type: DeliveryType,
    pub delivery_address: String,
    pub observations: String,
    pub total: f64,
    pub sauces: SauceSelection,
}
