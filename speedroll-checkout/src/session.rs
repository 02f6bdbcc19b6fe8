//! One open checkout: form state, delivery toggle and order submission.
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::checkout::{CheckoutContext, CheckoutState, DeliveryType};
use crate::config::CheckoutConfig;
use crate::link::build_message_link;
use crate::message::format_order_message;
use crate::totals::compute_total;
use crate::validation::{CheckoutError, validate_submission};
use crate::{CartStore, MessageLauncher};

/// Views the checkout can move to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Checkout,
    Confirmation,
}

/// Navigation the caller performs once the delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingNavigation {
    pub target: View,
    pub delay_ms: u32,
}

/// Result of an accepted submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub message: String,
    pub link: String,
    pub navigation: PendingNavigation,
}

/// Checkout session over a cart store and a message launcher.
pub struct CheckoutSession<C, L>
where
    C: CartStore,
    L: MessageLauncher,
{
    cart: C,
    launcher: L,
    config: CheckoutConfig,
    state: CheckoutState,
}

impl<C, L> CheckoutSession<C, L>
where
    C: CartStore,
    L: MessageLauncher,
{
    /// Open a session with default form values and the current cart total.
    pub fn new(cart: C, launcher: L, config: CheckoutConfig) -> Self {
        let state = CheckoutState::for_cart(&cart.snapshot());
        Self {
            cart,
            launcher,
            config,
            state,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &CheckoutState {
        &self.state
    }

    #[must_use]
    pub const fn cart(&self) -> &C {
        &self.cart
    }

    /// Edit form fields. The total is recomputed afterwards.
    pub fn with_state_mut<F>(&mut self, mutate: F)
    where
        F: FnOnce(&mut CheckoutState),
    {
        mutate(&mut self.state);
        let cart = self.cart.snapshot();
        self.state.refresh_total(&cart);
    }

    pub fn select_delivery(&mut self, delivery_type: DeliveryType) {
        let cart = self.cart.snapshot();
        self.state.select_delivery(delivery_type, &cart);
    }

    /// Recompute the total after the cart changed elsewhere.
    pub fn refresh_total(&mut self) {
        let cart = self.cart.snapshot();
        self.state.refresh_total(&cart);
    }

    #[must_use]
    pub fn context(&self) -> CheckoutContext {
        self.context_for(&self.cart.snapshot())
    }

    fn context_for(&self, cart: &Cart) -> CheckoutContext {
        let mut context = self.state.context(&cart.sauces);
        context.total = compute_total(
            &cart.items,
            &cart.sauces.extra_sauces,
            self.state.delivery_type,
        );
        context
    }

    /// Message that would be sent for the current cart and form.
    #[must_use]
    pub fn preview_message(&self) -> String {
        let cart = self.cart.snapshot();
        format_order_message(&cart.items, &self.context_for(&cart), self.cart.subtotal())
    }

    /// Send the order.
    ///
    /// On success the message link is opened, the cart is cleared and the form
    /// is reset to pickup with cash payment.
    ///
    /// # Errors
    ///
    /// Returns the failing precondition. Nothing is sent or cleared in that case.
    pub fn submit(&mut self) -> Result<SubmitReceipt, CheckoutError> {
        let cart = self.cart.snapshot();
        if let Err(err) = validate_submission(&self.state, &cart.items) {
            log::info!("order rejected: {err}");
            return Err(err);
        }

        let context = self.context_for(&cart);
        let message = format_order_message(&cart.items, &context, self.cart.subtotal());
        let link = build_message_link(&message, self.config.business_phone.as_deref());
        self.launcher.open(&link);
        log::debug!(
            "order sent: {} items, total {}",
            cart.items.len(),
            context.total
        );

        self.cart.clear();
        let cleared = self.cart.snapshot();
        self.state.reset(&cleared);

        Ok(SubmitReceipt {
            message,
            link,
            navigation: PendingNavigation {
                target: View::Confirmation,
                delay_ms: self.config.confirmation_delay_ms,
            },
        })
    }

    /// Hand back the collaborators.
    pub fn into_parts(self) -> (C, L) {
        (self.cart, self.launcher)
    }
}
