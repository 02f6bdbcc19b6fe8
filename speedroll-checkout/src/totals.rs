//! Order total computation.
//!
//! Totals keep full precision; rounding happens only when a figure is rendered.

use crate::cart::{ExtraSauce, LineItem};
use crate::checkout::DeliveryType;
use crate::constants::DELIVERY_COST;

/// Sum of the supplied line item subtotals.
#[must_use]
pub fn items_subtotal(items: &[LineItem]) -> f64 {
    items.iter().map(|item| item.subtotal).sum()
}

/// Sum of `quantity * unit_price` over the extra sauces.
#[must_use]
pub fn extra_sauces_total(extra_sauces: &[ExtraSauce]) -> f64 {
    extra_sauces.iter().map(ExtraSauce::line_total).sum()
}

/// Surcharge applied for the given delivery type.
#[must_use]
pub const fn delivery_surcharge(delivery_type: DeliveryType) -> f64 {
    match delivery_type {
        DeliveryType::Delivery => DELIVERY_COST,
        DeliveryType::Pickup => 0.0,
    }
}

/// Full order total: items, extra sauces and the delivery surcharge.
#[must_use]
pub fn compute_total(
    items: &[LineItem],
    extra_sauces: &[ExtraSauce],
    delivery_type: DeliveryType,
) -> f64 {
    items_subtotal(items) + extra_sauces_total(extra_sauces) + delivery_surcharge(delivery_type)
}
