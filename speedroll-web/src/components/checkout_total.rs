use speedroll_checkout::numbers::format_amount;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub total: f64,
}

/// Running total, rendered from checkout state.
#[function_component(CheckoutTotal)]
pub fn checkout_total(p: &Props) -> Html {
    html! {
        <div class="checkout-total" aria-live="polite">
            <span class="label">{ "Total" }</span>
            <span id="checkoutTotal" class="value">{ format_amount(p.total) }</span>
        </div>
    }
}
