//! Checkout page: customer form, delivery toggle, totals and the pay button.
//!
//! All values shown come from one `CheckoutState`; inputs write into it and
//! nothing is read back from the DOM.

use speedroll_checkout::numbers::format_amount;
use speedroll_checkout::{
    Cart, CartStore, CheckoutConfig, CheckoutError, CheckoutSession, CheckoutState, DeliveryType,
    MessageLauncher, PaymentMethod, SubmitReceipt,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::checkout_total::CheckoutTotal;
use crate::components::delivery_toggle::DeliveryToggle;
use crate::components::sauce_summary::SauceSummaryPanel;
use crate::dom;
use crate::router::Route;
use crate::storage::{WebCartStore, WindowLauncher};

#[derive(Properties, PartialEq, Clone)]
pub struct CheckoutPageProps {
    /// Cart as last read from storage
    pub cart: Cart,
    #[prop_or_default]
    pub config: CheckoutConfig,
    /// Fired after the order link was opened and the cart cleared
    #[prop_or_default]
    pub on_submitted: Callback<SubmitReceipt>,
}

fn update_form<F>(form: &UseStateHandle<CheckoutState>, mutate: F)
where
    F: FnOnce(&mut CheckoutState),
{
    let mut next = (**form).clone();
    mutate(&mut next);
    form.set(next);
}

/// Submit `form` against the cart the customer is looking at.
///
/// Returns the receipt and the reset form on success.
///
/// # Errors
///
/// Returns the failing precondition; nothing is launched in that case.
pub fn submit_checkout<L>(
    cart: Cart,
    form: CheckoutState,
    config: CheckoutConfig,
    launcher: L,
) -> Result<(SubmitReceipt, CheckoutState), CheckoutError>
where
    L: MessageLauncher,
{
    let mut session = CheckoutSession::new(cart, launcher, config);
    session.with_state_mut(|state| *state = form);
    let receipt = session.submit()?;
    Ok((receipt, session.state().clone()))
}

fn schedule_navigation(navigator: Option<Navigator>, receipt: &SubmitReceipt) {
    let delay = i32::try_from(receipt.navigation.delay_ms).unwrap_or(i32::MAX);
    let route = Route::from_view(receipt.navigation.target);
    spawn_local(async move {
        if let Err(err) = dom::sleep_ms(delay).await {
            log::error!("Confirmation delay failed: {}", dom::js_error_message(&err));
        }
        if let Some(navigator) = navigator {
            navigator.push(&route);
        }
    });
}

fn show_notice(err: CheckoutError) {
    if let Err(js) = dom::alert(&err.to_string()) {
        dom::console_error(&dom::js_error_message(&js));
    }
}

#[function_component(CheckoutPage)]
pub fn checkout_page(props: &CheckoutPageProps) -> Html {
    let form = {
        let cart = props.cart.clone();
        use_state(move || CheckoutState::for_cart(&cart))
    };
    let notice = use_state(|| None::<CheckoutError>);
    let navigator = use_navigator();

    {
        let form = form.clone();
        use_effect_with(props.cart.clone(), move |cart| {
            update_form(&form, |state| state.refresh_total(cart));
        });
    }

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                update_form(&form, |state| state.full_name = input.value());
            }
        })
    };

    let on_payment = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let method = PaymentMethod::from_code(&select.value());
                update_form(&form, |state| state.payment_method = method);
            }
        })
    };

    let on_address = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                update_form(&form, |state| state.delivery_address = input.value());
            }
        })
    };

    let on_observations = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                update_form(&form, |state| state.observations = area.value());
            }
        })
    };

    let on_select_delivery = {
        let form = form.clone();
        let cart = props.cart.clone();
        Callback::from(move |delivery_type: DeliveryType| {
            update_form(&form, |state| state.select_delivery(delivery_type, &cart));
        })
    };

    let on_pay = {
        let form = form.clone();
        let notice = notice.clone();
        let cart = props.cart.clone();
        let config = props.config.clone();
        let on_submitted = props.on_submitted.clone();
        Callback::from(move |_: MouseEvent| {
            match submit_checkout(cart.clone(), (*form).clone(), config.clone(), WindowLauncher) {
                Ok((receipt, reset)) => {
                    let mut store = WebCartStore;
                    store.clear();
                    notice.set(None);
                    form.set(reset);
                    schedule_navigation(navigator.clone(), &receipt);
                    on_submitted.emit(receipt);
                }
                Err(err) => {
                    show_notice(err);
                    notice.set(Some(err));
                }
            }
        })
    };

    let summary = props.cart.sauces.summary();
    let methods = PaymentMethod::OFFERED;
    let address_enabled = form.address_enabled();

    html! {
        <section class="panel checkout-panel" role="region" aria-labelledby="checkout-title">
            <header class="section-header">
                <h1 id="checkout-title">{ "Finalizar pedido" }</h1>
            </header>

            { if props.cart.is_empty() {
                html! { <p class="empty-cart">{ speedroll_checkout::constants::MSG_EMPTY_CART }</p> }
            } else {
                html! {
                    <ul class="checkout-items">
                        { for props.cart.items.iter().map(|item| html! {
                            <li class="checkout-item">
                                <span class="name">{ format!("{} x{}", item.name, item.quantity) }</span>
                                <span class="value">{ format_amount(item.subtotal) }</span>
                            </li>
                        }) }
                    </ul>
                }
            }}

            <SauceSummaryPanel {summary} />

            <label for="fullName">{ "Nombre completo" }</label>
            <input id="fullName" type="text" value={form.full_name.clone()} oninput={on_name} />

            <label for="paymentMethod">{ "Medio de pago" }</label>
            <select id="paymentMethod" onchange={on_payment}>
                { for methods.iter().map(|method| html! {
                    <option value={method.code().to_string()} selected={*method == form.payment_method}>
                        { method.display_name().to_string() }
                    </option>
                }) }
            </select>

            <DeliveryToggle selected={form.delivery_type} on_select={on_select_delivery} />

            <div id="deliveryAddressSection" class={classes!("delivery-address", (!address_enabled).then_some("hidden"))}>
                <label for="deliveryAddress">{ "Dirección de despacho" }</label>
                <input
                    id="deliveryAddress"
                    type="text"
                    value={form.delivery_address.clone()}
                    disabled={!address_enabled}
                    oninput={on_address}
                />
            </div>

            <label for="customerObservations">{ "Observaciones" }</label>
            <textarea id="customerObservations" value={form.observations.clone()} oninput={on_observations} />

            <CheckoutTotal total={form.total} />

            { if let Some(err) = *notice {
                html! { <p class="error" role="alert">{ err.to_string() }</p> }
            } else {
                html! {}
            }}

            <footer class="panel-footer">
                <button type="button" class="retro-btn-primary" id="payButton" onclick={on_pay}>
                    { "Enviar pedido por WhatsApp" }
                </button>
            </footer>
        </section>
    }
}
