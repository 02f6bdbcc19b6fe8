use speedroll_checkout::{Cart, CheckoutConfig, SubmitReceipt};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::checkout::CheckoutPage;
use crate::pages::confirmation::ConfirmationPage;
use crate::router::Route;
use crate::storage::WebCartStore;

/// Main application component providing browser routing
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let cart = use_state(|| WebCartStore.load_or_empty());
    let config = use_memo((), |_| CheckoutConfig::default());

    let on_submitted = {
        let cart = cart.clone();
        Callback::from(move |receipt: SubmitReceipt| {
            log::debug!("Order link opened: {}", receipt.link);
            cart.set(Cart::default());
        })
    };

    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let page = match route {
        Route::Checkout => html! {
            <CheckoutPage cart={(*cart).clone()} config={(*config).clone()} {on_submitted} />
        },
        Route::Confirmation => html! { <ConfirmationPage /> },
        Route::NotFound => html! {
            <section class="panel" role="region">
                <h1>{ "Página no encontrada" }</h1>
                <a href="/">{ "Volver al carrito" }</a>
            </section>
        },
    };

    html! {
        <main id="main" role="main">
            { page }
        </main>
    }
}
