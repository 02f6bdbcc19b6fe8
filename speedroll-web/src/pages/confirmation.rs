use yew::prelude::*;

#[function_component(ConfirmationPage)]
pub fn confirmation_page() -> Html {
    html! {
        <section class="panel confirmation-panel" role="region" aria-labelledby="confirmation-title">
            <h1 id="confirmation-title">{ "¡Pedido enviado!" }</h1>
            <p>{ "Te contactaremos por WhatsApp para confirmar tu pedido." }</p>
            <a class="retro-btn-secondary" href="/">{ "Volver al inicio" }</a>
        </section>
    }
}
