use speedroll_checkout::constants::MSG_NO_SAUCES;
use speedroll_checkout::{SauceLine, SauceSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub summary: SauceSummary,
}

fn render_rows(
    title: &'static str,
    rows: &[SauceLine],
    detail_class: Option<&'static str>,
) -> Html {
    if rows.is_empty() {
        return html! {};
    }
    html! {
        <div class="sauce-group">
            <p class="sauce-group-title">{ title }</p>
            { for rows.iter().map(|row| html! {
                <div class="sauce-row">
                    <span class="sauce-label">{ row.label.clone() }</span>
                    <span class={classes!("sauce-detail", detail_class)}>{ row.detail.clone() }</span>
                </div>
            }) }
        </div>
    }
}

/// Sauces chosen across the cart, shown on the checkout page.
#[function_component(SauceSummaryPanel)]
pub fn sauce_summary_panel(p: &Props) -> Html {
    html! {
        <section id="checkoutSaucesSection" class="checkout-sauces">
            { if p.summary.is_empty() {
                html! { <p class="sauce-empty">{ MSG_NO_SAUCES }</p> }
            } else {
                html! {
                    <>
                        { render_rows("Salsas Principales:", &p.summary.main, None) }
                        { render_rows("Salsas Adicionales:", &p.summary.extra, Some("font-medium")) }
                    </>
                }
            }}
        </section>
    }
}
