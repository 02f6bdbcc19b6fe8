use speedroll_checkout::DeliveryType;
use yew::prelude::*;

const ACTIVE_CLASSES: &[&str] = &[
    "bg-white",
    "dark:bg-surface-dark",
    "shadow-sm",
    "text-primary",
    "font-bold",
];
const INACTIVE_CLASSES: &[&str] = &["text-gray-500", "dark:text-gray-400", "font-medium"];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub selected: DeliveryType,
    #[prop_or_default]
    pub on_select: Callback<DeliveryType>,
}

fn option_classes(option: DeliveryType, selected: DeliveryType) -> Classes {
    let state = if option == selected {
        ACTIVE_CLASSES
    } else {
        INACTIVE_CLASSES
    };
    let mut classes = classes!("delivery-option");
    for class in state {
        classes.push(*class);
    }
    classes
}

#[function_component(DeliveryToggle)]
pub fn delivery_toggle(p: &Props) -> Html {
    let render_option = |option: DeliveryType, id: &'static str| {
        let onclick = {
            let cb = p.on_select.clone();
            Callback::from(move |_: MouseEvent| cb.emit(option))
        };
        let pressed = option == p.selected;
        html! {
            <button
                type="button"
                id={id}
                class={option_classes(option, p.selected)}
                aria-pressed={pressed.to_string()}
                data-delivery={option.code()}
                {onclick}
            >
                { option.label() }
            </button>
        }
    };

    html! {
        <div class="delivery-toggle" role="group" aria-label="Tipo de entrega">
            { render_option(DeliveryType::Pickup, "btnRetiro") }
            { render_option(DeliveryType::Delivery, "btnDespacho") }
        </div>
    }
}
