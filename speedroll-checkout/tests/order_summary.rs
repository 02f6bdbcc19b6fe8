use speedroll_checkout::{
    Cart, CheckoutConfig, CheckoutError, CheckoutSession, CheckoutState, Customizations,
    DELIVERY_COST, DeliveryType, ExtraSauce, LineItem, MainSauceChoice, PaymentMethod,
    build_message_link, compute_total, format_order_message,
};
use std::cell::RefCell;
use std::rc::Rc;

fn sample_cart() -> Cart {
    let mut cart = Cart::new();
    cart.push(
        LineItem::new("Hot Roll Salmón", 2, 5990.0).with_customizations(Customizations {
            sauces: vec!["Soya".to_string()],
            extras: vec!["aguacate".to_string(), "tempura".to_string()],
            instructions: "Bien crujiente".to_string(),
        }),
    );
    cart.push(LineItem::new("Gyozas de cerdo", 1, 3900.0));
    cart.sauces.product_main_sauces.push(MainSauceChoice {
        product_name: "Hot Roll Salmón".to_string(),
        sauce: "agridulce".to_string(),
    });
    cart.sauces.extra_sauces.push(ExtraSauce {
        id: "extra_acevichada".to_string(),
        name: Some("Acevichada".to_string()),
        kind: None,
        quantity: 2,
        unit_price: 700.0,
    });
    cart
}

#[test]
fn single_item_pickup_total() {
    let items = [LineItem::new("A", 2, 1000.0)];
    let total = compute_total(&items, &[], DeliveryType::Pickup);
    assert!((total - 2000.0).abs() < f64::EPSILON);
}

#[test]
fn delivery_surcharge_is_independent_of_contents() {
    for cart in [Cart::new(), sample_cart()] {
        let pickup = compute_total(&cart.items, &cart.sauces.extra_sauces, DeliveryType::Pickup);
        let delivery =
            compute_total(&cart.items, &cart.sauces.extra_sauces, DeliveryType::Delivery);
        assert!((delivery - pickup - DELIVERY_COST).abs() < f64::EPSILON);
    }
}

#[test]
fn full_delivery_message_renders_every_section_in_order() {
    let cart = sample_cart();
    let mut state = CheckoutState::for_cart(&cart);
    state.full_name = "Camila Rojas".to_string();
    state.payment_method = PaymentMethod::Transfer;
    state.delivery_address = "Los Aromos 123, Ñuñoa".to_string();
    state.observations = "Dejar en conserjería".to_string();
    state.select_delivery(DeliveryType::Delivery, &cart);

    let message = format_order_message(&cart.items, &state.context(&cart.sauces), cart.subtotal());
    let expected = "*🍣 NUEVO PEDIDO - SPEED ROLL 🍣*

*👤 CLIENTE:*
Camila Rojas

*📦 PEDIDO:*
1. Hot Roll Salmón x2
   🧂 Salsas: Soya
   ➕ Extras: Aguacate Extra, Hojuelas Tempura
   📝 Instrucciones: Bien crujiente
   💰 $5990 c/u = $11980

2. Gyozas de cerdo x1
   💰 $3900 c/u = $3900


*🧂 SALSAS PRINCIPALES:*
Hot Roll Salmón: Salsa Agridulce

*🧂 SALSAS ADICIONALES:*
Acevichada x2 = $1400

*📝 OBSERVACIONES DEL CLIENTE:*
Dejar en conserjería

*💰 RESUMEN:*
Subtotal: $15880

*🚚 ENTREGA:*
Tipo: Despacho a domicilio
Dirección: Los Aromos 123, Ñuñoa
Costo de despacho: $3.000

*💳 PAGO:*
Transferencia

*✅ TOTAL: $20280*

_Gracias por tu pedido_ 🎉";
    assert_eq!(message, expected);
}

#[test]
fn empty_cart_message_has_notice_and_no_items() {
    let cart = Cart::new();
    let state = CheckoutState::for_cart(&cart);
    let message = format_order_message(&cart.items, &state.context(&cart.sauces), 0.0);
    assert!(message.contains("Carrito vacío"));
    assert!(!message.contains("1. "));
    assert!(!message.contains("c/u"));
}

#[test]
fn total_line_matches_context_total() {
    let cart = sample_cart();
    for total in [0.0, 1.49, 1.5, 20_280.0, 99_999.5] {
        let mut context = CheckoutState::for_cart(&cart).context(&cart.sauces);
        context.total = total;
        let message = format_order_message(&cart.items, &context, cart.subtotal());
        let lines: Vec<&str> = message.lines().filter(|l| l.contains("TOTAL:")).collect();
        assert_eq!(lines.len(), 1);
        let rendered = speedroll_checkout::numbers::round_half_up(total);
        assert_eq!(lines[0], format!("*✅ TOTAL: ${rendered}*"));
    }
}

#[test]
fn session_rejections_do_not_touch_the_cart() {
    let opened = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&opened);
    let launcher = move |url: &str| sink.borrow_mut().push(url.to_string());
    let mut session = CheckoutSession::new(sample_cart(), launcher, CheckoutConfig::default());

    assert_eq!(session.submit(), Err(CheckoutError::MissingName));
    assert_eq!(session.submit(), Err(CheckoutError::MissingName));
    assert_eq!(session.cart(), &sample_cart());

    session.with_state_mut(|state| state.full_name = "Camila".to_string());
    session.select_delivery(DeliveryType::Delivery);
    assert_eq!(session.submit(), Err(CheckoutError::MissingAddress));
    assert_eq!(session.cart(), &sample_cart());
    assert!(opened.borrow().is_empty());

    session.with_state_mut(|state| state.delivery_address = "Los Aromos 123".to_string());
    let receipt = session.submit().expect("accepted");
    assert_eq!(opened.borrow().len(), 1);
    assert_eq!(opened.borrow()[0], receipt.link);
    assert!(session.cart().is_empty());
    assert_eq!(session.state().delivery_type, DeliveryType::Pickup);
}

#[test]
fn toggling_twice_restores_delivery_total() {
    let cart = sample_cart();
    let mut state = CheckoutState::for_cart(&cart);
    state.select_delivery(DeliveryType::Delivery, &cart);
    let original = state.total;
    for _ in 0..2 {
        state.select_delivery(DeliveryType::Pickup, &cart);
        assert!((original - state.total - DELIVERY_COST).abs() < f64::EPSILON);
        state.select_delivery(DeliveryType::Delivery, &cart);
    }
    assert!((state.total - original).abs() < f64::EPSILON);
}

#[test]
fn link_embeds_encoded_message() {
    let link = build_message_link("Pedido #1", Some("+56 9 2192 2139"));
    assert_eq!(link, "https://wa.me/56921922139?text=Pedido%20%231");
}
