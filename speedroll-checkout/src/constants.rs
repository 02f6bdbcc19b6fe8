//! Centralized pricing and message constants for the Speed Roll checkout.
//!
//! The delivery surcharge and the message literals live here so that the
//! order summary can only change through reviewed code.

// Pricing ------------------------------------------------------------------
/// Flat surcharge added to the order total when delivery is selected.
pub const DELIVERY_COST: f64 = 3000.0;
/// Rendered form of [`DELIVERY_COST`] used in the delivery section.
pub(crate) const DELIVERY_COST_LABEL: &str = "$3.000";

// Submission ---------------------------------------------------------------
pub(crate) const DEFAULT_BUSINESS_PHONE: &str = "+56921922139";
pub(crate) const DEFAULT_CONFIRMATION_DELAY_MS: u32 = 500;

// Message links ------------------------------------------------------------
pub(crate) const DIRECT_CHAT_BASE: &str = "https://wa.me/";
pub(crate) const COMPOSE_BASE: &str = "https://web.whatsapp.com/send";

// Message sections ---------------------------------------------------------
pub(crate) const MSG_TITLE: &str = "*🍣 NUEVO PEDIDO - SPEED ROLL 🍣*";
pub(crate) const MSG_CUSTOMER_HEADER: &str = "*👤 CLIENTE:*";
pub(crate) const MSG_CUSTOMER_MISSING: &str = "No especificado";
pub(crate) const MSG_ORDER_HEADER: &str = "*📦 PEDIDO:*";
pub const MSG_EMPTY_CART: &str = "Carrito vacío";
pub(crate) const MSG_SAUCES_LABEL: &str = "   🧂 Salsas: ";
pub(crate) const MSG_EXTRAS_LABEL: &str = "   ➕ Extras: ";
pub(crate) const MSG_INSTRUCTIONS_LABEL: &str = "   📝 Instrucciones: ";
pub(crate) const MSG_EXTRAS_NOTE_PREFIX: &str = "   ➜ ";
pub(crate) const MSG_MAIN_SAUCES_HEADER: &str = "*🧂 SALSAS PRINCIPALES:*";
pub(crate) const MSG_EXTRA_SAUCES_HEADER: &str = "*🧂 SALSAS ADICIONALES:*";
pub(crate) const MSG_OBSERVATIONS_HEADER: &str = "*📝 OBSERVACIONES DEL CLIENTE:*";
pub(crate) const MSG_SUMMARY_HEADER: &str = "*💰 RESUMEN:*";
pub(crate) const MSG_DELIVERY_HEADER: &str = "*🚚 ENTREGA:*";
pub(crate) const MSG_DELIVERY_KIND: &str = "Tipo: Despacho a domicilio";
pub(crate) const MSG_PICKUP_KIND: &str = "Tipo: Retiro en local";
pub(crate) const MSG_PAYMENT_HEADER: &str = "*💳 PAGO:*";
pub(crate) const MSG_CLOSING: &str = "_Gracias por tu pedido_ 🎉";

// Sauce panel --------------------------------------------------------------
pub const MSG_NO_SAUCES: &str = "No hay salsas seleccionadas";
