//! Order summary message sent to the shop.
//!
//! The message is plain text with WhatsApp emphasis markers. Amounts are
//! rounded half up when rendered and never before.

use std::fmt;

use crate::cart::{Customizations, LineItem, SauceSelection};
use crate::checkout::{CheckoutContext, DeliveryType};
use crate::constants::{
    DELIVERY_COST_LABEL, MSG_CLOSING, MSG_CUSTOMER_HEADER, MSG_CUSTOMER_MISSING,
    MSG_DELIVERY_HEADER, MSG_DELIVERY_KIND, MSG_EMPTY_CART, MSG_EXTRA_SAUCES_HEADER,
    MSG_EXTRAS_LABEL, MSG_EXTRAS_NOTE_PREFIX, MSG_INSTRUCTIONS_LABEL, MSG_MAIN_SAUCES_HEADER,
    MSG_OBSERVATIONS_HEADER, MSG_ORDER_HEADER, MSG_PAYMENT_HEADER, MSG_PICKUP_KIND,
    MSG_SAUCES_LABEL, MSG_SUMMARY_HEADER, MSG_TITLE,
};
use crate::numbers::format_amount;

/// Borrowed view of everything that goes into one order message.
#[derive(Debug, Clone, Copy)]
pub struct OrderMessage<'a> {
    pub items: &'a [LineItem],
    pub context: &'a CheckoutContext,
    /// Items-only subtotal shown in the summary section.
    pub cart_subtotal: f64,
}

impl<'a> OrderMessage<'a> {
    #[must_use]
    pub const fn new(items: &'a [LineItem], context: &'a CheckoutContext, cart_subtotal: f64) -> Self {
        Self {
            items,
            context,
            cart_subtotal,
        }
    }

    fn write_customer(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.context.full_name.is_empty() {
            MSG_CUSTOMER_MISSING
        } else {
            self.context.full_name.as_str()
        };
        writeln!(f, "{MSG_CUSTOMER_HEADER}")?;
        writeln!(f, "{name}")?;
        writeln!(f)
    }

    fn write_items(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{MSG_ORDER_HEADER}")?;
        if self.items.is_empty() {
            return writeln!(f, "{MSG_EMPTY_CART}");
        }
        for (index, item) in self.items.iter().enumerate() {
            writeln!(f, "{}. {} x{}", index + 1, item.name, item.quantity)?;
            match (&item.customizations, &item.extras_note) {
                (Some(custom), _) => write_customizations(f, custom)?,
                (None, Some(note)) if !note.is_empty() => {
                    writeln!(f, "{MSG_EXTRAS_NOTE_PREFIX}{note}")?;
                }
                (None, _) => {}
            }
            writeln!(
                f,
                "   💰 {} c/u = {}",
                format_amount(item.unit_price),
                format_amount(item.subtotal)
            )?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_sauces(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let SauceSelection {
            product_main_sauces,
            extra_sauces,
        } = &self.context.sauces;

        if !product_main_sauces.is_empty() {
            writeln!(f)?;
            writeln!(f, "{MSG_MAIN_SAUCES_HEADER}")?;
            for choice in product_main_sauces {
                writeln!(f, "{}: {}", choice.product_name, choice.sauce_name())?;
            }
        }

        if !extra_sauces.is_empty() {
            writeln!(f)?;
            writeln!(f, "{MSG_EXTRA_SAUCES_HEADER}")?;
            for sauce in extra_sauces {
                writeln!(
                    f,
                    "{} x{} = {}",
                    sauce.label(),
                    sauce.quantity,
                    format_amount(sauce.line_total())
                )?;
            }
        }
        Ok(())
    }

    fn write_observations(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let observations = self.context.observations.trim();
        if observations.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "{MSG_OBSERVATIONS_HEADER}")?;
        writeln!(f, "{observations}")
    }

    fn write_delivery(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{MSG_DELIVERY_HEADER}")?;
        match self.context.delivery_type {
            DeliveryType::Delivery => {
                writeln!(f, "{MSG_DELIVERY_KIND}")?;
                if !self.context.delivery_address.is_empty() {
                    writeln!(f, "Dirección: {}", self.context.delivery_address)?;
                }
                writeln!(f, "Costo de despacho: {DELIVERY_COST_LABEL}")
            }
            DeliveryType::Pickup => writeln!(f, "{MSG_PICKUP_KIND}"),
        }
    }
}

fn write_customizations(f: &mut fmt::Formatter<'_>, custom: &Customizations) -> fmt::Result {
    if !custom.sauces.is_empty() {
        writeln!(f, "{MSG_SAUCES_LABEL}{}", custom.sauces.join(", "))?;
    }
    if !custom.extras.is_empty() {
        writeln!(f, "{MSG_EXTRAS_LABEL}{}", custom.extra_names().join(", "))?;
    }
    if !custom.instructions.trim().is_empty() {
        writeln!(f, "{MSG_INSTRUCTIONS_LABEL}{}", custom.instructions)?;
    }
    Ok(())
}

impl fmt::Display for OrderMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{MSG_TITLE}")?;
        writeln!(f)?;
        self.write_customer(f)?;
        self.write_items(f)?;
        self.write_sauces(f)?;
        self.write_observations(f)?;

        writeln!(f)?;
        writeln!(f, "{MSG_SUMMARY_HEADER}")?;
        writeln!(f, "Subtotal: {}", format_amount(self.cart_subtotal))?;

        self.write_delivery(f)?;

        writeln!(f)?;
        writeln!(f, "{MSG_PAYMENT_HEADER}")?;
        writeln!(f, "{}", self.context.payment_method.display_name())?;

        writeln!(f)?;
        writeln!(f, "*✅ TOTAL: {}*", format_amount(self.context.total))?;
        writeln!(f)?;
        f.write_str(MSG_CLOSING)
    }
}

/// Render the order summary for the given cart items and checkout context.
///
/// `cart_subtotal` is the items-only subtotal reported by the cart; the final
/// total line uses `context.total`.
#[must_use]
pub fn format_order_message(
    items: &[LineItem],
    context: &CheckoutContext,
    cart_subtotal: f64,
) -> String {
    OrderMessage::new(items, context, cart_subtotal).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{ExtraSauce, MainSauceChoice};
    use crate::catalog::PaymentMethod;

    fn context(total: f64) -> CheckoutContext {
        CheckoutContext {
            full_name: "Camila Rojas".to_string(),
            total,
            ..CheckoutContext::default()
        }
    }

    #[test]
    fn renders_full_pickup_message() {
        let items = [LineItem::new("Hot Roll", 2, 5990.0)];
        let message = format_order_message(&items, &context(11_980.0), 11_980.0);
        let expected = "*🍣 NUEVO PEDIDO - SPEED ROLL 🍣*\n\n\
            *👤 CLIENTE:*\nCamila Rojas\n\n\
            *📦 PEDIDO:*\n1. Hot Roll x2\n   💰 $5990 c/u = $11980\n\n\
            \n*💰 RESUMEN:*\nSubtotal: $11980\n\
            \n*🚚 ENTREGA:*\nTipo: Retiro en local\n\
            \n*💳 PAGO:*\nEfectivo\n\
            \n*✅ TOTAL: $11980*\n\n\
            _Gracias por tu pedido_ 🎉";
        assert_eq!(message, expected);
    }

    #[test]
    fn empty_cart_and_missing_name_use_placeholders() {
        let message = format_order_message(&[], &CheckoutContext::default(), 0.0);
        assert!(message.contains("*👤 CLIENTE:*\nNo especificado\n"));
        assert!(message.contains("*📦 PEDIDO:*\nCarrito vacío\n"));
        assert!(!message.contains("1. "));
    }

    #[test]
    fn customization_lines_follow_item_header() {
        let item = LineItem::new("Sake Roll", 1, 6490.0).with_customizations(Customizations {
            sauces: vec!["Soya".to_string(), "Teriyaki".to_string()],
            extras: vec!["aguacate".to_string(), "sesamo".to_string()],
            instructions: "  sin cebollín ".to_string(),
        });
        let message = format_order_message(&[item], &context(6490.0), 6490.0);
        assert!(message.contains(
            "1. Sake Roll x1\n   🧂 Salsas: Soya, Teriyaki\n   ➕ Extras: Aguacate Extra, sesamo\n   📝 Instrucciones:   sin cebollín \n   💰 $6490 c/u = $6490\n"
        ));
    }

    #[test]
    fn blank_instructions_are_skipped() {
        let item = LineItem::new("Gyozas", 1, 3900.0).with_customizations(Customizations {
            instructions: "   ".to_string(),
            ..Customizations::default()
        });
        let message = format_order_message(&[item], &context(3900.0), 3900.0);
        assert!(!message.contains("Instrucciones"));
        assert!(message.contains("1. Gyozas x1\n   💰 $3900 c/u = $3900\n"));
    }

    #[test]
    fn legacy_extras_note_renders_without_customizations() {
        let mut item = LineItem::new("Tempura Roll", 1, 5500.0);
        item.extras_note = Some("Extra palta".to_string());
        let message = format_order_message(&[item], &context(5500.0), 5500.0);
        assert!(message.contains("1. Tempura Roll x1\n   ➜ Extra palta\n"));
    }

    #[test]
    fn sauce_sections_render_only_when_present() {
        let items = [LineItem::new("Hot Roll", 1, 5990.0)];
        let mut ctx = context(7590.0);
        let bare = format_order_message(&items, &ctx, 5990.0);
        assert!(!bare.contains("SALSAS PRINCIPALES"));
        assert!(!bare.contains("SALSAS ADICIONALES"));

        ctx.sauces.product_main_sauces.push(MainSauceChoice {
            product_name: "Hot Roll".to_string(),
            sauce: "soya".to_string(),
        });
        ctx.sauces.product_main_sauces.push(MainSauceChoice {
            product_name: "Gyozas".to_string(),
            sauce: "ponzu".to_string(),
        });
        ctx.sauces.extra_sauces.push(ExtraSauce {
            id: "acevichada".to_string(),
            name: Some("Acevichada".to_string()),
            quantity: 2,
            unit_price: 800.0,
            ..ExtraSauce::default()
        });
        let message = format_order_message(&items, &ctx, 5990.0);
        assert!(message.contains(
            "\n\n*🧂 SALSAS PRINCIPALES:*\nHot Roll: Salsa Soya\nGyozas: ponzu\n"
        ));
        assert!(message.contains("\n*🧂 SALSAS ADICIONALES:*\nAcevichada x2 = $1600\n"));
        assert!(message.contains("Subtotal: $5990\n"));
        assert!(message.contains("*✅ TOTAL: $7590*"));
    }

    #[test]
    fn observations_are_trimmed_and_optional() {
        let items = [LineItem::new("Hot Roll", 1, 5990.0)];
        let mut ctx = context(5990.0);
        ctx.observations = "   ".to_string();
        assert!(!format_order_message(&items, &ctx, 5990.0).contains("OBSERVACIONES"));

        ctx.observations = "  Tocar el timbre  ".to_string();
        let message = format_order_message(&items, &ctx, 5990.0);
        assert!(message.contains("\n*📝 OBSERVACIONES DEL CLIENTE:*\nTocar el timbre\n"));
    }

    #[test]
    fn delivery_section_lists_address_and_surcharge() {
        let items = [LineItem::new("Hot Roll", 1, 5990.0)];
        let mut ctx = context(8990.0);
        ctx.delivery_type = DeliveryType::Delivery;
        ctx.delivery_address = "Los Aromos 123, Ñuñoa".to_string();
        let message = format_order_message(&items, &ctx, 5990.0);
        assert!(message.contains(
            "*🚚 ENTREGA:*\nTipo: Despacho a domicilio\nDirección: Los Aromos 123, Ñuñoa\nCosto de despacho: $3.000\n"
        ));

        ctx.delivery_address.clear();
        let message = format_order_message(&items, &ctx, 5990.0);
        assert!(!message.contains("Dirección"));
        assert!(message.contains("Costo de despacho: $3.000"));
    }

    #[test]
    fn payment_falls_back_to_raw_code() {
        let mut ctx = context(0.0);
        ctx.payment_method = PaymentMethod::from_code("cheque");
        let message = format_order_message(&[], &ctx, 0.0);
        assert!(message.contains("*💳 PAGO:*\ncheque\n"));
    }

    #[test]
    fn exactly_one_total_line_rounded_half_up() {
        let items = [LineItem::new("Hot Roll", 1, 5990.0)];
        let message = format_order_message(&items, &context(10_000.5), 5990.0);
        assert_eq!(message.matches("TOTAL:").count(), 1);
        assert!(message.contains("*✅ TOTAL: $10001*"));
    }

    #[test]
    fn item_prices_round_only_for_display() {
        let mut item = LineItem::new("Nigiri", 3, 1333.4);
        item.subtotal = 4000.2;
        let items = [item];
        let message = format_order_message(&items, &context(4000.2), items[0].subtotal);
        assert!(message.contains("   💰 $1333 c/u = $4000\n"));
        assert!((items[0].subtotal - 4000.2).abs() < f64::EPSILON);
    }
}
