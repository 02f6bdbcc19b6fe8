//! Preconditions checked before an order is sent.
use thiserror::Error;

use crate::cart::LineItem;
use crate::checkout::{CheckoutState, DeliveryType};

/// Reasons a submission is rejected. The message is shown to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Por favor, ingresa tu nombre completo")]
    MissingName,
    #[error("Tu carrito está vacío")]
    EmptyCart,
    #[error("Por favor, ingresa la dirección de despacho")]
    MissingAddress,
}

/// Check that the order can be submitted.
///
/// # Errors
///
/// Returns the first failing precondition: a blank customer name, an empty
/// cart, or a blank address when delivery is selected.
pub fn validate_submission(state: &CheckoutState, items: &[LineItem]) -> Result<(), CheckoutError> {
    if state.full_name.trim().is_empty() {
        return Err(CheckoutError::MissingName);
    }
    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    if state.delivery_type == DeliveryType::Delivery && state.delivery_address.trim().is_empty() {
        return Err(CheckoutError::MissingAddress);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> CheckoutState {
        CheckoutState {
            full_name: name.to_string(),
            ..CheckoutState::default()
        }
    }

    #[test]
    fn blank_name_is_rejected_first() {
        let items = [LineItem::new("Hot Roll", 1, 5990.0)];
        assert_eq!(
            validate_submission(&named("   "), &items),
            Err(CheckoutError::MissingName)
        );
        assert_eq!(
            validate_submission(&named(""), &[]),
            Err(CheckoutError::MissingName)
        );
    }

    #[test]
    fn empty_cart_is_rejected() {
        assert_eq!(
            validate_submission(&named("Camila"), &[]),
            Err(CheckoutError::EmptyCart)
        );
    }

    #[test]
    fn delivery_requires_address() {
        let items = [LineItem::new("Hot Roll", 1, 5990.0)];
        let mut state = named("Camila");
        state.delivery_type = DeliveryType::Delivery;
        state.delivery_address = "  ".to_string();
        assert_eq!(
            validate_submission(&state, &items),
            Err(CheckoutError::MissingAddress)
        );

        state.delivery_address = "Los Aromos 123".to_string();
        assert_eq!(validate_submission(&state, &items), Ok(()));
    }

    #[test]
    fn pickup_ignores_address() {
        let items = [LineItem::new("Hot Roll", 1, 5990.0)];
        assert_eq!(validate_submission(&named("Camila"), &items), Ok(()));
    }

    #[test]
    fn notices_name_the_failing_field() {
        assert_eq!(
            CheckoutError::MissingName.to_string(),
            "Por favor, ingresa tu nombre completo"
        );
        assert_eq!(CheckoutError::EmptyCart.to_string(), "Tu carrito está vacío");
        assert_eq!(
            CheckoutError::MissingAddress.to_string(),
            "Por favor, ingresa la dirección de despacho"
        );
    }
}
