//! WhatsApp compose links for the order message.
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::constants::{COMPOSE_BASE, DIRECT_CHAT_BASE};

/// Characters left unescaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a message for use as a query parameter value.
#[must_use]
pub fn encode_message(message: &str) -> String {
    utf8_percent_encode(message, URI_COMPONENT).to_string()
}

/// Keep only the ASCII digits of a phone number.
#[must_use]
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Build the link that opens the message in WhatsApp.
///
/// With a phone number the link targets that chat directly; without one the
/// user picks the recipient. A phone with no digits counts as absent.
#[must_use]
pub fn build_message_link(message: &str, phone: Option<&str>) -> String {
    let encoded = encode_message(message);
    match phone.map(phone_digits).filter(|digits| !digits.is_empty()) {
        Some(digits) => format!("{DIRECT_CHAT_BASE}{digits}?text={encoded}"),
        None => format!("{COMPOSE_BASE}?text={encoded}"),
    }
}
