pub mod checkout_total;
pub mod delivery_toggle;
pub mod sauce_summary;
