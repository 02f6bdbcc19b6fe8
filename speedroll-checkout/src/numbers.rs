//! Numeric helpers for rendering currency amounts.

use num_traits::cast::cast;

/// Round half up to the nearest whole unit, keeping the value as f64.
///
/// Non-finite values become 0. Halves always round toward positive infinity,
/// so `2.5` becomes `3` and `-2.5` becomes `-2`. The fraction is compared
/// against the floor instead of adding 0.5 first, which would itself round.
#[must_use]
pub fn round_half_up_f64(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    // Normalizes -0.0 so it never renders as "-0".
    rounded + 0.0
}

/// Round half up to a whole unit, saturating at the i64 bounds.
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    let rounded = round_half_up_f64(value);
    cast::<f64, i64>(rounded).unwrap_or(if rounded < 0.0 { i64::MIN } else { i64::MAX })
}

/// Render an amount as `$N` with no grouping separators.
#[must_use]
pub fn format_amount(value: f64) -> String {
    format!("${:.0}", round_half_up_f64(value))
}

/// Convert a quantity to f64 for price math.
#[must_use]
pub fn qty_to_f64(quantity: u32) -> f64 {
    f64::from(quantity)
}
