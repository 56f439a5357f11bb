//! Quantity-based pricing.
//!
//! A product's `amount` buys exactly one minimum-order batch. Above the minimum
//! the price is linear in the per-piece rate `amount / minimum_order`; at the
//! minimum it is `amount` itself, so the boundary never shows a rounding drift.
//!
//! Everything here is total: bad quantities are clamped, never rejected.

use storefront_core::Price;

/// Per-piece rate. A zero minimum is treated as one.
pub fn unit_price(amount: f64, minimum_order: u32) -> Price {
    Price::new(amount / f64::from(minimum_order.max(1)))
}

/// Displayed price for `quantity` pieces.
///
/// `quantity > minimum_order` ⇒ `unit_price * quantity`, otherwise `amount`.
pub fn quote(amount: f64, minimum_order: u32, quantity: u32) -> Price {
    let minimum = minimum_order.max(1);
    if quantity > minimum {
        Price::new(unit_price(amount, minimum).value() * f64::from(quantity))
    } else {
        Price::new(amount)
    }
}

/// Clamp a candidate quantity into `[minimum_order, u32::MAX]`.
///
/// `None` (absent or non-numeric input) yields the minimum.
pub fn clamp_quantity(minimum_order: u32, candidate: Option<i64>) -> u32 {
    let minimum = minimum_order.max(1);
    match candidate {
        Some(value) if value >= i64::from(minimum) => u32::try_from(value).unwrap_or(u32::MAX),
        _ => minimum,
    }
}

/// Interpret free-form quantity input the way a numeric text field does:
/// leading whitespace, an optional sign, then the leading run of digits.
/// Anything unparsable clamps to the minimum.
pub fn parse_quantity(minimum_order: u32, input: &str) -> u32 {
    clamp_quantity(minimum_order, parse_leading_int(input))
}

fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // Saturate absurdly long inputs instead of failing.
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
