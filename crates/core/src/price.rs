//! Monetary amounts and their storefront rendering.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Currency sign prepended to rendered prices (Nigerian naira).
pub const CURRENCY_SIGN: &str = "₦";

/// A price in major currency units.
///
/// Catalog amounts arrive as JSON numbers and per-unit rates are fractional
/// (`amount / minimum_order`), so the value is carried as `f64` and only
/// rounded when rendered.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0.0);

    /// Non-finite inputs collapse to zero.
    pub fn new(value: f64) -> Self {
        if value.is_finite() { Self(value) } else { Self::ZERO }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Render with comma-grouped thousands and exactly two decimals
    /// (`5000` → `5,000.00`).
    pub fn display(&self) -> String {
        format_grouped(self.0)
    }

    /// Render with the currency sign (`₦5,000.00`).
    pub fn with_currency(&self) -> String {
        format!("{CURRENCY_SIGN}{}", self.display())
    }
}

impl core::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price::new(self.0 + rhs.0)
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.with_currency())
    }
}

fn format_grouped(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // "-0.00" is never shown.
    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}
