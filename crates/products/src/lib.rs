//! Products domain module.
//!
//! This crate contains the catalog record, the quantity-based pricing rules and
//! the product-selection state machine behind the product-detail sidebar,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod pricing;
pub mod product;
pub mod selection;

pub use pricing::{clamp_quantity, parse_quantity, quote, unit_price};
pub use product::Product;
pub use selection::{ProductSelection, Selection, SelectionError, SelectionState};
