//! Sales domain module: the client-side cart and the read-only order history
//! records.
//!
//! Deterministic domain logic only (no IO, no HTTP, no storage). Persisting a
//! cart snapshot is the client's business.

pub mod cart;
pub mod order;

pub use cart::{CartItem, CartSnapshot, CartStore, InMemoryCart};
pub use order::{Order, OrderLineItem};
