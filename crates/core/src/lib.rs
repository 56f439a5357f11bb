//! `storefront-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod price;
pub mod value_object;
pub mod wire;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{OrderId, ProductId};
pub use price::{CURRENCY_SIGN, Price};
pub use value_object::ValueObject;
