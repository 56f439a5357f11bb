//! `storefront-client`
//!
//! **Responsibility:** the storefront's client side, bound to a REST API owned
//! elsewhere.
//!
//! This crate provides:
//! - HTTP bindings for `/api/products` and `/api/orders`
//! - The popular-products loader (random sample, silent empty fallback)
//! - Page state for the home page (carousel + product sidebar) and the
//!   guarded orders page, with loads bound to page lifetime
//! - Notifications, WhatsApp checkout links and cart persistence
//!
//! An embedding UI hands a [`SavedCart`] to `HomePage::add_to_cart`, so every
//! committed selection is written to the cart snapshot on disk.
//!
//! The client is a **thin shell**: pricing and cart rules live in the domain
//! crates.

pub mod api;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod notify;
pub mod pages;
pub mod persist;
pub mod task;

pub use api::{ApiError, StorefrontApi};
pub use catalog::{CatalogLoader, FirstN, ProductSampler, RandomSampler};
pub use config::{ConfigError, StorefrontConfig};
pub use notify::{MemoryNotifier, Notification, NotificationLevel, Notifier, TracingNotifier};
pub use pages::{HomePage, OrdersPage};
pub use persist::SavedCart;
pub use task::LoadTask;
