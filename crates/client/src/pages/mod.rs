//! Page state: what each storefront page holds between user events.
//!
//! Pages own their load task; dropping a page cancels its fetch.

pub mod home;
pub mod orders;

pub use home::HomePage;
pub use orders::OrdersPage;
