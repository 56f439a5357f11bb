//! Product-selection state machine (the product-detail sidebar).
//!
//! ```text
//!   Closed ──select(p)──▶ Open { p, q = p.min, price = p.amount }
//!   Open   ──select(p')─▶ Open { p', q = p'.min, price = p'.amount }
//!   Open   ──increment / decrement / set_quantity──▶ Open (price requoted)
//!   Open   ──close / confirm──▶ Closed
//! ```
//!
//! The selection lives inside the `Open` variant, so closing the sidebar
//! discards it and a later reopen always starts from a fresh product.

use thiserror::Error;

use storefront_core::Price;

use crate::pricing;
use crate::product::Product;

/// Why a selection could not be committed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no product selected")]
    NothingSelected,

    #[error("Minimum order is {minimum_order} pieces")]
    BelowMinimum { minimum_order: u32 },
}

/// The product currently being configured, with its quantity and derived price.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    product: Product,
    quantity: u32,
    price: Price,
}

impl Selection {
    fn new(product: Product) -> Self {
        let quantity = product.effective_minimum();
        let price = product.base_price();
        Self {
            product,
            quantity,
            price,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Displayed price for the current quantity.
    pub fn price(&self) -> Price {
        self.price
    }

    pub fn minimum_order(&self) -> u32 {
        self.product.effective_minimum()
    }

    /// Whether the "−" control is enabled.
    pub fn can_decrement(&self) -> bool {
        self.quantity > self.minimum_order()
    }

    /// Consume the selection, yielding the product and committed quantity.
    pub fn into_parts(self) -> (Product, u32) {
        (self.product, self.quantity)
    }

    fn requote(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.price = self.product.price_for(quantity);
    }
}

/// Sidebar state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Closed,
    Open(Selection),
}

/// Owner of the sidebar state; every user interaction maps to one method.
#[derive(Debug, Clone, Default)]
pub struct ProductSelection {
    state: SelectionState,
}

impl ProductSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SelectionState::Open(_))
    }

    pub fn current(&self) -> Option<&Selection> {
        match &self.state {
            SelectionState::Open(selection) => Some(selection),
            SelectionState::Closed => None,
        }
    }

    /// Open the sidebar on `product`, resetting quantity and price.
    ///
    /// Nothing carries over from a previously selected product.
    pub fn select(&mut self, product: Product) {
        tracing::debug!(product_id = %product.id, "product selected");
        self.state = SelectionState::Open(Selection::new(product));
    }

    /// Add one minimum-order batch. No-op while closed.
    pub fn increment(&mut self) {
        if let SelectionState::Open(selection) = &mut self.state {
            let next = selection.quantity.saturating_add(selection.minimum_order());
            selection.requote(next);
        }
    }

    /// Remove one minimum-order batch.
    ///
    /// Returns `false` (and changes nothing) at the minimum or while closed.
    pub fn decrement(&mut self) -> bool {
        match &mut self.state {
            SelectionState::Open(selection) if selection.can_decrement() => {
                let next = selection.quantity - selection.minimum_order();
                selection.requote(next);
                true
            }
            _ => false,
        }
    }

    /// Set the quantity from a numeric value; values under the minimum
    /// (and `None`) clamp to the minimum.
    pub fn set_quantity(&mut self, value: Option<i64>) {
        if let SelectionState::Open(selection) = &mut self.state {
            let quantity = pricing::clamp_quantity(selection.minimum_order(), value);
            selection.requote(quantity);
        }
    }

    /// Set the quantity from raw text-field input.
    pub fn set_quantity_input(&mut self, input: &str) {
        if let SelectionState::Open(selection) = &mut self.state {
            let quantity = pricing::parse_quantity(selection.minimum_order(), input);
            selection.requote(quantity);
        }
    }

    /// Reopen the sidebar on a selection handed back by [`confirm`](Self::confirm)
    /// when the commit could not be completed downstream.
    pub fn restore(&mut self, selection: Selection) {
        self.state = SelectionState::Open(selection);
    }

    /// Hide the sidebar and drop the selection.
    pub fn close(&mut self) {
        self.state = SelectionState::Closed;
    }

    /// Commit the selection (add-to-cart).
    ///
    /// On success the sidebar closes and the committed selection is returned.
    /// On failure the state is left untouched.
    pub fn confirm(&mut self) -> Result<Selection, SelectionError> {
        let selection = self.current().ok_or(SelectionError::NothingSelected)?;
        if selection.quantity < selection.minimum_order() {
            return Err(SelectionError::BelowMinimum {
                minimum_order: selection.minimum_order(),
            });
        }

        match std::mem::take(&mut self.state) {
            SelectionState::Open(selection) => Ok(selection),
            SelectionState::Closed => Err(SelectionError::NothingSelected),
        }
    }
}
