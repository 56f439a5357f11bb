use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, Price, ProductId};
use storefront_products::Product;

/// A committed cart line: one product and how many pieces of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    product: Product,
    quantity: u32,
}

impl CartItem {
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Line price via the quantity-based pricing rules.
    pub fn line_total(&self) -> Price {
        self.product.price_for(self.quantity)
    }
}

impl Entity for CartItem {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product.id
    }
}

/// Cart operations the views depend on.
///
/// Views receive the store by reference; tests substitute their own.
pub trait CartStore {
    /// Lines in insertion order.
    fn items(&self) -> &[CartItem];

    /// Append a line, or merge into the existing line for the same product.
    ///
    /// Fails with a validation error (and no change) if `quantity` is under
    /// the product's minimum order.
    fn add_item(&mut self, product: Product, quantity: u32) -> DomainResult<()>;

    /// Delete the line for `id`, returning it.
    fn remove_item(&mut self, id: ProductId) -> DomainResult<CartItem>;

    /// Replace the quantity on the line for `id`.
    fn update_quantity(&mut self, id: ProductId, quantity: u32) -> DomainResult<()>;

    /// Remove every line.
    fn clear(&mut self);

    fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items().iter().find(|item| item.product.id == id)
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Total pieces across all lines.
    fn item_count(&self) -> u64 {
        self.items().iter().map(|item| u64::from(item.quantity)).sum()
    }

    fn subtotal(&self) -> Price {
        self.items().iter().map(CartItem::line_total).sum()
    }
}

/// Serializable cart contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
}

/// The process's cart, held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCart {
    items: Vec<CartItem>,
}

impl InMemoryCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from a snapshot, dropping lines that no longer satisfy
    /// their product's minimum order.
    pub fn from_snapshot(snapshot: CartSnapshot) -> Self {
        let mut cart = Self::new();
        for item in snapshot.items {
            let id = item.product.id;
            if let Err(err) = cart.add_item(item.product, item.quantity) {
                tracing::warn!(product_id = %id, error = %err, "dropping invalid cart line from snapshot");
            }
        }
        cart
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
        }
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.product.id == id)
    }
}

fn ensure_minimum(product: &Product, quantity: u32) -> DomainResult<()> {
    let minimum = product.effective_minimum();
    if quantity < minimum {
        return Err(DomainError::below_minimum(minimum));
    }
    Ok(())
}

impl CartStore for InMemoryCart {
    fn items(&self) -> &[CartItem] {
        &self.items
    }

    fn add_item(&mut self, product: Product, quantity: u32) -> DomainResult<()> {
        ensure_minimum(&product, quantity)?;

        match self.position(product.id) {
            Some(idx) => {
                let line = &mut self.items[idx];
                line.quantity = line.quantity.saturating_add(quantity);
                // Keep the freshest catalog data for the line.
                line.product = product;
                tracing::debug!(product_id = %line.product.id, quantity = line.quantity, "cart line merged");
            }
            None => {
                tracing::debug!(product_id = %product.id, quantity, "cart line added");
                self.items.push(CartItem { product, quantity });
            }
        }
        Ok(())
    }

    fn remove_item(&mut self, id: ProductId) -> DomainResult<CartItem> {
        let idx = self.position(id).ok_or_else(DomainError::not_found)?;
        Ok(self.items.remove(idx))
    }

    fn update_quantity(&mut self, id: ProductId, quantity: u32) -> DomainResult<()> {
        let idx = self.position(id).ok_or_else(DomainError::not_found)?;
        let line = &mut self.items[idx];
        ensure_minimum(&line.product, quantity)?;
        line.quantity = quantity;
        Ok(())
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
