//! Client-side cart persistence (JSON snapshot on disk).

use std::path::{Path, PathBuf};

use anyhow::Context;

use storefront_core::{DomainResult, ProductId};
use storefront_products::Product;
use storefront_sales::{CartItem, CartSnapshot, CartStore, InMemoryCart};

/// Load a cart from `path`. A missing file is an empty cart.
pub fn load_cart(path: &Path) -> anyhow::Result<InMemoryCart> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = ?path, "no saved cart; starting empty");
            return Ok(InMemoryCart::new());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read cart snapshot at {path:?}"));
        }
    };

    let snapshot: CartSnapshot =
        serde_json::from_str(&raw).with_context(|| format!("failed to parse cart snapshot at {path:?}"))?;
    Ok(InMemoryCart::from_snapshot(snapshot))
}

/// Write the cart to `path`, creating parent directories as needed.
pub fn save_cart(path: &Path, cart: &InMemoryCart) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create cart directory at {parent:?}"))?;
    }

    let snapshot = cart.snapshot();
    let payload = serde_json::to_string_pretty(&snapshot).context("failed to serialize cart snapshot")?;
    std::fs::write(path, payload).with_context(|| format!("failed to write cart snapshot at {path:?}"))?;
    tracing::debug!(path = ?path, lines = snapshot.items.len(), "cart saved");
    Ok(())
}

/// Default snapshot location: `{data_dir}/storefront/cart.json`.
///
/// Falls back to `~/.local/share` where the platform reports no data dir.
pub fn default_cart_path() -> anyhow::Result<PathBuf> {
    let base = match dirs::data_dir() {
        Some(dir) => dir,
        None => dirs::home_dir()
            .map(|home| home.join(".local").join("share"))
            .context("no data or home directory to keep the storefront cart in")?,
    };
    Ok(base.join("storefront").join("cart.json"))
}

/// A cart that writes its snapshot to disk after every change.
///
/// Write failures are logged; the in-memory cart stays authoritative for the
/// rest of the session.
#[derive(Debug)]
pub struct SavedCart {
    path: PathBuf,
    cart: InMemoryCart,
}

impl SavedCart {
    /// Open the cart stored at `path` (empty if nothing was saved yet).
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let cart = load_cart(&path)?;
        Ok(Self { path, cart })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        if let Err(err) = save_cart(&self.path, &self.cart) {
            tracing::warn!(path = ?self.path, error = %err, "cart change not saved");
        }
    }
}

impl CartStore for SavedCart {
    fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    fn add_item(&mut self, product: Product, quantity: u32) -> DomainResult<()> {
        self.cart.add_item(product, quantity)?;
        self.persist();
        Ok(())
    }

    fn remove_item(&mut self, id: ProductId) -> DomainResult<CartItem> {
        let removed = self.cart.remove_item(id)?;
        self.persist();
        Ok(removed)
    }

    fn update_quantity(&mut self, id: ProductId, quantity: u32) -> DomainResult<()> {
        self.cart.update_quantity(id, quantity)?;
        self.persist();
        Ok(())
    }

    fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }
}
