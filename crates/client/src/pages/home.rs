//! Home page: popular-products carousel plus the product-detail sidebar.

use url::Url;

use storefront_core::{Price, ProductId};
use storefront_products::{Product, ProductSelection, SelectionError};
use storefront_sales::CartStore;

use crate::catalog::CatalogLoader;
use crate::checkout;
use crate::notify::{Notification, Notifier};
use crate::task::LoadTask;

pub struct HomePage {
    popular: Vec<Product>,
    loading: bool,
    selection: ProductSelection,
    whatsapp_number: String,
    load: LoadTask<Vec<Product>>,
}

impl HomePage {
    /// Mount the page and start loading popular products.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(loader: CatalogLoader, whatsapp_number: impl Into<String>) -> Self {
        let load = LoadTask::spawn(async move { loader.load_popular().await });
        Self {
            popular: Vec::new(),
            loading: true,
            selection: ProductSelection::new(),
            whatsapp_number: whatsapp_number.into(),
            load,
        }
    }

    /// Wait for the product load and apply its result.
    pub async fn settle(&mut self) {
        if let Some(products) = self.load.join().await {
            self.popular = products;
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn popular_products(&self) -> &[Product] {
        &self.popular
    }

    pub fn selection(&self) -> &ProductSelection {
        &self.selection
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.selection.is_open()
    }

    /// "See More" on a carousel card. Returns `false` for an id that is not
    /// on the page.
    pub fn select_product(&mut self, id: ProductId) -> bool {
        match self.popular.iter().find(|p| p.id == id) {
            Some(product) => {
                self.selection.select(product.clone());
                true
            }
            None => false,
        }
    }

    pub fn increment_quantity(&mut self) {
        self.selection.increment();
    }

    pub fn decrement_quantity(&mut self) -> bool {
        self.selection.decrement()
    }

    pub fn set_quantity_input(&mut self, input: &str) {
        self.selection.set_quantity_input(input);
    }

    pub fn close_sidebar(&mut self) {
        self.selection.close();
    }

    /// Price shown in the sidebar's pricing box.
    pub fn displayed_price(&self) -> Option<Price> {
        self.selection.current().map(|s| s.price())
    }

    /// "Order via WhatsApp" link for the selected product.
    pub fn whatsapp_link(&self) -> Option<Url> {
        let selection = self.selection.current()?;
        match checkout::whatsapp_link(&self.whatsapp_number, selection.product()) {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::warn!(error = %err, number = %self.whatsapp_number, "invalid WhatsApp number");
                None
            }
        }
    }

    /// "Add to Cart": commit the selection into `cart` and close the sidebar.
    ///
    /// Validation failures are reported through `notifier` and leave the page
    /// unchanged. Returns whether a line was added.
    pub fn add_to_cart(&mut self, cart: &mut dyn CartStore, notifier: &dyn Notifier) -> bool {
        let committed = match self.selection.confirm() {
            Ok(selection) => selection,
            Err(SelectionError::NothingSelected) => return false,
            Err(err) => {
                notifier.notify(Notification::error(err.to_string()));
                return false;
            }
        };

        if let Err(err) = cart.add_item(committed.product().clone(), committed.quantity()) {
            notifier.notify(Notification::error(err.to_string()));
            self.selection.restore(committed);
            return false;
        }

        tracing::info!(
            product_id = %committed.product().id,
            quantity = committed.quantity(),
            "added to cart"
        );
        notifier.notify(Notification::success("Added to cart"));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MemoryNotifier;
    use storefront_core::DomainResult;
    use storefront_sales::{CartItem, InMemoryCart};

    fn product(id: u64, amount: f64, minimum_order: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            amount,
            minimum_order,
            category: String::new(),
            delivery_time: String::new(),
            quantity: 0,
            finishing_options: String::new(),
            image_url: String::new(),
            image_alt_text: String::new(),
            material: String::new(),
            specifications: String::new(),
        }
    }

    /// A page already settled on `products`, with no load in flight.
    fn settled_page(products: Vec<Product>) -> HomePage {
        HomePage {
            popular: products,
            loading: false,
            selection: ProductSelection::new(),
            whatsapp_number: "+2348166411702".to_string(),
            load: LoadTask::idle(),
        }
    }

    /// A cart that refuses everything.
    struct FullCart;

    impl CartStore for FullCart {
        fn items(&self) -> &[CartItem] {
            &[]
        }
        fn add_item(&mut self, _product: Product, _quantity: u32) -> DomainResult<()> {
            Err(storefront_core::DomainError::validation("cart is full"))
        }
        fn remove_item(&mut self, _id: ProductId) -> DomainResult<CartItem> {
            Err(storefront_core::DomainError::NotFound)
        }
        fn update_quantity(&mut self, _id: ProductId, _quantity: u32) -> DomainResult<()> {
            Err(storefront_core::DomainError::NotFound)
        }
        fn clear(&mut self) {}
    }

    #[test]
    fn selecting_a_card_opens_the_sidebar() {
        let mut page = settled_page(vec![product(1, 5000.0, 10)]);
        assert!(page.select_product(ProductId::new(1)));
        assert!(page.is_sidebar_open());
        assert_eq!(page.displayed_price(), Some(Price::new(5000.0)));
    }

    #[test]
    fn unknown_product_is_ignored() {
        let mut page = settled_page(vec![product(1, 5000.0, 10)]);
        assert!(!page.select_product(ProductId::new(99)));
        assert!(!page.is_sidebar_open());
    }

    #[test]
    fn quantity_controls_requote() {
        let mut page = settled_page(vec![product(1, 5000.0, 10)]);
        page.select_product(ProductId::new(1));

        page.increment_quantity();
        assert_eq!(page.displayed_price(), Some(Price::new(10000.0)));

        page.set_quantity_input("3");
        assert_eq!(page.displayed_price(), Some(Price::new(5000.0)));
        assert!(!page.decrement_quantity());
    }

    #[test]
    fn add_to_cart_commits_notifies_and_closes() {
        let mut page = settled_page(vec![product(1, 5000.0, 10)]);
        let mut cart = InMemoryCart::new();
        let notifier = MemoryNotifier::new();

        page.select_product(ProductId::new(1));
        page.increment_quantity();
        assert!(page.add_to_cart(&mut cart, &notifier));

        assert!(!page.is_sidebar_open());
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity(), 20);
        assert_eq!(notifier.notifications(), vec![Notification::success("Added to cart")]);
    }

    #[test]
    fn add_to_cart_without_selection_does_nothing() {
        let mut page = settled_page(vec![product(1, 5000.0, 10)]);
        let mut cart = InMemoryCart::new();
        let notifier = MemoryNotifier::new();

        assert!(!page.add_to_cart(&mut cart, &notifier));
        assert!(cart.is_empty());
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn rejected_add_keeps_the_sidebar_open() {
        let mut page = settled_page(vec![product(1, 5000.0, 10)]);
        let notifier = MemoryNotifier::new();

        page.select_product(ProductId::new(1));
        page.increment_quantity();
        assert!(!page.add_to_cart(&mut FullCart, &notifier));

        assert!(page.is_sidebar_open());
        assert_eq!(page.selection().current().unwrap().quantity(), 20);
        assert_eq!(notifier.notifications(), vec![Notification::error("cart is full")]);
    }

    #[test]
    fn whatsapp_link_follows_the_selection() {
        let mut page = settled_page(vec![product(1, 5000.0, 10)]);
        assert!(page.whatsapp_link().is_none());

        page.select_product(ProductId::new(1));
        let url = page.whatsapp_link().unwrap();
        assert_eq!(url.path(), "/+2348166411702");

        page.close_sidebar();
        assert!(page.whatsapp_link().is_none());
    }
}
