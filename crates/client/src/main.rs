//! `storefront` — headless storefront session.
//!
//! Loads the home page and prints the featured products plus any saved cart;
//! when a session token is configured, also loads the orders page.

use std::sync::Arc;

use anyhow::Context;

use storefront_auth::{AuthGuard, Session, StaticSession};
use storefront_client::{
    CatalogLoader, HomePage, OrdersPage, RandomSampler, SavedCart, StorefrontApi, StorefrontConfig, TracingNotifier,
    checkout, persist,
};
use storefront_sales::CartStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = StorefrontConfig::from_env().context("invalid storefront configuration")?;
    tracing::info!(api_url = %config.api_url, "starting storefront session");

    let api = StorefrontApi::new(&config).context("failed to build HTTP client")?;
    let notifier = TracingNotifier;

    let loader = CatalogLoader::new(api.clone(), Arc::new(RandomSampler::new()), config.popular_count);
    let mut home = HomePage::mount(loader, config.whatsapp_number.clone());
    home.settle().await;

    println!("Popular Products");
    if home.popular_products().is_empty() {
        println!("  (none)");
    }
    for product in home.popular_products() {
        println!("  {} - {}", product.name, product.base_price());
        println!("    {}", product.minimum_order_caption());
        match checkout::whatsapp_link(&config.whatsapp_number, product) {
            Ok(link) => println!("    Order via WhatsApp: {link}"),
            Err(err) => tracing::warn!(error = %err, "could not build WhatsApp link"),
        }
    }

    let cart = SavedCart::open(persist::default_cart_path()?)?;
    if !cart.is_empty() {
        println!();
        println!(
            "Cart: {} pieces, subtotal {}",
            cart.item_count(),
            cart.subtotal().with_currency()
        );
    }

    let provider = match &config.auth_token {
        Some(token) => StaticSession::signed_in(Session::with_token(token.clone())),
        None => StaticSession::signed_out(),
    };
    let guard = AuthGuard::new(&provider);

    let mut orders = OrdersPage::mount(api, &guard);
    if let Some(reason) = orders.refused() {
        tracing::info!(%reason, "skipping orders page");
        return Ok(());
    }

    orders.settle(&notifier).await;
    println!();
    for line in orders.render() {
        println!("{line}");
    }

    Ok(())
}
