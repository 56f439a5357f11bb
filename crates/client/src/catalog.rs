//! Catalog fetcher: the "popular products" sample shown on the home page.

use std::sync::{Arc, Mutex};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use storefront_products::Product;

use crate::api::StorefrontApi;

/// Chooses which products to feature.
pub trait ProductSampler: Send + Sync {
    /// Return at most `count` products drawn from `products`.
    fn sample(&self, products: Vec<Product>, count: usize) -> Vec<Product>;
}

/// Uniform random sample (shuffle, then keep the first `count`).
#[derive(Debug)]
pub struct RandomSampler {
    rng: Mutex<StdRng>,
}

impl RandomSampler {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sampling.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductSampler for RandomSampler {
    fn sample(&self, mut products: Vec<Product>, count: usize) -> Vec<Product> {
        match self.rng.lock() {
            Ok(mut rng) => products.shuffle(&mut *rng),
            Err(_) => tracing::warn!("sampler rng poisoned; keeping listing order"),
        }
        products.truncate(count);
        products
    }
}

/// Keeps the listing order; for callers that want a stable page.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstN;

impl ProductSampler for FirstN {
    fn sample(&self, mut products: Vec<Product>, count: usize) -> Vec<Product> {
        products.truncate(count);
        products
    }
}

/// Loads the product listing and picks the featured subset.
#[derive(Clone)]
pub struct CatalogLoader {
    api: StorefrontApi,
    sampler: Arc<dyn ProductSampler>,
    count: usize,
}

impl CatalogLoader {
    pub fn new(api: StorefrontApi, sampler: Arc<dyn ProductSampler>, count: usize) -> Self {
        Self { api, sampler, count }
    }

    /// Fetch and sample the popular products.
    ///
    /// Failures are logged and yield an empty list; there is no retry and
    /// nothing is surfaced to the user.
    pub async fn load_popular(&self) -> Vec<Product> {
        match self.api.fetch_products().await {
            Ok(products) => {
                let total = products.len();
                let popular = self.sampler.sample(products, self.count);
                tracing::info!(total, shown = popular.len(), "popular products loaded");
                popular
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch products");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductId;

    fn products(n: u64) -> Vec<Product> {
        (1..=n)
            .map(|id| Product {
                id: ProductId::new(id),
                name: format!("P{id}"),
                description: String::new(),
                amount: 100.0,
                minimum_order: 1,
                category: String::new(),
                delivery_time: String::new(),
                quantity: 0,
                finishing_options: String::new(),
                image_url: String::new(),
                image_alt_text: String::new(),
                material: String::new(),
                specifications: String::new(),
            })
            .collect()
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn random_sample_is_a_subset_of_the_requested_size() {
        let sample = RandomSampler::new().sample(products(20), 8);
        assert_eq!(sample.len(), 8);

        let mut seen = ids(&sample);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 8);
        assert!(seen.iter().all(|id| (1..=20).contains(id)));
    }

    #[test]
    fn short_listings_are_returned_whole() {
        let sample = RandomSampler::new().sample(products(3), 8);
        let mut got = ids(&sample);
        got.sort_unstable();
        assert_eq!(got, vec![1, 2, 3]);
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let a = RandomSampler::seeded(42).sample(products(30), 8);
        let b = RandomSampler::seeded(42).sample(products(30), 8);
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn first_n_keeps_listing_order() {
        assert_eq!(ids(&FirstN.sample(products(10), 3)), vec![1, 2, 3]);
    }
}
