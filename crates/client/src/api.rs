//! HTTP bindings for the storefront REST API.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use storefront_auth::Session;
use storefront_products::Product;
use storefront_sales::Order;

use crate::config::StorefrontConfig;

pub const PRODUCTS_PATH: &str = "/api/products";
pub const ORDERS_PATH: &str = "/api/orders";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("request cancelled")]
    Cancelled,
}

/// Envelope of the product-listing response.
#[derive(Debug, Deserialize)]
struct ProductListing {
    data: Vec<Product>,
}

/// Client for the storefront API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct StorefrontApi {
    api_url: String,
    http: reqwest::Client,
}

impl StorefrontApi {
    pub fn new(config: &StorefrontConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// `GET /api/products`, unwrapping the `data` envelope.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}{}", self.api_url, PRODUCTS_PATH);
        let listing: ProductListing = self.get_json(self.http.get(&url)).await?;
        tracing::debug!(count = listing.data.len(), "products fetched");
        Ok(listing.data)
    }

    /// `GET /api/orders` for the session's user.
    pub async fn fetch_orders(&self, session: &Session) -> Result<Vec<Order>, ApiError> {
        let url = format!("{}{}", self.api_url, ORDERS_PATH);
        let mut req = self.http.get(&url);

        if let Some(token) = &session.access_token {
            req = req.bearer_auth(token);
        }

        let orders: Vec<Order> = self.get_json(req).await?;
        tracing::debug!(count = orders.len(), "orders fetched");
        Ok(orders)
    }

    async fn get_json<T>(&self, req: reqwest::RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Api(status.as_u16(), resp.text().await.unwrap_or_default()));
        }

        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}
