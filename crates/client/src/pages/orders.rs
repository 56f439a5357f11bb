//! Orders page: the signed-in user's order history.

use chrono::Utc;

use storefront_auth::{AuthError, AuthGuard};
use storefront_sales::Order;

use crate::api::{ApiError, StorefrontApi};
use crate::notify::{Notification, Notifier};
use crate::task::LoadTask;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load orders";
pub const EMPTY_MESSAGE: &str = "No orders found";
pub const TITLE: &str = "Your Orders";

pub struct OrdersPage {
    orders: Vec<Order>,
    loading: bool,
    cancelled: bool,
    refused: Option<AuthError>,
    load: Option<LoadTask<Result<Vec<Order>, ApiError>>>,
}

impl OrdersPage {
    /// Mount the page behind the auth guard.
    ///
    /// Without a usable session nothing is fetched and the page stays empty.
    /// Must be called from within a tokio runtime.
    pub fn mount(api: StorefrontApi, guard: &AuthGuard<'_>) -> Self {
        let session = match guard.require(Utc::now()) {
            Ok(session) => session,
            Err(err) => {
                tracing::info!(reason = %err, "orders page refused");
                return Self {
                    orders: Vec::new(),
                    loading: false,
                    cancelled: false,
                    refused: Some(err),
                    load: None,
                };
            }
        };

        let load = LoadTask::spawn(async move { api.fetch_orders(&session).await });
        Self {
            orders: Vec::new(),
            loading: true,
            cancelled: false,
            refused: None,
            load: Some(load),
        }
    }

    /// Wait for the order fetch and apply its result.
    ///
    /// A failed fetch raises the load-failure notification and leaves the
    /// list empty.
    pub async fn settle(&mut self, notifier: &dyn Notifier) {
        let Some(mut load) = self.load.take() else {
            return;
        };

        let outcome = load.join().await.unwrap_or(Err(ApiError::Cancelled));
        match outcome {
            Ok(orders) => {
                tracing::info!(count = orders.len(), "orders loaded");
                self.orders = orders;
            }
            Err(ApiError::Cancelled) => {
                tracing::debug!("order load cancelled");
                self.cancelled = true;
            }
            Err(err) => {
                tracing::warn!(error = %err, "order load failed");
                self.orders.clear();
                notifier.notify(Notification::error(LOAD_FAILED_MESSAGE));
            }
        }
        self.loading = false;
    }

    /// Abort the fetch without tearing the page down.
    pub fn cancel(&self) {
        if let Some(load) = &self.load {
            load.cancel();
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True if the fetch was aborted before it produced a result.
    pub fn was_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Why the guard refused the page, if it did.
    pub fn refused(&self) -> Option<&AuthError> {
        self.refused.as_ref()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Text content of the page, one line per element.
    ///
    /// Refused and cancelled pages render nothing; a loading page renders
    /// only the loading marker.
    pub fn render(&self) -> Vec<String> {
        if self.refused.is_some() || self.cancelled {
            return Vec::new();
        }
        if self.loading {
            return vec!["Loading...".to_string()];
        }

        let mut lines = vec![TITLE.to_string()];
        if self.orders.is_empty() {
            lines.push(EMPTY_MESSAGE.to_string());
        } else {
            lines.extend(
                self.orders
                    .iter()
                    .map(|order| format!("{} [{}]", order.heading(), order.status)),
            );
        }
        lines
    }
}
