use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use storefront_core::{Entity, OrderId, Price, wire};

/// One line of a placed order.
///
/// The order service does not publish a line schema, so lines are carried
/// as raw JSON until it does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderLineItem(pub Value);

/// A placed order as served by the order-listing endpoint. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub items: Vec<OrderLineItem>,
    pub total: Price,
    /// Free-form status label from the order service.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Card heading on the orders page.
    pub fn heading(&self) -> String {
        format!("Order #{}", self.id)
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
