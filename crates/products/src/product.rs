use serde::{Deserialize, Serialize};

use storefront_core::{Entity, Price, ProductId, wire};

use crate::pricing;

/// A catalog product as served by the product-listing endpoint.
///
/// Immutable once fetched. `amount` is the price of one minimum-order batch,
/// not of a single piece. Descriptive fields read a missing key or `null` as
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub description: String,
    pub amount: f64,
    pub minimum_order: u32,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub delivery_time: String,
    /// Stock on hand, as reported by the API.
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub finishing_options: String,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub image_alt_text: String,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub material: String,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub specifications: String,
}

impl Product {
    /// Minimum order used for arithmetic. A zero minimum from the API is
    /// treated as one piece.
    pub fn effective_minimum(&self) -> u32 {
        self.minimum_order.max(1)
    }

    /// Base price for exactly one minimum-order batch.
    pub fn base_price(&self) -> Price {
        Price::new(self.amount)
    }

    /// Price of a single piece.
    pub fn unit_price(&self) -> Price {
        pricing::unit_price(self.amount, self.minimum_order)
    }

    /// Price for `quantity` pieces (see [`pricing::quote`]).
    pub fn price_for(&self, quantity: u32) -> Price {
        pricing::quote(self.amount, self.minimum_order, quantity)
    }

    /// Caption shown under the price.
    pub fn minimum_order_caption(&self) -> String {
        format!("Minimum order: {} pieces", self.effective_minimum())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::product;
    use super::*;

    #[test]
    fn decodes_the_listing_shape() {
        let json = r#"{
            "id": 3,
            "name": "Business Cards",
            "description": "Double sided",
            "amount": 5000,
            "minimum_order": 10,
            "category": "cards",
            "delivery_time": "2 days",
            "quantity": 500,
            "finishing_options": "Gloss",
            "image_url": "/images/cards.png",
            "image_alt_text": "Cards",
            "material": "Card",
            "specifications": "3.5x2in"
        }"#;

        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, ProductId::new(3));
        assert_eq!(p.amount, 5000.0);
        assert_eq!(p.minimum_order, 10);
        assert_eq!(p.finishing_options, "Gloss");
    }

    #[test]
    fn descriptive_fields_are_optional() {
        let json = r#"{"id": 1, "name": "Flyer", "amount": 250.5, "minimum_order": 50}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.description, "");
        assert_eq!(p.quantity, 0);
    }

    #[test]
    fn null_descriptive_fields_decode_as_empty() {
        let json = r#"{
            "id": 1,
            "name": "Flyer",
            "description": null,
            "amount": 250.0,
            "minimum_order": 50,
            "quantity": null,
            "material": null,
            "image_url": null
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.description, "");
        assert_eq!(p.material, "");
        assert_eq!(p.image_url, "");
        assert_eq!(p.quantity, 0);
        assert_eq!(p.price_for(50), Price::new(250.0));
    }

    #[test]
    fn null_pricing_fields_are_rejected() {
        let json = r#"{"id": 1, "name": "Flyer", "amount": null, "minimum_order": 50}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn pricing_fields_are_required() {
        let json = r#"{"id": 1, "name": "Flyer"}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn zero_minimum_is_treated_as_one() {
        let p = product(1, 300.0, 0);
        assert_eq!(p.effective_minimum(), 1);
        assert_eq!(p.unit_price(), Price::new(300.0));
        assert_eq!(p.minimum_order_caption(), "Minimum order: 1 pieces");
    }

    #[test]
    fn entity_id_is_the_product_id() {
        let p = product(9, 100.0, 1);
        assert_eq!(Entity::id(&p), &ProductId::new(9));
    }
}
