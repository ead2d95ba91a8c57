//! Cart line items and the persisted snapshot shape.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::currency::PriceSet;

/// A line in a shopping cart.
///
/// Display fields (name, prices, image) are denormalized copies captured at
/// add-time; later product edits do not flow into existing cart lines.
/// Lines are unique by `product_id` and `quantity` is always at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: Uuid,
    pub name: String,
    #[serde(flatten)]
    pub prices: PriceSet,
    #[serde(default)]
    pub image_url: Option<String>,
    pub quantity: u32,
}

/// A cart line as persisted inside an inquiry's `cart_items` array.
///
/// Once an inquiry is submitted this snapshot is immutable and fully
/// decoupled from subsequent cart mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemSnapshot {
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
    #[serde(flatten)]
    pub prices: PriceSet,
}

impl From<&CartLine> for CartItemSnapshot {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product_id,
            name: line.name.clone(),
            quantity: line.quantity,
            prices: line.prices,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_snapshot_serializes_backend_shape() {
        let line = CartLine {
            product_id: Uuid::nil(),
            name: "Broadcast Headset".to_string(),
            prices: PriceSet::new(
                Decimal::from(21999),
                Decimal::from(265),
                Decimal::from(245),
            ),
            image_url: Some("https://cdn.example.com/broadcast-headset.png".to_string()),
            quantity: 2,
        };

        let snapshot = CartItemSnapshot::from(&line);
        let json = serde_json::to_value(&snapshot).unwrap();

        // Exactly the fields the `inquiries.cart_items` contract names.
        assert_eq!(json["id"], json!("00000000-0000-0000-0000-000000000000"));
        assert_eq!(json["name"], "Broadcast Headset");
        assert_eq!(json["quantity"], 2);
        assert!(json.get("price_inr").is_some());
        assert!(json.get("price_usd").is_some());
        assert!(json.get("price_eur").is_some());
        assert!(json.get("image_url").is_none());
    }
}
