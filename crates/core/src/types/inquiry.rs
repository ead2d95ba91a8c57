//! Customer inquiry records.
//!
//! An inquiry substitutes for a checkout: a customer asks for a quote on a
//! single product or on the entire current cart. Inquiries are created by
//! the storefront, read and deleted by the admin panel, and never updated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cart::CartItemSnapshot;

/// `product_name` value marking a cart-wide inquiry.
pub const CART_ORDER_LABEL: &str = "Cart Order";

/// Contact details submitted with every inquiry.
///
/// Name, email, and phone are required; company is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub company: Option<String>,
}

/// Payload for persisting a new inquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub company: Option<String>,
    /// The product's display name, or [`CART_ORDER_LABEL`] for cart-wide
    /// inquiries.
    pub product_name: String,
    /// Set for single-product inquiries, `None` for cart-wide ones.
    #[serde(default)]
    pub product_id: Option<Uuid>,
    /// Snapshot of the cart at submission time; empty for single-product
    /// inquiries.
    #[serde(default)]
    pub cart_items: Vec<CartItemSnapshot>,
}

/// A persisted inquiry as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub company: Option<String>,
    pub product_name: String,
    #[serde(default)]
    pub product_id: Option<Uuid>,
    #[serde(default)]
    pub cart_items: Vec<CartItemSnapshot>,
    pub created_at: DateTime<Utc>,
}

impl Inquiry {
    /// Whether this inquiry covers an entire cart rather than one product.
    #[must_use]
    pub fn is_cart_order(&self) -> bool {
        self.product_id.is_none() && self.product_name == CART_ORDER_LABEL
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_inquiry_serializes_optional_fields() {
        let inquiry = NewInquiry {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            company: None,
            product_name: "Reference Earbuds".to_string(),
            product_id: Some(Uuid::nil()),
            cart_items: Vec::new(),
        };

        let json = serde_json::to_value(&inquiry).unwrap();
        assert_eq!(json["product_name"], "Reference Earbuds");
        assert_eq!(json["company"], serde_json::Value::Null);
        assert_eq!(json["cart_items"], serde_json::json!([]));
    }

    #[test]
    fn test_is_cart_order() {
        let row = serde_json::json!({
            "id": "d290f1ee-6c54-4b01-90e6-d701748f0851",
            "name": "Asha Rao",
            "email": "asha@example.com",
            "phone": "+91 98765 43210",
            "company": "Rao Exports",
            "product_name": CART_ORDER_LABEL,
            "product_id": null,
            "cart_items": [],
            "created_at": "2026-02-01T12:00:00Z"
        });

        let inquiry: Inquiry = serde_json::from_value(row).unwrap();
        assert!(inquiry.is_cart_order());
    }
}
