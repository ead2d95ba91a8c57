//! Product and category records.
//!
//! These mirror the backend's `products` and `categories` tables; products
//! are created and edited only through the admin panel and read everywhere
//! else.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::currency::PriceSet;

/// A catalog product as stored in the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// URL-safe unique identifier used for detail-page lookups.
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub prices: PriceSet,
    #[serde(default)]
    pub image_url: Option<String>,
    /// `None` means stock is untracked; the quantity is informational only
    /// and never caps cart quantities.
    #[serde(default)]
    pub stock_quantity: Option<i32>,
    /// Free-form specification map (e.g. "Battery life" -> "8 hours").
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
    #[serde(default)]
    pub is_featured: bool,
    /// Disables add-to-cart and buy actions regardless of stock quantity.
    #[serde(default)]
    pub is_sold_out: bool,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub sku: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Full-record payload for creating or updating a product.
///
/// Product edits submit the complete record; there are no partial-field
/// patch semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub prices: PriceSet,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub stock_quantity: Option<i32>,
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_sold_out: bool,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub sku: Option<String>,
}

/// A product category.
///
/// Products reference categories optionally; deleting a category does not
/// cascade here - referential behavior is the backend's policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload for creating a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}
