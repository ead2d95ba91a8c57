//! Read-only catalog queries.
//!
//! Each operation translates directly to one backend query - no local
//! caching, no pagination beyond the two fixed result caps. A failed read
//! is the caller's to handle; the storefront logs it and falls back to an
//! empty result set rather than failing the page.

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use wavecrest_core::{Category, Product};

use crate::client::SupabaseClient;
use crate::error::BackendError;

/// Fixed result cap for the dedicated search flow.
pub const SEARCH_RESULT_CAP: u32 = 20;

/// Read-only access to products and categories.
///
/// The hosted backend implements this against its query API; tests use an
/// in-memory fixture.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Featured products, newest first, capped at `limit`.
    async fn list_featured(&self, limit: u32) -> Result<Vec<Product>, BackendError>;

    /// All products, newest first, optionally narrowed to a category and/or
    /// a case-insensitive name substring. Uncapped.
    async fn list_products(
        &self,
        category_id: Option<Uuid>,
        name_query: Option<&str>,
    ) -> Result<Vec<Product>, BackendError>;

    /// Case-insensitive name substring search, capped at
    /// [`SEARCH_RESULT_CAP`]. An empty match set is a normal outcome.
    async fn search_by_name(&self, query: &str) -> Result<Vec<Product>, BackendError>;

    /// Look up a single product by slug. `Ok(None)` is a valid "not found"
    /// outcome, not an error.
    async fn get_by_slug(&self, slug: &str) -> Result<Option<Product>, BackendError>;

    /// All categories, ordered by name.
    async fn list_categories(&self) -> Result<Vec<Category>, BackendError>;
}

/// Build the PostgREST filter list for a product listing.
fn product_filters(
    category_id: Option<Uuid>,
    name_query: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut filters = vec![("select", "*".to_string())];
    if let Some(id) = category_id {
        filters.push(("category_id", format!("eq.{id}")));
    }
    if let Some(q) = name_query {
        filters.push(("name", format!("ilike.*{q}*")));
    }
    filters.push(("order", "created_at.desc".to_string()));
    filters
}

#[async_trait]
impl Catalog for SupabaseClient {
    #[instrument(skip(self))]
    async fn list_featured(&self, limit: u32) -> Result<Vec<Product>, BackendError> {
        self.select(
            "products",
            &[
                ("select", "*".to_string()),
                ("is_featured", "eq.true".to_string()),
                ("order", "created_at.desc".to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn list_products(
        &self,
        category_id: Option<Uuid>,
        name_query: Option<&str>,
    ) -> Result<Vec<Product>, BackendError> {
        self.select("products", &product_filters(category_id, name_query))
            .await
    }

    #[instrument(skip(self))]
    async fn search_by_name(&self, query: &str) -> Result<Vec<Product>, BackendError> {
        self.select(
            "products",
            &[
                ("select", "*".to_string()),
                ("name", format!("ilike.*{query}*")),
                ("limit", SEARCH_RESULT_CAP.to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn get_by_slug(&self, slug: &str) -> Result<Option<Product>, BackendError> {
        let rows: Vec<Product> = self
            .select(
                "products",
                &[
                    ("select", "*".to_string()),
                    ("slug", format!("eq.{slug}")),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().next())
    }

    #[instrument(skip(self))]
    async fn list_categories(&self) -> Result<Vec<Category>, BackendError> {
        self.select(
            "categories",
            &[
                ("select", "*".to_string()),
                ("order", "name.asc".to_string()),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_filters_unfiltered() {
        let filters = product_filters(None, None);
        assert_eq!(
            filters,
            vec![
                ("select", "*".to_string()),
                ("order", "created_at.desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_product_filters_category_and_search_combine() {
        let id: Uuid = Uuid::nil();
        let filters = product_filters(Some(id), Some("monitor"));
        assert!(
            filters.contains(&(
                "category_id",
                "eq.00000000-0000-0000-0000-000000000000".to_string()
            ))
        );
        assert!(filters.contains(&("name", "ilike.*monitor*".to_string())));
        // Ordering is always newest-first.
        assert_eq!(
            filters.last(),
            Some(&("order", "created_at.desc".to_string()))
        );
    }

    #[test]
    fn test_search_cap_is_twenty() {
        assert_eq!(SEARCH_RESULT_CAP, 20);
    }
}
