//! Admin write operations over products and categories.
//!
//! These are direct passthrough writes; the admin panel submits complete
//! records (no partial patches) and the backend enforces uniqueness of
//! slugs and referential policy for category deletion.

use tracing::instrument;
use uuid::Uuid;

use wavecrest_core::{Category, CategoryInput, Product, ProductInput};

use crate::client::SupabaseClient;
use crate::error::BackendError;

impl SupabaseClient {
    /// Create a product and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write (e.g. duplicate
    /// slug) or the request fails.
    #[instrument(skip(self, input), fields(slug = %input.slug))]
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, BackendError> {
        self.insert("products", input).await
    }

    /// Overwrite a product with a complete record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write or the request
    /// fails.
    #[instrument(skip(self, input), fields(slug = %input.slug))]
    pub async fn update_product(
        &self,
        id: Uuid,
        input: &ProductInput,
    ) -> Result<(), BackendError> {
        self.update("products", &id.to_string(), input).await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> Result<(), BackendError> {
        self.delete("products", &id.to_string()).await
    }

    /// Create a category and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write or the request
    /// fails.
    #[instrument(skip(self, input), fields(slug = %input.slug))]
    pub async fn create_category(&self, input: &CategoryInput) -> Result<Category, BackendError> {
        self.insert("categories", input).await
    }

    /// Delete a category. Products referencing it are subject to the
    /// backend's referential policy; no cascade is attempted here.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: Uuid) -> Result<(), BackendError> {
        self.delete("categories", &id.to_string()).await
    }
}
