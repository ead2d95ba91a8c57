//! Inquiry persistence.
//!
//! Inquiries are insert-only from the storefront and read/delete-only from
//! the admin panel; there is no update path by design.

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use wavecrest_core::{Inquiry, NewInquiry};

use crate::client::SupabaseClient;
use crate::error::BackendError;

/// Persistence operations for inquiries.
#[async_trait]
pub trait InquiryStore: Send + Sync {
    /// Persist one inquiry and return the stored record.
    async fn insert(&self, inquiry: NewInquiry) -> Result<Inquiry, BackendError>;

    /// All inquiries, newest first.
    async fn list(&self) -> Result<Vec<Inquiry>, BackendError>;

    /// Delete an inquiry. Idempotent.
    async fn delete(&self, id: Uuid) -> Result<(), BackendError>;
}

#[async_trait]
impl InquiryStore for SupabaseClient {
    #[instrument(skip(self, inquiry), fields(product_name = %inquiry.product_name))]
    async fn insert(&self, inquiry: NewInquiry) -> Result<Inquiry, BackendError> {
        SupabaseClient::insert(self, "inquiries", &inquiry).await
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Inquiry>, BackendError> {
        self.select(
            "inquiries",
            &[
                ("select", "*".to_string()),
                ("order", "created_at.desc".to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<(), BackendError> {
        SupabaseClient::delete(self, "inquiries", &id.to_string()).await
    }
}
