//! Application state shared across handlers.

use std::sync::Arc;

use wavecrest_backend::{BackendError, SupabaseClient};

use crate::cart::CartRegistry;
use crate::config::StorefrontConfig;
use crate::inquiry::InquirySubmitter;
use crate::services::ResendMailer;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// backend client, the live carts, and the inquiry workflow.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    backend: SupabaseClient,
    carts: CartRegistry,
    submitter: InquirySubmitter,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend client cannot be constructed.
    pub fn new(config: StorefrontConfig) -> Result<Self, BackendError> {
        let backend = SupabaseClient::new(&config.backend)?;
        let mailer = ResendMailer::new(
            config.resend_api_key.clone(),
            config.inquiry_from.clone(),
            config.inquiry_admin_email.clone(),
        );
        let submitter = InquirySubmitter::new(Arc::new(backend.clone()), Arc::new(mailer));

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                backend,
                carts: CartRegistry::new(),
                submitter,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the backend client.
    #[must_use]
    pub fn backend(&self) -> &SupabaseClient {
        &self.inner.backend
    }

    /// Get a reference to the cart registry.
    #[must_use]
    pub fn carts(&self) -> &CartRegistry {
        &self.inner.carts
    }

    /// Get a reference to the inquiry workflow.
    #[must_use]
    pub fn submitter(&self) -> &InquirySubmitter {
        &self.inner.submitter
    }
}
