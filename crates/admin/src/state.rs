//! Application state shared across handlers.

use std::sync::Arc;

use wavecrest_backend::{BackendError, SupabaseClient};

use crate::config::AdminConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    backend: SupabaseClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend client cannot be constructed.
    pub fn new(config: AdminConfig) -> Result<Self, BackendError> {
        let backend = SupabaseClient::new(&config.backend)?;
        Ok(Self {
            inner: Arc::new(AppStateInner { config, backend }),
        })
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the backend client.
    #[must_use]
    pub fn backend(&self) -> &SupabaseClient {
        &self.inner.backend
    }
}
