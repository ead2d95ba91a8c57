//! HTTP client for the hosted backend's REST surface.
//!
//! Requests carry the service key in `apikey` and `Authorization` default
//! headers; the storefront and admin binaries share this client and trust
//! the backend to enforce authoritative access control.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::BackendError;

/// How much of an error body to keep in logs and error messages.
const ERROR_BODY_LIMIT: usize = 500;

/// Connection settings for the hosted backend.
///
/// Implements `Debug` manually to redact the service key.
#[derive(Clone)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://abc123.supabase.co`.
    pub project_url: String,
    /// Service-role key used for server-side requests.
    pub service_key: SecretString,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("project_url", &self.project_url)
            .field("service_key", &"[REDACTED]")
            .finish()
    }
}

/// Client for the hosted backend.
///
/// Cheaply cloneable; all state lives behind an `Arc`.
#[derive(Clone)]
pub struct SupabaseClient {
    inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) rest_url: String,
    pub(crate) auth_url: String,
}

impl SupabaseClient {
    /// Create a new client for the given project.
    ///
    /// # Errors
    ///
    /// Returns an error if the service key is not a valid header value or
    /// the HTTP client fails to build.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let key = config.service_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(key).map_err(|e| BackendError::InvalidKey(e.to_string()))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|e| BackendError::InvalidKey(e.to_string()))?,
        );

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        let base = config.project_url.trim_end_matches('/');
        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                rest_url: format!("{base}/rest/v1"),
                auth_url: format!("{base}/auth/v1"),
            }),
        })
    }

    pub(crate) fn inner(&self) -> &ClientInner {
        &self.inner
    }

    /// Run a filtered `SELECT` against a table and parse the row set.
    pub(crate) async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, BackendError> {
        let url = format!("{}/{table}", self.inner.rest_url);
        let response = self.inner.http.get(&url).query(query).send().await?;
        Self::parse_rows(table, response).await
    }

    /// Insert a row and return the created representation.
    pub(crate) async fn insert<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        table: &str,
        row: &B,
    ) -> Result<T, BackendError> {
        let url = format!("{}/{table}", self.inner.rest_url);
        let response = self
            .inner
            .http
            .post(&url)
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;

        let rows: Vec<T> = Self::parse_rows(table, response).await?;
        rows.into_iter()
            .next()
            .ok_or(BackendError::EmptyRepresentation)
    }

    /// Overwrite a row identified by `id` with the given body.
    pub(crate) async fn update<B: Serialize + Sync>(
        &self,
        table: &str,
        id: &str,
        row: &B,
    ) -> Result<(), BackendError> {
        let url = format!("{}/{table}", self.inner.rest_url);
        let response = self
            .inner
            .http
            .patch(&url)
            .query(&[("id", format!("eq.{id}"))])
            .json(row)
            .send()
            .await?;
        Self::check_status(table, response).await
    }

    /// Delete a row identified by `id`. Idempotent: deleting a missing row
    /// succeeds.
    pub(crate) async fn delete(&self, table: &str, id: &str) -> Result<(), BackendError> {
        let url = format!("{}/{table}", self.inner.rest_url);
        let response = self
            .inner
            .http
            .delete(&url)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;
        Self::check_status(table, response).await
    }

    async fn parse_rows<T: DeserializeOwned>(
        table: &str,
        response: reqwest::Response,
    ) -> Result<Vec<T>, BackendError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                table = %table,
                status = %status,
                body = %truncate(&body),
                "Backend query failed"
            );
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: truncate(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                table = %table,
                error = %e,
                body = %truncate(&body),
                "Failed to parse backend response"
            );
            BackendError::Parse(e)
        })
    }

    async fn check_status(table: &str, response: reqwest::Response) -> Result<(), BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(
            table = %table,
            status = %status,
            body = %truncate(&body),
            "Backend write failed"
        );
        Err(BackendError::Api {
            status: status.as_u16(),
            message: truncate(&body),
        })
    }
}

/// Truncate a response body for logs and error messages.
fn truncate(body: &str) -> String {
    body.chars().take(ERROR_BODY_LIMIT).collect()
}
