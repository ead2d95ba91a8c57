//! Credential verification against the backend's auth service.
//!
//! The server never stores passwords or verifies them itself; it forwards
//! credentials once per login and keeps only the returned session. Role
//! checks go through the `user_roles` table, which is the single source of
//! truth for admin access.

use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::client::SupabaseClient;
use crate::error::BackendError;

/// An authenticated session returned by the auth service.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user: AuthUser,
}

/// The user half of an auth session.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

#[derive(Deserialize)]
struct RoleRow {
    #[allow(dead_code)]
    role: String,
}

impl SupabaseClient {
    /// Verify an email/password pair and return the resulting session.
    ///
    /// Bad credentials surface as [`BackendError::Api`]; callers should
    /// treat that the same as a missing role and reject the login without
    /// saying which check failed.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the request
    /// fails.
    #[instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, BackendError> {
        let url = format!("{}/token", self.inner().auth_url);
        let response = self
            .inner()
            .http
            .post(&url)
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Do not log the body here, it can echo the submitted email.
            tracing::warn!(status = %status, "Sign-in rejected by auth service");
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: "sign-in rejected".to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// Revoke a session's access token. A failed revocation is reported but
    /// the caller's local session is gone either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, access_token))]
    pub async fn sign_out(&self, access_token: &str) -> Result<(), BackendError> {
        let url = format!("{}/logout", self.inner().auth_url);
        let response = self
            .inner()
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {access_token}"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Sign-out rejected by auth service");
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: "sign-out rejected".to_string(),
            });
        }
        Ok(())
    }

    /// Check whether a user holds the named role.
    ///
    /// # Errors
    ///
    /// Returns an error if the role query fails.
    #[instrument(skip(self))]
    pub async fn has_role(&self, user_id: Uuid, role: &str) -> Result<bool, BackendError> {
        let rows: Vec<RoleRow> = self
            .select(
                "user_roles",
                &[
                    ("select", "role".to_string()),
                    ("user_id", format!("eq.{user_id}")),
                    ("role", format!("eq.{role}")),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(!rows.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_session_deserializes_token_response() {
        let body = serde_json::json!({
            "access_token": "eyJ0est",
            "token_type": "bearer",
            "expires_in": 3600,
            "user": {
                "id": "11111111-2222-3333-4444-555555555555",
                "email": "ops@wavecrest.audio",
                "aud": "authenticated"
            }
        });
        let session: AuthSession = serde_json::from_value(body).unwrap();
        assert_eq!(session.access_token, "eyJ0est");
        assert_eq!(session.user.email, "ops@wavecrest.audio");
    }
}
