//! Admin session models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session keys for admin data.
pub mod session_keys {
    /// The logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}

/// The logged-in admin, as stored in the session.
///
/// Carries the backend access token so logout can revoke it. Never
/// serialize this into a response body; use [`AdminProfile`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    pub user_id: Uuid,
    pub email: String,
    pub access_token: String,
}

/// Client-facing view of the logged-in admin.
#[derive(Debug, Clone, Serialize)]
pub struct AdminProfile {
    pub user_id: Uuid,
    pub email: String,
}

impl From<&CurrentAdmin> for AdminProfile {
    fn from(admin: &CurrentAdmin) -> Self {
        Self {
            user_id: admin.user_id,
            email: admin.email.clone(),
        }
    }
}
