//! Admin login and logout.
//!
//! Login verifies the credential against the backend's auth service and
//! then requires the `admin` role. Both failures produce the same 401 so a
//! caller cannot probe which accounts exist or which hold the role.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::auth::{clear_current_admin, set_current_admin};
use crate::models::{AdminProfile, CurrentAdmin, session_keys};
use crate::state::AppState;

const ADMIN_ROLE: &str = "admin";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AdminProfile>> {
    let auth = state
        .backend()
        .sign_in(&request.email, &request.password)
        .await
        .map_err(|e| {
            tracing::info!(error = %e, "Login rejected");
            AppError::Unauthorized
        })?;

    if !state.backend().has_role(auth.user.id, ADMIN_ROLE).await? {
        tracing::info!(user_id = %auth.user.id, "Login rejected: missing admin role");
        // The backend session was already created; revoke it.
        if let Err(e) = state.backend().sign_out(&auth.access_token).await {
            tracing::warn!(error = %e, "Failed to revoke non-admin session");
        }
        return Err(AppError::Unauthorized);
    }

    let admin = CurrentAdmin {
        user_id: auth.user.id,
        email: auth.user.email,
        access_token: auth.access_token,
    };
    set_current_admin(&session, &admin)
        .await
        .map_err(|e| AppError::Internal(format!("session store: {e}")))?;

    tracing::info!(user_id = %admin.user_id, "Admin logged in");
    Ok(Json(AdminProfile::from(&admin)))
}

async fn logout(State(state): State<AppState>, session: Session) -> Result<StatusCode> {
    let admin: Option<CurrentAdmin> = session
        .get(session_keys::CURRENT_ADMIN)
        .await
        .ok()
        .flatten();

    if let Some(admin) = admin {
        // Best effort: the local session is cleared either way.
        if let Err(e) = state.backend().sign_out(&admin.access_token).await {
            tracing::warn!(error = %e, "Failed to revoke backend session on logout");
        }
    }

    clear_current_admin(&session)
        .await
        .map_err(|e| AppError::Internal(format!("session store: {e}")))?;
    Ok(StatusCode::NO_CONTENT)
}
