//! Inquiry review endpoints.
//!
//! Inquiries arrive from the storefront; the admin panel only reads and
//! deletes them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use wavecrest_backend::InquiryStore;
use wavecrest_core::Inquiry;

use crate::error::Result;
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/inquiries", get(list))
        .route("/api/inquiries/{id}", axum::routing::delete(delete))
}

async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Inquiry>>> {
    let inquiries = state.backend().list().await?;
    Ok(Json(inquiries))
}

async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    InquiryStore::delete(state.backend(), id).await?;
    tracing::info!(inquiry_id = %id, "Inquiry deleted");
    Ok(StatusCode::NO_CONTENT)
}
