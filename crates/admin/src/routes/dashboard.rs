//! Dashboard counts.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use wavecrest_backend::{Catalog, InquiryStore};

use crate::error::Result;
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/dashboard", get(dashboard))
}

#[derive(Debug, Serialize)]
struct DashboardCounts {
    products: usize,
    categories: usize,
    inquiries: usize,
}

async fn dashboard(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<DashboardCounts>> {
    let products = state.backend().list_products(None, None).await?.len();
    let categories = state.backend().list_categories().await?.len();
    let inquiries = state.backend().list().await?.len();

    Ok(Json(DashboardCounts {
        products,
        categories,
        inquiries,
    }))
}
