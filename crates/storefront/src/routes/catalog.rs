//! Public catalog endpoints.
//!
//! Listing endpoints degrade to an empty result set when the backend is
//! unreachable; only the single-product lookup surfaces a hard error, since
//! an empty product page is indistinguishable from a missing product.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use wavecrest_backend::Catalog;
use wavecrest_core::{Category, Product};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Home page carousel cap.
pub const FEATURED_LIMIT: u32 = 10;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products/featured", get(featured))
        .route("/api/search", get(search))
        .route("/api/products/{slug}", get(by_slug))
        .route("/api/categories", get(categories))
}

#[derive(Debug, Deserialize)]
struct ProductListQuery {
    category_id: Option<Uuid>,
    q: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

async fn featured(State(state): State<AppState>) -> Json<Vec<Product>> {
    match state.backend().list_featured(FEATURED_LIMIT).await {
        Ok(products) => Json(products),
        Err(e) => {
            tracing::warn!(error = %e, "Featured products unavailable");
            Json(Vec::new())
        }
    }
}

async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Json<Vec<Product>> {
    let name_query = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty());
    match state
        .backend()
        .list_products(query.category_id, name_query)
        .await
    {
        Ok(products) => Json(products),
        Err(e) => {
            tracing::warn!(error = %e, "Product listing unavailable");
            Json(Vec::new())
        }
    }
}

async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Product>> {
    let q = query.q.trim();
    if q.is_empty() {
        return Json(Vec::new());
    }
    match state.backend().search_by_name(q).await {
        Ok(products) => Json(products),
        Err(e) => {
            tracing::warn!(error = %e, "Search unavailable");
            Json(Vec::new())
        }
    }
}

async fn by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Product>> {
    let product = state.backend().get_by_slug(&slug).await?;
    product.map(Json).ok_or(AppError::NotFound(slug))
}

async fn categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    match state.backend().list_categories().await {
        Ok(categories) => Json(categories),
        Err(e) => {
            tracing::warn!(error = %e, "Categories unavailable");
            Json(Vec::new())
        }
    }
}
