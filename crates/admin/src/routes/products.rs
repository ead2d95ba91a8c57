//! Product management endpoints.
//!
//! Admins submit INR prices; USD and EUR are derived server-side unless the
//! request overrides them explicitly. Edits always carry the complete
//! record.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use wavecrest_backend::Catalog;
use wavecrest_core::{Currency, PriceSet, Product, ProductInput};

use crate::error::{AppError, Result};
use crate::middleware::auth::RequireAdmin;
use crate::pricing;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list).post(create))
        .route("/api/products/convert", get(convert))
        .route("/api/products/{id}", put(update).delete(delete))
}

#[derive(Debug, Deserialize)]
struct ProductWriteRequest {
    name: String,
    slug: String,
    #[serde(default)]
    description: Option<String>,
    price_inr: Decimal,
    /// Explicit override; derived from `price_inr` when absent.
    #[serde(default)]
    price_usd: Option<Decimal>,
    /// Explicit override; derived from `price_inr` when absent.
    #[serde(default)]
    price_eur: Option<Decimal>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    stock_quantity: Option<i32>,
    #[serde(default)]
    specifications: BTreeMap<String, String>,
    #[serde(default)]
    is_featured: bool,
    #[serde(default)]
    is_sold_out: bool,
    #[serde(default)]
    category_id: Option<Uuid>,
    #[serde(default)]
    sku: Option<String>,
}

impl ProductWriteRequest {
    fn into_input(self) -> Result<ProductInput> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }
        if self.slug.trim().is_empty() {
            return Err(AppError::BadRequest("slug is required".to_string()));
        }
        if self.price_inr < Decimal::ZERO {
            return Err(AppError::BadRequest(
                "price_inr must not be negative".to_string(),
            ));
        }

        let derived = pricing::derive_from_inr(self.price_inr);
        let prices = PriceSet::new(
            self.price_inr,
            self.price_usd
                .unwrap_or_else(|| derived.amount(Currency::Usd)),
            self.price_eur
                .unwrap_or_else(|| derived.amount(Currency::Eur)),
        );

        Ok(ProductInput {
            name: self.name,
            slug: self.slug,
            description: self.description,
            prices,
            image_url: self.image_url,
            stock_quantity: self.stock_quantity,
            specifications: self.specifications,
            is_featured: self.is_featured,
            is_sold_out: self.is_sold_out,
            category_id: self.category_id,
            sku: self.sku,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ConvertQuery {
    price_inr: Decimal,
}

async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>> {
    let products = state.backend().list_products(None, None).await?;
    Ok(Json(products))
}

async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(request): Json<ProductWriteRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    let input = request.into_input()?;
    let product = state.backend().create_product(&input).await?;
    tracing::info!(product_id = %product.id, slug = %product.slug, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ProductWriteRequest>,
) -> Result<StatusCode> {
    let input = request.into_input()?;
    state.backend().update_product(id, &input).await?;
    tracing::info!(product_id = %id, "Product updated");
    Ok(StatusCode::NO_CONTENT)
}

async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.backend().delete_product(id).await?;
    tracing::info!(product_id = %id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Preview the derived USD and EUR prices for an INR amount.
async fn convert(
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<ConvertQuery>,
) -> Result<Json<PriceSet>> {
    if query.price_inr < Decimal::ZERO {
        return Err(AppError::BadRequest(
            "price_inr must not be negative".to_string(),
        ));
    }
    Ok(Json(pricing::derive_from_inr(query.price_inr)))
}
