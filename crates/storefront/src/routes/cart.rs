//! Session cart endpoints.
//!
//! The session cookie holds only a cart token; the cart itself lives in the
//! process-local registry. Every mutation responds with the full updated
//! cart so clients never need a follow-up read. The `currency` query
//! parameter selects the display currency per request (default INR) and is
//! never persisted.

use axum::extract::{Path, Query, State};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use uuid::Uuid;

use wavecrest_core::{CartLine, Currency, PriceSet};

use crate::cart::CartStore;
use crate::error::{AppError, Result};
use crate::state::AppState;

const CART_TOKEN_KEY: &str = "cart_token";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/cart", get(get_cart).delete(clear_cart))
        .route("/api/cart/count", get(cart_count))
        .route("/api/cart/items", post(add_item))
        .route(
            "/api/cart/items/{product_id}",
            patch(set_quantity).delete(remove_item),
        )
}

#[derive(Debug, Deserialize)]
struct CurrencyQuery {
    #[serde(default)]
    currency: Currency,
}

/// Cart as sent to clients, totalled in one selected currency.
#[derive(Debug, Serialize)]
struct CartView {
    items: Vec<CartLine>,
    item_count: u32,
    currency: Currency,
    total: Decimal,
    formatted_total: String,
}

impl CartView {
    fn of(cart: &CartStore, currency: Currency) -> Self {
        let total = cart.total_value(currency);
        Self {
            items: cart.lines(),
            item_count: cart.total_item_count(),
            currency,
            total,
            formatted_total: format!("{}{total:.2}", currency.symbol()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AddItemRequest {
    product_id: Uuid,
    name: String,
    #[serde(flatten)]
    prices: PriceSet,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default = "default_quantity")]
    quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
struct SetQuantityRequest {
    quantity: i64,
}

/// Resolve the session's cart, minting a cart token on first use.
pub(crate) async fn session_cart(state: &AppState, session: &Session) -> Result<CartStore> {
    let token = match session
        .get::<Uuid>(CART_TOKEN_KEY)
        .await
        .map_err(session_error)?
    {
        Some(token) => token,
        None => {
            let token = Uuid::new_v4();
            session
                .insert(CART_TOKEN_KEY, token)
                .await
                .map_err(session_error)?;
            token
        }
    };
    Ok(state.carts().get_or_create(token))
}

fn session_error(e: tower_sessions::session::Error) -> AppError {
    AppError::Internal(format!("session store: {e}"))
}

async fn get_cart(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CurrencyQuery>,
) -> Result<Json<CartView>> {
    let cart = session_cart(&state, &session).await?;
    Ok(Json(CartView::of(&cart, query.currency)))
}

/// Header badge counter, read off the cart's watch channel.
async fn cart_count(State(state): State<AppState>, session: Session) -> Result<Json<u32>> {
    let cart = session_cart(&state, &session).await?;
    let count = *cart.subscribe().borrow();
    Ok(Json(count))
}

async fn add_item(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CurrencyQuery>,
    Json(request): Json<AddItemRequest>,
) -> Result<Json<CartView>> {
    let cart = session_cart(&state, &session).await?;
    cart.add(CartLine {
        product_id: request.product_id,
        name: request.name,
        prices: request.prices,
        image_url: request.image_url,
        quantity: request.quantity,
    });
    Ok(Json(CartView::of(&cart, query.currency)))
}

async fn set_quantity(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<Uuid>,
    Query(query): Query<CurrencyQuery>,
    Json(request): Json<SetQuantityRequest>,
) -> Result<Json<CartView>> {
    let cart = session_cart(&state, &session).await?;
    cart.set_quantity(product_id, request.quantity);
    Ok(Json(CartView::of(&cart, query.currency)))
}

async fn remove_item(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<Uuid>,
    Query(query): Query<CurrencyQuery>,
) -> Result<Json<CartView>> {
    let cart = session_cart(&state, &session).await?;
    cart.remove(product_id);
    Ok(Json(CartView::of(&cart, query.currency)))
}

async fn clear_cart(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CurrencyQuery>,
) -> Result<Json<CartView>> {
    let cart = session_cart(&state, &session).await?;
    cart.clear();
    Ok(Json(CartView::of(&cart, query.currency)))
}
