//! Storefront HTTP routes.

mod cart;
mod catalog;
mod inquiries;

use axum::Router;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::routes())
        .merge(cart::routes())
        .merge(inquiries::routes())
}
