//! Admin HTTP routes.

mod auth;
mod categories;
mod dashboard;
mod inquiries;
mod products;

use axum::Router;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(auth::routes())
        .merge(dashboard::routes())
        .merge(products::routes())
        .merge(categories::routes())
        .merge(inquiries::routes())
}
