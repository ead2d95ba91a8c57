//! Inquiry submission endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tower_sessions::Session;
use uuid::Uuid;

use wavecrest_core::{Inquiry, InquiryContact};

use crate::error::{AppError, Result};
use crate::inquiry::InquirySubject;
use crate::routes::cart::session_cart;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/inquiries", post(submit_inquiry))
}

#[derive(Debug, Deserialize)]
struct InquiryRequest {
    name: String,
    email: String,
    phone: String,
    #[serde(default)]
    company: Option<String>,
    /// Set for single-product inquiries.
    #[serde(default)]
    product_id: Option<Uuid>,
    /// Required unless `cart_inquiry` is set.
    #[serde(default)]
    product_name: Option<String>,
    /// Marks a cart-wide inquiry; `product_id`/`product_name` are ignored.
    #[serde(default)]
    cart_inquiry: bool,
}

fn validate_contact(request: &InquiryRequest) -> Result<()> {
    if request.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }
    if request.email.trim().is_empty() || !request.email.contains('@') {
        return Err(AppError::BadRequest("a valid email is required".to_string()));
    }
    if request.phone.trim().is_empty() {
        return Err(AppError::BadRequest("phone is required".to_string()));
    }
    Ok(())
}

async fn submit_inquiry(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<InquiryRequest>,
) -> Result<(StatusCode, Json<Inquiry>)> {
    validate_contact(&request)?;

    let cart = session_cart(&state, &session).await?;

    let subject = if request.cart_inquiry {
        if cart.is_empty() {
            return Err(AppError::BadRequest("cart is empty".to_string()));
        }
        InquirySubject::Cart
    } else {
        let product_name = request
            .product_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::BadRequest("product_name is required".to_string()))?
            .to_string();
        InquirySubject::Product {
            product_id: request.product_id,
            product_name,
        }
    };

    let contact = InquiryContact {
        name: request.name,
        email: request.email,
        phone: request.phone,
        company: request.company,
    };

    let inquiry = state.submitter().submit(contact, subject, &cart).await?;
    Ok((StatusCode::CREATED, Json(inquiry)))
}
