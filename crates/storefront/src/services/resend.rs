//! Inquiry notifications via the Resend transactional email API.
//!
//! One admin-facing email per inquiry, rendered from Askama templates in
//! HTML and plain-text variants. The provider call is a single HTTP POST
//! with no retries; callers decide how to handle a failed dispatch.

use std::sync::Arc;

use askama::Template;
use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use wavecrest_core::{CART_ORDER_LABEL, Currency, NewInquiry};

use super::{MessageId, NotificationDispatcher, NotifyError};

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Resend-backed notification dispatcher.
///
/// Cheaply cloneable; all state lives behind an `Arc`.
#[derive(Clone)]
pub struct ResendMailer {
    inner: Arc<MailerInner>,
}

struct MailerInner {
    http: reqwest::Client,
    api_key: SecretString,
    from: String,
    admin_email: String,
}

#[derive(Deserialize)]
struct SendResponse {
    id: String,
}

impl ResendMailer {
    #[must_use]
    pub fn new(api_key: SecretString, from: String, admin_email: String) -> Self {
        Self {
            inner: Arc::new(MailerInner {
                http: reqwest::Client::new(),
                api_key,
                from,
                admin_email,
            }),
        }
    }

    async fn send(&self, message: &RenderedEmail) -> Result<MessageId, NotifyError> {
        let response = self
            .inner
            .http
            .post(RESEND_API_URL)
            .bearer_auth(self.inner.api_key.expose_secret())
            .json(&json!({
                "from": self.inner.from,
                "to": [self.inner.admin_email],
                "subject": message.subject,
                "html": message.html,
                "text": message.text,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: SendResponse = response.json().await?;
        Ok(MessageId(body.id))
    }
}

#[async_trait::async_trait]
impl NotificationDispatcher for ResendMailer {
    #[instrument(skip(self, inquiry), fields(product_name = %inquiry.product_name))]
    async fn dispatch_inquiry(&self, inquiry: &NewInquiry) -> Result<MessageId, NotifyError> {
        let message = render_inquiry(inquiry)?;
        let id = self.send(&message).await?;
        tracing::info!(message_id = %id.0, "Inquiry notification sent");
        Ok(id)
    }
}

struct RenderedEmail {
    subject: String,
    html: String,
    text: String,
}

/// Build the subject and both body variants for an inquiry notification.
fn render_inquiry(inquiry: &NewInquiry) -> Result<RenderedEmail, NotifyError> {
    let company = inquiry.company.as_deref().unwrap_or("Not provided");

    if inquiry.product_id.is_none() && inquiry.product_name == CART_ORDER_LABEL {
        let rows: Vec<CartRow> = inquiry
            .cart_items
            .iter()
            .map(|item| CartRow {
                name: item.name.clone(),
                quantity: item.quantity,
                price_inr: item.prices.display(Currency::Inr),
                price_usd: item.prices.display(Currency::Usd),
                price_eur: item.prices.display(Currency::Eur),
                line_total: format!(
                    "{}{:.2}",
                    Currency::Inr.symbol(),
                    item.prices.amount(Currency::Inr) * Decimal::from(item.quantity)
                ),
            })
            .collect();
        let total: Decimal = inquiry
            .cart_items
            .iter()
            .map(|item| item.prices.amount(Currency::Inr) * Decimal::from(item.quantity))
            .sum();
        let total = format!("{}{total:.2}", Currency::Inr.symbol());

        let html = CartInquiryHtml {
            name: &inquiry.name,
            email: &inquiry.email,
            phone: &inquiry.phone,
            company,
            rows: &rows,
            total: &total,
        }
        .render()?;
        let text = CartInquiryText {
            name: &inquiry.name,
            email: &inquiry.email,
            phone: &inquiry.phone,
            company,
            rows: &rows,
            total: &total,
        }
        .render()?;

        Ok(RenderedEmail {
            subject: format!("New Cart Order from {}", inquiry.name),
            html,
            text,
        })
    } else {
        let html = ProductInquiryHtml {
            name: &inquiry.name,
            email: &inquiry.email,
            phone: &inquiry.phone,
            company,
            product_name: &inquiry.product_name,
        }
        .render()?;
        let text = ProductInquiryText {
            name: &inquiry.name,
            email: &inquiry.email,
            phone: &inquiry.phone,
            company,
            product_name: &inquiry.product_name,
        }
        .render()?;

        Ok(RenderedEmail {
            subject: format!("New Product Inquiry: {}", inquiry.product_name),
            html,
            text,
        })
    }
}

struct CartRow {
    name: String,
    quantity: u32,
    price_inr: String,
    price_usd: String,
    price_eur: String,
    line_total: String,
}

#[derive(Template)]
#[template(path = "email/cart_inquiry.html")]
struct CartInquiryHtml<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    company: &'a str,
    rows: &'a [CartRow],
    total: &'a str,
}

#[derive(Template)]
#[template(path = "email/cart_inquiry.txt")]
struct CartInquiryText<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    company: &'a str,
    rows: &'a [CartRow],
    total: &'a str,
}

#[derive(Template)]
#[template(path = "email/product_inquiry.html")]
struct ProductInquiryHtml<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    company: &'a str,
    product_name: &'a str,
}

#[derive(Template)]
#[template(path = "email/product_inquiry.txt")]
struct ProductInquiryText<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    company: &'a str,
    product_name: &'a str,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use wavecrest_core::{CartItemSnapshot, PriceSet};

    fn contact() -> NewInquiry {
        NewInquiry {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            company: Some("Rao Exports".to_string()),
            product_name: "Reference Earbuds".to_string(),
            product_id: Some(Uuid::nil()),
            cart_items: Vec::new(),
        }
    }

    #[test]
    fn test_product_inquiry_subject_and_body() {
        let message = render_inquiry(&contact()).unwrap();
        assert_eq!(message.subject, "New Product Inquiry: Reference Earbuds");
        assert!(message.html.contains("Asha Rao"));
        assert!(message.html.contains("Reference Earbuds"));
        assert!(message.html.contains("Rao Exports"));
        assert!(message.text.contains("Reference Earbuds"));
    }

    #[test]
    fn test_missing_company_falls_back() {
        let inquiry = NewInquiry {
            company: None,
            ..contact()
        };
        let message = render_inquiry(&inquiry).unwrap();
        assert!(message.html.contains("Not provided"));
        assert!(message.text.contains("Not provided"));
    }

    #[test]
    fn test_cart_inquiry_subject_and_totals() {
        let inquiry = NewInquiry {
            product_name: CART_ORDER_LABEL.to_string(),
            product_id: None,
            company: None,
            cart_items: vec![CartItemSnapshot {
                id: Uuid::nil(),
                name: "Studio Monitor".to_string(),
                quantity: 2,
                prices: PriceSet::new(
                    Decimal::from(100),
                    Decimal::new(120, 2),
                    Decimal::new(111, 2),
                ),
            }],
            ..contact()
        };

        let message = render_inquiry(&inquiry).unwrap();
        assert_eq!(message.subject, "New Cart Order from Asha Rao");
        assert!(message.html.contains("Studio Monitor"));
        // Unit prices in all three currencies, total in INR.
        assert!(message.html.contains("₹100.00"));
        assert!(message.html.contains("$1.20"));
        assert!(message.html.contains("€1.11"));
        assert!(message.html.contains("₹200.00"));
        assert!(message.text.contains("₹200.00"));
    }
}
