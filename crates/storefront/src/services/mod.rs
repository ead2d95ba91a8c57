//! External service integrations.

mod resend;

pub use resend::ResendMailer;

use async_trait::async_trait;
use thiserror::Error;
use wavecrest_core::NewInquiry;

/// Provider-assigned identifier of a delivered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageId(pub String);

/// Errors from the notification provider.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-success status.
    #[error("Provider rejected the message: {status} - {message}")]
    Rejected { status: u16, message: String },

    /// An email body failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Sends the admin-facing notification for a new inquiry.
///
/// Delivery is best-effort; the inquiry flow records the inquiry first and
/// treats a failed dispatch as non-fatal.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn dispatch_inquiry(&self, inquiry: &NewInquiry) -> Result<MessageId, NotifyError>;
}
