//! Inquiry submission workflow.
//!
//! Ordering matters here: the inquiry is persisted first, the admin
//! notification is dispatched second, and a cart-wide inquiry clears the
//! cart last. A persistence failure aborts with the cart untouched; a
//! notification failure is logged and the submission still succeeds.
//!
//! There is no idempotency key, so a client retrying after a slow response
//! can record the same inquiry twice.

use std::sync::Arc;

use uuid::Uuid;

use wavecrest_backend::{BackendError, InquiryStore};
use wavecrest_core::{CART_ORDER_LABEL, Inquiry, InquiryContact, NewInquiry};

use crate::cart::CartStore;
use crate::services::NotificationDispatcher;

/// What an inquiry is about.
#[derive(Debug, Clone)]
pub enum InquirySubject {
    /// A quote request for one product.
    Product {
        product_id: Option<Uuid>,
        product_name: String,
    },
    /// A quote request for the session's entire cart.
    Cart,
}

/// Runs the persist-notify-clear sequence for inquiries.
///
/// Cheaply cloneable.
#[derive(Clone)]
pub struct InquirySubmitter {
    store: Arc<dyn InquiryStore>,
    dispatcher: Arc<dyn NotificationDispatcher>,
}

impl InquirySubmitter {
    pub fn new(store: Arc<dyn InquiryStore>, dispatcher: Arc<dyn NotificationDispatcher>) -> Self {
        Self { store, dispatcher }
    }

    /// Submit an inquiry.
    ///
    /// For [`InquirySubject::Cart`] the cart is snapshotted before any I/O
    /// and cleared only after the inquiry is persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the inquiry fails. A failed
    /// notification does not fail the submission.
    pub async fn submit(
        &self,
        contact: InquiryContact,
        subject: InquirySubject,
        cart: &CartStore,
    ) -> Result<Inquiry, BackendError> {
        let (product_name, product_id, cart_items) = match &subject {
            InquirySubject::Product {
                product_id,
                product_name,
            } => (product_name.clone(), *product_id, Vec::new()),
            InquirySubject::Cart => (CART_ORDER_LABEL.to_string(), None, cart.snapshot()),
        };

        let new_inquiry = NewInquiry {
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            company: contact.company,
            product_name,
            product_id,
            cart_items,
        };

        let inquiry = self.store.insert(new_inquiry.clone()).await?;

        if let Err(e) = self.dispatcher.dispatch_inquiry(&new_inquiry).await {
            tracing::warn!(
                error = %e,
                inquiry_id = %inquiry.id,
                "Inquiry notification failed, inquiry is still recorded"
            );
        }

        if matches!(subject, InquirySubject::Cart) {
            cart.clear();
        }

        Ok(inquiry)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use std::sync::Mutex;
    use wavecrest_core::{CartLine, PriceSet};

    use crate::services::{MessageId, NotifyError};

    struct MemoryInquiryStore {
        inquiries: Mutex<Vec<Inquiry>>,
        fail: bool,
    }

    impl MemoryInquiryStore {
        fn new() -> Self {
            Self {
                inquiries: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                inquiries: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl InquiryStore for MemoryInquiryStore {
        async fn insert(&self, inquiry: NewInquiry) -> Result<Inquiry, BackendError> {
            if self.fail {
                return Err(BackendError::Api {
                    status: 500,
                    message: "insert failed".to_string(),
                });
            }
            let stored = Inquiry {
                id: Uuid::new_v4(),
                name: inquiry.name,
                email: inquiry.email,
                phone: inquiry.phone,
                company: inquiry.company,
                product_name: inquiry.product_name,
                product_id: inquiry.product_id,
                cart_items: inquiry.cart_items,
                created_at: Utc::now(),
            };
            self.inquiries.lock().unwrap().push(stored.clone());
            Ok(stored)
        }

        async fn list(&self) -> Result<Vec<Inquiry>, BackendError> {
            Ok(self.inquiries.lock().unwrap().clone())
        }

        async fn delete(&self, id: Uuid) -> Result<(), BackendError> {
            self.inquiries.lock().unwrap().retain(|i| i.id != id);
            Ok(())
        }
    }

    struct RecordingDispatcher {
        sent: Mutex<Vec<NewInquiry>>,
        fail: bool,
    }

    impl RecordingDispatcher {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl NotificationDispatcher for RecordingDispatcher {
        async fn dispatch_inquiry(&self, inquiry: &NewInquiry) -> Result<MessageId, NotifyError> {
            if self.fail {
                return Err(NotifyError::Rejected {
                    status: 500,
                    message: "provider down".to_string(),
                });
            }
            self.sent.lock().unwrap().push(inquiry.clone());
            Ok(MessageId("msg_1".to_string()))
        }
    }

    fn contact() -> InquiryContact {
        InquiryContact {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            company: None,
        }
    }

    fn cart_with_item() -> CartStore {
        let cart = CartStore::new();
        cart.add(CartLine {
            product_id: Uuid::new_v4(),
            name: "Studio Monitor".to_string(),
            prices: PriceSet::new(
                Decimal::from(8300),
                Decimal::from(100),
                Decimal::new(9222, 2),
            ),
            image_url: None,
            quantity: 1,
        });
        cart
    }

    #[tokio::test]
    async fn test_cart_inquiry_persists_snapshot_and_clears_cart() {
        let store = Arc::new(MemoryInquiryStore::new());
        let dispatcher = Arc::new(RecordingDispatcher::new());
        let submitter = InquirySubmitter::new(store.clone(), dispatcher.clone());
        let cart = cart_with_item();

        let inquiry = submitter
            .submit(contact(), InquirySubject::Cart, &cart)
            .await
            .unwrap();

        assert!(inquiry.is_cart_order());
        assert_eq!(inquiry.cart_items.len(), 1);
        assert!(cart.is_empty());
        assert_eq!(dispatcher.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_notification_failure_still_succeeds() {
        let store = Arc::new(MemoryInquiryStore::new());
        let dispatcher = Arc::new(RecordingDispatcher::failing());
        let submitter = InquirySubmitter::new(store.clone(), dispatcher);
        let cart = cart_with_item();

        let result = submitter.submit(contact(), InquirySubject::Cart, &cart).await;

        assert!(result.is_ok());
        assert_eq!(store.inquiries.lock().unwrap().len(), 1);
        // The cart still clears: the inquiry itself went through.
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_persistence_failure_leaves_cart_untouched() {
        let store = Arc::new(MemoryInquiryStore::failing());
        let dispatcher = Arc::new(RecordingDispatcher::new());
        let submitter = InquirySubmitter::new(store, dispatcher.clone());
        let cart = cart_with_item();

        let result = submitter.submit(contact(), InquirySubject::Cart, &cart).await;

        assert!(result.is_err());
        assert_eq!(cart.total_item_count(), 1);
        assert!(dispatcher.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_product_inquiry_does_not_touch_cart() {
        let store = Arc::new(MemoryInquiryStore::new());
        let dispatcher = Arc::new(RecordingDispatcher::new());
        let submitter = InquirySubmitter::new(store, dispatcher);
        let cart = cart_with_item();

        let inquiry = submitter
            .submit(
                contact(),
                InquirySubject::Product {
                    product_id: Some(Uuid::nil()),
                    product_name: "Reference Earbuds".to_string(),
                },
                &cart,
            )
            .await
            .unwrap();

        assert_eq!(inquiry.product_name, "Reference Earbuds");
        assert!(inquiry.cart_items.is_empty());
        assert_eq!(cart.total_item_count(), 1);
    }
}
