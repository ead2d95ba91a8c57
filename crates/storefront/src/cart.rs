//! Server-side shopping cart.
//!
//! Each browser session owns one [`CartStore`], held in the process-local
//! [`CartRegistry`] and looked up by a token stored in the session cookie.
//! Carts live exactly as long as the process and the session; nothing is
//! persisted.
//!
//! Interested parties (the inquiry flow, the header badge endpoint) can
//! [`CartStore::subscribe`] to a watch channel that carries the current
//! total item count.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;
use tokio::sync::watch;
use uuid::Uuid;

use wavecrest_core::{CartItemSnapshot, CartLine, Currency};

/// One session's cart. Cheaply cloneable; clones share state.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartInner>,
}

struct CartInner {
    lines: Mutex<Vec<CartLine>>,
    item_count: watch::Sender<u32>,
}

impl CartStore {
    #[must_use]
    pub fn new() -> Self {
        let (item_count, _) = watch::channel(0);
        Self {
            inner: Arc::new(CartInner {
                lines: Mutex::new(Vec::new()),
                item_count,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CartLine>> {
        // A poisoned cart is still a valid cart; recover the data.
        self.inner
            .lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, lines: &[CartLine]) {
        let count = lines.iter().map(|l| l.quantity).sum();
        // Send fails only when no receiver exists, which is fine.
        let _ = self.inner.item_count.send(count);
    }

    /// Add an item to the cart.
    ///
    /// If the product is already present its quantity grows by the incoming
    /// item's quantity; otherwise the item is inserted with quantity 1.
    pub fn add(&self, item: CartLine) {
        let mut lines = self.lock();
        if let Some(existing) = lines.iter_mut().find(|l| l.product_id == item.product_id) {
            existing.quantity += item.quantity;
        } else {
            lines.push(CartLine {
                quantity: 1,
                ..item
            });
        }
        self.notify(&lines);
    }

    /// Remove a product's line entirely. Removing an absent product is a
    /// no-op.
    pub fn remove(&self, product_id: Uuid) {
        let mut lines = self.lock();
        lines.retain(|l| l.product_id != product_id);
        self.notify(&lines);
    }

    /// Set a line's quantity. A quantity of zero or less removes the line.
    pub fn set_quantity(&self, product_id: Uuid, quantity: i64) {
        let mut lines = self.lock();
        if quantity <= 0 {
            lines.retain(|l| l.product_id != product_id);
        } else if let Some(line) = lines.iter_mut().find(|l| l.product_id == product_id) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            // Positive and bounded by the i64 check above.
            {
                line.quantity = quantity.min(i64::from(u32::MAX)) as u32;
            }
        }
        self.notify(&lines);
    }

    /// Empty the cart.
    pub fn clear(&self) {
        let mut lines = self.lock();
        lines.clear();
        self.notify(&lines);
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_item_count(&self) -> u32 {
        self.lock().iter().map(|l| l.quantity).sum()
    }

    /// Cart total in the given currency.
    #[must_use]
    pub fn total_value(&self, currency: Currency) -> Decimal {
        self.lock()
            .iter()
            .map(|l| l.prices.amount(currency) * Decimal::from(l.quantity))
            .sum()
    }

    /// Current cart lines, cloned out of the lock.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.lock().clone()
    }

    /// Point-in-time snapshot of the cart in the shape inquiries persist.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CartItemSnapshot> {
        self.lock().iter().map(CartItemSnapshot::from).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Subscribe to item-count changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.inner.item_count.subscribe()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

/// All live carts, keyed by the session's cart token.
///
/// Carts are never evicted; they disappear with the process. Cheaply
/// cloneable.
#[derive(Clone, Default)]
pub struct CartRegistry {
    carts: Arc<Mutex<HashMap<Uuid, CartStore>>>,
}

impl CartRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the cart for a token, creating it on first use.
    #[must_use]
    pub fn get_or_create(&self, token: Uuid) -> CartStore {
        let mut carts = self
            .carts
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        carts.entry(token).or_default().clone()
    }
}
