//! In-memory order store.
//!
//! One `Vec<Order>` in insertion order behind a single [`Mutex`]. Every
//! operation takes the lock for its own duration only; nothing is held
//! across requests, and the lock is never held across an `.await`.
//!
//! All lookups are linear scans. The collection lives for the process
//! lifetime and is never persisted.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use thiserror::Error;

use crate::models::Order;

/// Default page size for [`OrderStore::list`].
pub const DEFAULT_LIST_LIMIT: usize = 10;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A previous holder of the lock panicked mid-operation.
    #[error("order store lock poisoned")]
    LockPoisoned,
}

/// Exact-match predicates applied by [`OrderStore::list`].
///
/// `None` disables a predicate. `user_id` is checked before `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFilter {
    pub user_id: Option<String>,
    pub status: Option<String>,
    pub limit: usize,
}

impl Default for OrderFilter {
    fn default() -> Self {
        Self {
            user_id: None,
            status: None,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl OrderFilter {
    fn matches(&self, order: &Order) -> bool {
        if let Some(user_id) = &self.user_id {
            if order.user_id != *user_id {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if order.status != *status {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Mutex<Vec<Order>>,
}

impl OrderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with `orders`, in the given order.
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: Mutex::new(orders),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Order>>, StoreError> {
        self.orders.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Append an order. Ids are generated upstream, so no duplicate check.
    pub fn insert(&self, order: Order) -> Result<(), StoreError> {
        self.lock()?.push(order);
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Order>, StoreError> {
        Ok(self.lock()?.iter().find(|o| o.id == id).cloned())
    }

    /// Set the status of the first order with `id` and refresh its
    /// `updated_at`. Returns the updated order.
    pub fn replace_status(&self, id: &str, status: &str) -> Result<Option<Order>, StoreError> {
        let mut orders = self.lock()?;
        Ok(orders.iter_mut().find(|o| o.id == id).map(|order| {
            order.set_status(status, Utc::now());
            order.clone()
        }))
    }

    /// Remove the first order with `id`, keeping the rest in order.
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut orders = self.lock()?;
        match orders.iter().position(|o| o.id == id) {
            Some(idx) => {
                orders.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Matching orders in insertion order, at most `filter.limit` of them.
    pub fn list(&self, filter: &OrderFilter) -> Result<Vec<Order>, StoreError> {
        Ok(self
            .lock()?
            .iter()
            .filter(|o| filter.matches(o))
            .take(filter.limit)
            .cloned()
            .collect())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock()?.is_empty())
    }
}
