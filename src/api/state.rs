use chrono::Utc;

use crate::models::Order;
use crate::store::OrderStore;

/// Shared application state, handed to every handler as `State<Arc<AppState>>`.
#[derive(Debug, Default)]
pub struct AppState {
    /// The order collection for this process
    pub store: OrderStore,
}

impl AppState {
    pub fn new(store: OrderStore) -> Self {
        Self { store }
    }

    /// State whose store starts with the demo order.
    pub fn with_sample_data() -> Self {
        Self::new(OrderStore::with_orders(vec![Order::sample(Utc::now())]))
    }
}
