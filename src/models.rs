//! Order and Item records.
//!
//! An [`Order`] owns its [`Item`]s by value. `total_amount` is derived from the
//! items exactly once, in [`Order::new`], and is never recomputed afterwards.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Status assigned to every freshly created order.
pub const STATUS_PENDING: &str = "pending";

/// Status of the seeded sample order.
pub const STATUS_COMPLETED: &str = "completed";

/// A priced, quantified line entry belonging to exactly one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Item {
    #[serde(default)]
    #[schema(example = "item-1")]
    pub id: String,
    #[serde(default)]
    #[schema(example = "Laptop")]
    pub name: String,
    /// Unit price, must be non-negative
    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    #[schema(example = 999.99)]
    pub price: f64,
    /// Must be at least 1
    #[validate(range(min = 1, message = "quantity must be positive"))]
    #[schema(example = 1)]
    pub quantity: u32,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }

    /// `price * quantity`
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A purchase record.
///
/// Only `status` and `updated_at` change after creation, and only through
/// [`Order::set_status`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    #[schema(example = "5f0c6d8e-2f1b-4c55-9a51-2f7d1f0b9d11")]
    pub id: String,
    #[schema(example = "user-1")]
    pub user_id: String,
    pub items: Vec<Item>,
    #[schema(example = 1059.97)]
    pub total_amount: f64,
    #[schema(example = "pending")]
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Build a pending order with a fresh UUID, stamped at `now`.
    pub fn new(user_id: impl Into<String>, items: Vec<Item>, now: DateTime<Utc>) -> Self {
        let total_amount = total_amount(&items);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            items,
            total_amount,
            status: STATUS_PENDING.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the status and refresh `updated_at`.
    ///
    /// `updated_at` always moves strictly forward, even if the wall clock
    /// reads the same instant (or goes backwards) between two updates.
    pub fn set_status(&mut self, status: impl Into<String>, now: DateTime<Utc>) {
        self.status = status.into();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::nanoseconds(1)
        };
    }

    /// The demo order a fresh process starts with.
    pub fn sample(now: DateTime<Utc>) -> Self {
        let items = vec![
            Item::new("item-1", "Laptop", 999.99, 1),
            Item::new("item-2", "Mouse", 29.99, 2),
        ];
        Self {
            id: "order-1".to_string(),
            user_id: "user-1".to_string(),
            total_amount: total_amount(&items),
            items,
            status: STATUS_COMPLETED.to_string(),
            created_at: now - Duration::hours(24),
            updated_at: now - Duration::hours(23),
        }
    }
}

/// Sum of `price * quantity` over `items`, in item order.
pub fn total_amount(items: &[Item]) -> f64 {
    items.iter().map(Item::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_amount_sums_line_totals() {
        let items = vec![Item::new("a", "A", 10.0, 2), Item::new("b", "B", 5.0, 1)];
        assert_eq!(total_amount(&items), 25.0);
    }

    #[test]
    fn test_total_amount_empty() {
        assert_eq!(total_amount(&[]), 0.0);
    }

    #[test]
    fn test_new_order_is_pending() {
        let now = Utc::now();
        let order = Order::new("user-1", vec![Item::new("a", "A", 10.0, 2)], now);
        assert_eq!(order.status, STATUS_PENDING);
        assert_eq!(order.total_amount, 20.0);
        assert_eq!(order.created_at, now);
        assert_eq!(order.updated_at, now);
        assert!(uuid::Uuid::parse_str(&order.id).is_ok());
    }

    #[test]
    fn test_new_orders_get_distinct_ids() {
        let now = Utc::now();
        let a = Order::new("u", vec![], now);
        let b = Order::new("u", vec![], now);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_set_status_keeps_everything_else() {
        let now = Utc::now();
        let mut order = Order::new("user-1", vec![Item::new("a", "A", 3.5, 4)], now);
        let before = order.clone();

        order.set_status("shipped", now + Duration::seconds(1));

        assert_eq!(order.status, "shipped");
        assert_eq!(order.id, before.id);
        assert_eq!(order.user_id, before.user_id);
        assert_eq!(order.items, before.items);
        assert_eq!(order.total_amount, before.total_amount);
        assert_eq!(order.created_at, before.created_at);
        assert!(order.updated_at > before.updated_at);
    }

    #[test]
    fn test_set_status_same_instant_still_advances() {
        let now = Utc::now();
        let mut order = Order::new("user-1", vec![], now);
        order.set_status("a", now);
        assert!(order.updated_at > now);
        let prev = order.updated_at;
        // Clock went backwards
        order.set_status("b", now - Duration::seconds(5));
        assert!(order.updated_at > prev);
    }

    #[test]
    fn test_sample_order() {
        let now = Utc::now();
        let order = Order::sample(now);
        assert_eq!(order.id, "order-1");
        assert_eq!(order.status, STATUS_COMPLETED);
        assert!((order.total_amount - 1059.97).abs() < 1e-9);
        assert!(order.updated_at >= order.created_at);
    }

    #[test]
    fn test_item_validation() {
        assert!(Item::new("a", "A", 0.0, 1).validate().is_ok());
        assert!(Item::new("a", "A", -1.0, 1).validate().is_err());
        assert!(Item::new("a", "A", 1.0, 0).validate().is_err());
    }

    #[test]
    fn test_order_json_shape() {
        let order = Order::new("user-1", vec![Item::new("a", "A", 1.5, 2)], Utc::now());
        let json = serde_json::to_value(&order).unwrap();
        for key in [
            "id",
            "user_id",
            "items",
            "total_amount",
            "status",
            "created_at",
            "updated_at",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["items"][0]["quantity"], 2);
        // RFC3339 with a UTC designator
        let created = json["created_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(created).is_ok());
        assert!(created.ends_with('Z'));
    }
}
