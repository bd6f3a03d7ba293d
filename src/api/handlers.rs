//! HTTP handlers, grouped by concern.

mod health;
mod order;
mod query;

use axum::http::Uri;

use super::types::ApiError;

pub use health::{SERVICE_NAME, SERVICE_VERSION, health_check};
pub use order::{create_order, delete_order, update_order_status};
pub use query::{get_order, list_orders};

// utoipa's generated path types live next to the handlers
pub use health::__path_health_check;
pub use order::{__path_create_order, __path_delete_order, __path_update_order_status};
pub use query::{__path_get_order, __path_list_orders};

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "no route");
    ApiError::not_found("Not found")
}
