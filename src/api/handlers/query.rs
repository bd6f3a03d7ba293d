//! Query handlers (single order, filtered listing)

use std::sync::Arc;

use axum::extract::{Path, Query, State};

use crate::models::Order;

use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResult, ErrorResponse, OrderListResponse, ok, order_filter_from_query,
};

/// Get single order by ID
///
/// GET /orders/{id}
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order details", body = Order),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Order> {
    match state.store.find_by_id(&id)? {
        Some(order) => ok(order),
        None => ApiError::order_not_found().into_err(),
    }
}

/// List orders
///
/// GET /orders?user_id=&status=&limit=10
///
/// `total` is the length of the returned page, not the store size. Raw pairs
/// are kept so a repeated key resolves to its first value.
#[utoipa::path(
    get,
    path = "/orders",
    params(
        ("user_id" = Option<String>, Query, description = "Exact-match user filter"),
        ("status" = Option<String>, Query, description = "Exact-match status filter"),
        ("limit" = Option<i64>, Query, description = "Maximum number of orders (default: 10, non-integers use the default, negatives return nothing)")
    ),
    responses(
        (status = 200, description = "Filtered orders in creation order", body = OrderListResponse)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<OrderListResponse> {
    let filter = order_filter_from_query(&params);
    let orders = state.store.list(&filter)?;

    tracing::debug!(
        user_id = ?filter.user_id,
        status = ?filter.status,
        limit = filter.limit,
        matched = orders.len(),
        "listed orders"
    );

    ok(OrderListResponse::new(orders))
}
