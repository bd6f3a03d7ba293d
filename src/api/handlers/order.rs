//! Order mutation handlers (create, update status, delete)

use std::sync::Arc;

use axum::extract::{Path, State};
use chrono::Utc;

use crate::models::Order;

use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResult, CreateOrderRequest, ErrorResponse, MessageResponse, UpdateStatusRequest,
    ValidatedJson, created, ok,
};

/// Create order endpoint
///
/// POST /orders
#[utoipa::path(
    post,
    path = "/orders",
    request_body(content = CreateOrderRequest, content_type = "application/json"),
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Missing user_id or malformed items", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateOrderRequest>,
) -> ApiResult<Order> {
    let order = Order::new(req.user_id, req.items, Utc::now());
    state.store.insert(order.clone())?;

    tracing::info!(
        order_id = %order.id,
        user_id = %order.user_id,
        "Created order {} for user {} with total amount {:.2}",
        order.id,
        order.user_id,
        order.total_amount
    );

    created(order)
}

/// Update order status
///
/// PUT /orders/{id}/status
///
/// The body is validated before the lookup, so an empty status is a 400
/// even for an unknown id.
#[utoipa::path(
    put,
    path = "/orders/{id}/status",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    request_body(content = UpdateStatusRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Updated order", body = Order),
        (status = 400, description = "Missing status", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateStatusRequest>,
) -> ApiResult<Order> {
    match state.store.replace_status(&id, &req.status)? {
        Some(order) => {
            tracing::info!(order_id = %id, "Updated order {} status to {}", id, req.status);
            ok(order)
        }
        None => ApiError::order_not_found().into_err(),
    }
}

/// Delete order
///
/// DELETE /orders/{id}
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order deleted", body = MessageResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    if !state.store.remove(&id)? {
        return ApiError::order_not_found().into_err();
    }

    tracing::info!(order_id = %id, "Deleted order {}", id);

    ok(MessageResponse {
        message: "Order deleted successfully".to_string(),
    })
}
