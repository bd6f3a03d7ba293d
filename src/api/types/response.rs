//! Response DTOs and the HTTP error type
//!
//! - `ApiError`: status + message, rendered as `{"error": "..."}`
//! - `ApiResult<T>` with the `ok` / `created` helpers
//! - Response bodies for list, delete and health

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Order;
use crate::store::StoreError;

// ============================================================================
// Error handling
// ============================================================================

/// Error body returned for every non-2xx response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Order not found")]
    pub error: String,
}

pub const ORDER_NOT_FOUND: &str = "Order not found";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// HTTP-facing error: a status code and a client-safe message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400: malformed or missing request fields
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 404 with the standard order message
    pub fn order_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, ORDER_NOT_FOUND)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 500 without internal detail
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
    }

    pub fn into_err<T>(self) -> Result<T, Self> {
        Err(self)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "order store failure");
        Self::internal()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

pub type ApiResult<T> = Result<(StatusCode, Json<T>), ApiError>;

/// 200 OK
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(data)))
}

/// 201 Created
pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(data)))
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Filtered order listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
    /// Number of orders in this response (after filtering and limit)
    #[schema(example = 1)]
    pub total: usize,
}

impl OrderListResponse {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            total: orders.len(),
            orders,
        }
    }
}

/// Plain confirmation message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Order deleted successfully")]
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "order-service")]
    pub service: String,
    /// Server time, RFC3339 UTC
    #[schema(example = "2025-01-01T00:00:00Z")]
    pub timestamp: String,
    #[schema(example = "1.0.0")]
    pub version: String,
    #[schema(example = 1)]
    pub orders_count: usize,
}
