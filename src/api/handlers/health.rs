//! Health check handler

use std::sync::Arc;

use axum::extract::State;
use chrono::{SecondsFormat, Utc};

use super::super::state::AppState;
use super::super::types::{ApiResult, HealthResponse, ok};

pub const SERVICE_NAME: &str = "order-service";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Health check endpoint
///
/// Reports service identity, server time and the current number of stored
/// orders. Reads the store size and nothing else.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> ApiResult<HealthResponse> {
    let orders_count = state.store.len()?;

    ok(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        version: SERVICE_VERSION.to_string(),
        orders_count,
    })
}
