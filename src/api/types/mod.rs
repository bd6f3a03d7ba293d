//! API boundary types
//!
//! ## Input Types
//! - [`CreateOrderRequest`], [`UpdateStatusRequest`]: JSON bodies
//! - [`ValidatedJson`]: extractor that turns every body problem into a 400
//!
//! ## Output Types
//! - [`ApiError`] / [`ApiResult`]: error mapping and success helpers
//! - [`OrderListResponse`], [`MessageResponse`], [`HealthResponse`]

pub mod order;
pub mod response;

pub use order::{CreateOrderRequest, UpdateStatusRequest, ValidatedJson, order_filter_from_query};
pub use response::{
    ApiError, ApiResult, ErrorResponse, HealthResponse, MessageResponse, OrderListResponse,
    created, ok,
};
