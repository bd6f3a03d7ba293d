//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:3002/docs`
//! - OpenAPI JSON: `http://localhost:3002/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::api::types::{
    CreateOrderRequest, ErrorResponse, HealthResponse, MessageResponse, OrderListResponse,
    UpdateStatusRequest,
};
use crate::models::{Item, Order};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Service API",
        version = "1.0.0",
        description = "CRUD over in-memory orders with filtered listing.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:3002", description = "Development"),
    ),
    paths(
        crate::api::handlers::health_check,
        crate::api::handlers::create_order,
        crate::api::handlers::list_orders,
        crate::api::handlers::get_order,
        crate::api::handlers::update_order_status,
        crate::api::handlers::delete_order,
    ),
    components(
        schemas(
            Order,
            Item,
            CreateOrderRequest,
            UpdateStatusRequest,
            OrderListResponse,
            MessageResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Orders", description = "Order creation, lookup, status updates and deletion"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
