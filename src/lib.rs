//! Order Service
//!
//! HTTP resource service over an in-memory collection of orders.
//!
//! # Modules
//!
//! - [`models`] - Order and Item records, total computation
//! - [`store`] - Mutex-guarded in-memory order store
//! - [`api`] - Axum router, handlers, middleware, OpenAPI
//! - [`config`] - YAML + environment configuration
//! - [`logging`] - tracing subscriber setup

pub mod api;
pub mod config;
pub mod logging;
pub mod models;
pub mod store;

// Convenient re-exports at crate root
pub use api::state::AppState;
pub use api::{build_router, run_server, serve};
pub use config::AppConfig;
pub use models::{Item, Order};
pub use store::{OrderFilter, OrderStore, StoreError};

/// Source revision baked in at build time (`unknown` outside a git checkout).
pub const BUILD_REVISION: &str = env!("GIT_HASH");
