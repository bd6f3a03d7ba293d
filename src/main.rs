//! Order Service entry point.
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│  Store   │───▶│   HTTP   │
//! │ (YAML +  │    │ (seeded) │    │  (axum)  │
//! │   env)   │    └──────────┘    └──────────┘
//! └──────────┘
//! ```

use std::sync::Arc;

use order_service::{AppConfig, AppState, BUILD_REVISION, OrderStore, logging, run_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    let _log_guards = logging::init_logging(&config);

    tracing::info!(
        "Starting order-service v{} ({}) in {} mode",
        env!("CARGO_PKG_VERSION"),
        BUILD_REVISION,
        config.environment
    );

    let state = if config.seed_sample_data {
        tracing::info!("Seeding store with sample order");
        AppState::with_sample_data()
    } else {
        AppState::new(OrderStore::new())
    };

    run_server(&config, Arc::new(state)).await
}
