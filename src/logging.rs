use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. Keep the returned guards alive for the
/// process lifetime or buffered lines are lost on exit.
pub fn init_logging(config: &AppConfig) -> Vec<WorkerGuard> {
    let mut guards = Vec::new();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let (stdout, guard) = tracing_appender::non_blocking(std::io::stdout());
    guards.push(guard);

    let file_writer = config.log_dir.as_ref().map(|dir| {
        let file_appender = match config.rotation.as_str() {
            "hourly" => tracing_appender::rolling::hourly(dir, &config.log_file),
            "daily" => tracing_appender::rolling::daily(dir, &config.log_file),
            _ => tracing_appender::rolling::never(dir, &config.log_file),
        };
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        guards.push(guard);
        writer
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        let stdout_layer = fmt::layer()
            .json()
            .with_target(true) // Keep target in JSON for structured queries
            .with_writer(stdout)
            .with_ansi(false);
        let file_layer = file_writer.map(|w| {
            fmt::layer()
                .json()
                .with_target(true)
                .with_writer(w)
                .with_ansi(false)
        });
        registry.with(stdout_layer).with(file_layer).init();
    } else {
        let stdout_layer = fmt::layer()
            .with_target(false)
            .with_writer(stdout)
            .with_ansi(stdout_ansi(config));
        let file_layer = file_writer.map(|w| {
            fmt::layer()
                .with_target(false)
                .with_writer(w)
                .with_ansi(false)
        });
        registry.with(stdout_layer).with(file_layer).init();
    }

    guards
}

/// Colored text only outside production, where stdout goes to a log collector.
fn stdout_ansi(config: &AppConfig) -> bool {
    !config.use_json && !config.is_production()
}
