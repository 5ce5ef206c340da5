//! Tracing setup for the embedding application.
//!
//! The core itself only emits `tracing` events; the process that hosts it calls
//! [`init_telemetry`] once at startup to install a JSON subscriber.

use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

use crate::error::AppError;

/// Installs the global tracing subscriber.
///
/// `default_filter` applies when `RUST_LOG` is unset (e.g. `"info"`).
/// Calling this twice is an error; hosts should call it exactly once.
pub fn init_telemetry(name: &str, default_filter: &str) -> Result<(), AppError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let formatting_layer = BunyanFormattingLayer::new(name.to_string(), std::io::stdout);

    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    set_global_default(subscriber)
        .map_err(|e| AppError::Config(format!("Failed to install tracing subscriber: {}", e)))
}
