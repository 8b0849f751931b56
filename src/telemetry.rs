//! Telemetry logic.
//! Structured logging through `tracing`.
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "signup=info,tower_http=info";

/// Install the global subscriber.
///
/// Filter comes from `RUST_LOG`, with [`DEFAULT_FILTER`] as fallback.
pub fn setup_logging() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
}
