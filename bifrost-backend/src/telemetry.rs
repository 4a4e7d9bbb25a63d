use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_LOG_LEVEL: &str =
    "info,bifrost_backend=debug,bifrost_database=debug,bifrost_identity=debug,hyper=info";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn setup_logging() -> Result<(), TryInitError> {
    let stdout_log = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(stdout_log.with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into()),
        ))
        .try_init()
}
