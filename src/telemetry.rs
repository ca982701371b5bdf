//! Tracing subscriber setup for binaries and examples.
//!
//! Filter comes from `RUST_LOG` (default `info`). Set
//! `CPUSCHED_TRACE_JSON=1` for JSON lines instead of human-readable output.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable that switches output to JSON.
pub const TRACE_JSON_ENV: &str = "CPUSCHED_TRACE_JSON";

/// Installs the global tracing subscriber, writing to stderr.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if json_requested(std::env::var(TRACE_JSON_ENV).ok().as_deref()) {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_ok() {
        tracing::debug!("tracing initialized");
    }
}

fn json_requested(value: Option<&str>) -> bool {
    matches!(value, Some("1") | Some("true"))
}
