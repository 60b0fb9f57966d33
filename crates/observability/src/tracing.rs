//! Tracing subscriber configuration.

use tracing_subscriber::EnvFilter;

/// Install a compact fmt subscriber filtered via `RUST_LOG` (default `info`).
///
/// Compact output suits the short-lived CLI; a second call is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .try_init();
}
