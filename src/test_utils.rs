//! Shared helpers for tests.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Initializes tracing output for tests.
///
/// Honors `RUST_LOG` when set, defaulting to `debug` for this crate.
/// Safe to call from every test; only the first call installs the
/// subscriber.
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("signalhub=debug"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
