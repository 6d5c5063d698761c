//! Shared helpers for integration tests.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize tracing for tests, honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs a subscriber.
#[allow(dead_code)]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
