//! Test support for the XMSS parameter registry
//!
//! Known-answer vectors live in `src/vectors/xmss_params.toml`; the
//! integration tests under `tests/` load them through [`vectors::VECTORS`].

pub mod vectors;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber honouring `RUST_LOG`, once per binary
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
