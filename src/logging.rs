//! Tracing subscriber setup for binaries and tests that embed the core.
//!
//! The `DRAGNET_LOG` environment variable wins over the configured filter.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_VAR: &str = "DRAGNET_LOG";

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Build the filter: `DRAGNET_LOG` if set and valid, else `fallback`, else `info`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER))
}

/// Install a global fmt subscriber once. Later calls are no-ops, as is a call
/// made after another subscriber was installed elsewhere.
pub fn init_logging(fallback_filter: &str) {
    INITIALIZED.get_or_init(|| {
        let result = tracing_subscriber::fmt()
            .with_env_filter(env_filter(fallback_filter))
            .with_target(false)
            .try_init();
        if result.is_err() {
            tracing::debug!("Global subscriber already set, keeping it");
        }
    });
}
