//! Tracing initialization for the binaries.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

pub const LOG_ENV_VAR: &str = "MLMATH_LOG";

/// Installs a stderr fmt subscriber filtered by `MLMATH_LOG`.
///
/// Falls back to `mlmath=info` when the variable is unset or invalid. Safe to
/// call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("mlmath=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
