//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the gapscan tracing/logging system.
///
/// Reads the `GAPSCAN_LOG` environment variable for per-subsystem log
/// levels, e.g. `GAPSCAN_LOG=gapscan_analysis=debug,gapscan_core=info`.
/// Falls back to `gapscan=info` if `GAPSCAN_LOG` is not set or is invalid.
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("GAPSCAN_LOG")
            .unwrap_or_else(|_| EnvFilter::new("gapscan=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
