// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tracing setup for the `stroke` binary and for tests that want logs.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `STROKE_LOG=stroke_search=debug`.
pub const LOG_ENV: &str = "STROKE_LOG";

const DEFAULT_FILTER: &str = "stroke_search=warn";

static INIT: Once = Once::new();

/// Install a stderr subscriber filtered by `STROKE_LOG`.
///
/// Falls back to `stroke_search=warn` if the variable is unset or invalid.
/// Safe to call more than once; later calls do nothing. If some other
/// subscriber is already installed it is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_names(true),
            )
            .with(filter)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::info!("logging initialised twice without panicking");
    }
}
