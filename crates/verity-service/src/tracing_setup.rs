//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use verity_core::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding an `EnvFilter` directive, e.g.
/// `VERITY_LOG=verity=debug,verity_index=trace`.
pub const LOG_ENV_VAR: &str = "VERITY_LOG";

/// Install the global subscriber.
///
/// `VERITY_LOG` wins over `config.log_filter`. Later calls are no-ops, and
/// an already installed global subscriber is left in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
        let registry = tracing_subscriber::registry().with(filter);

        let installed = if config.json_logs {
            registry
                .with(fmt::layer().json().with_target(true).with_current_span(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        if installed.is_err() {
            tracing::debug!("global tracing subscriber already set");
        }
    });
}
