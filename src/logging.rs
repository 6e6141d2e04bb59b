//! # Logging
//!
//! Installs the `tracing` subscriber used by the `loot` binary.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_ENV_VAR};

/// Builds the filter from `LOOTLIST_LOG`, falling back to `default_level`.
pub fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs a stderr fmt layer. Calling it twice is a no-op.
pub fn init(default_level: &str) {
    let _ = tracing_subscriber::registry()
        .with(filter(default_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
