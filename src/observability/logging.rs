//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Derive the default filter from config; `RUST_LOG` overrides it
//!
//! # Design Decisions
//! - `debug = true` only raises verbosity; it never changes behavior

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Install the global tracing subscriber.
pub fn init(config: &ObservabilityConfig) {
    let default_level = if config.debug {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let default_filter = format!("relayguard={}", default_level);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
