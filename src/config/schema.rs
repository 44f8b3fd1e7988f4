//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! failover controller. All types derive Serde traits for deserialization
//! from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the failover controller.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FailoverConfig {
    /// Liveness probe settings (endpoint, credential, timeout).
    pub probe: ProbeConfig,

    /// Probe scheduling settings.
    pub scheduler: SchedulerConfig,

    /// Debounce thresholds.
    pub debounce: DebounceConfig,

    /// Relay actuator settings.
    pub actuator: ActuatorConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Liveness probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// URL of the liveness endpoint on the remote automation server.
    pub endpoint: String,

    /// Optional opaque bearer token sent with each probe.
    pub credential: Option<String>,

    /// Probe timeout in seconds. A probe exceeding this counts as a failure.
    pub timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            credential: None,
            timeout_secs: 5,
        }
    }
}

/// Probe scheduling configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Probe interval in seconds, measured tick-start to tick-start.
    pub interval_secs: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self { interval_secs: 10 }
    }
}

/// Debounce configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Number of consecutive probe failures before switching to Follow.
    ///
    /// The success direction is intentionally not configurable: a single
    /// successful probe always restores Detached.
    pub failure_threshold: u32,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 3,
        }
    }
}

/// Relay actuator configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ActuatorConfig {
    /// Base URL of the relay device adapter.
    pub endpoint: String,

    /// Optional opaque bearer token for device calls.
    pub credential: Option<String>,

    /// Relay channel to control.
    pub channel_id: u32,

    /// Device call timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ActuatorConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            credential: None,
            channel_id: 0,
            timeout_secs: 5,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Verbose diagnostic output. Raises the crate log level to debug;
    /// has no behavioral effect.
    pub debug: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            debug: false,
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
