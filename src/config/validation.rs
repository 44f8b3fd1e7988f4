//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (interval > 0, threshold >= 1)
//! - Check endpoints parse as http(s) URLs
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FailoverConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::FailoverConfig;

/// A single semantic configuration error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("probe.endpoint is required")]
    MissingProbeEndpoint,

    #[error("probe.endpoint is not a valid http(s) URL: {0}")]
    InvalidProbeEndpoint(String),

    #[error("probe.timeout_secs must be greater than zero")]
    ZeroProbeTimeout,

    #[error("scheduler.interval_secs must be greater than zero")]
    ZeroInterval,

    #[error("debounce.failure_threshold must be at least 1")]
    ZeroFailureThreshold,

    #[error("actuator.endpoint is required")]
    MissingActuatorEndpoint,

    #[error("actuator.endpoint is not a valid http(s) URL: {0}")]
    InvalidActuatorEndpoint(String),

    #[error("actuator.timeout_secs must be greater than zero")]
    ZeroActuatorTimeout,

    #[error("observability.metrics_address is not a valid socket address: {0}")]
    InvalidMetricsAddress(String),
}

/// Validate a parsed configuration, collecting every error found.
pub fn validate_config(config: &FailoverConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.probe.endpoint.is_empty() {
        errors.push(ValidationError::MissingProbeEndpoint);
    } else if !is_http_url(&config.probe.endpoint) {
        errors.push(ValidationError::InvalidProbeEndpoint(
            config.probe.endpoint.clone(),
        ));
    }

    if config.probe.timeout_secs == 0 {
        errors.push(ValidationError::ZeroProbeTimeout);
    }

    if config.scheduler.interval_secs == 0 {
        errors.push(ValidationError::ZeroInterval);
    }

    if config.debounce.failure_threshold == 0 {
        errors.push(ValidationError::ZeroFailureThreshold);
    }

    if config.actuator.endpoint.is_empty() {
        errors.push(ValidationError::MissingActuatorEndpoint);
    } else if !is_http_url(&config.actuator.endpoint) {
        errors.push(ValidationError::InvalidActuatorEndpoint(
            config.actuator.endpoint.clone(),
        ));
    }

    if config.actuator.timeout_secs == 0 {
        errors.push(ValidationError::ZeroActuatorTimeout);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<std::net::SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => url.scheme() == "http" || url.scheme() == "https",
        Err(_) => false,
    }
}
