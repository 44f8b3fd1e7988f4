//! Liveness probing subsystem.
//!
//! # Data Flow
//! ```text
//! Scheduler tick
//!     → HttpProber issues one bounded GET against the liveness endpoint
//!     → outcome folded into a ProbeResult (never an error)
//!     → ProbeResult consumed by the debouncer
//! ```
//!
//! # Design Decisions
//! - Every failure class (non-2xx, connect error, timeout, bad request)
//!   is uniformly a failing result; subtypes matter only for logging
//! - The prober holds no mutable state and never touches controller state
//! - Single-flight is the scheduler's job, not the prober's

pub mod http;

pub use http::HttpProber;

use std::future::Future;
use std::time::{Duration, SystemTime};

/// Outcome of a single liveness probe. Ephemeral; consumed immediately by
/// the debouncer and never persisted.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// Whether the endpoint answered with a 2xx within the timeout.
    pub success: bool,
    /// Wall-clock time the probe completed.
    pub checked_at: SystemTime,
    /// Time from request start to outcome.
    pub latency: Duration,
    /// Failure description, for logging only.
    pub error_detail: Option<String>,
}

impl ProbeResult {
    pub fn ok(latency: Duration) -> Self {
        Self {
            success: true,
            checked_at: SystemTime::now(),
            latency,
            error_detail: None,
        }
    }

    pub fn failed(latency: Duration, detail: impl Into<String>) -> Self {
        Self {
            success: false,
            checked_at: SystemTime::now(),
            latency,
            error_detail: Some(detail.into()),
        }
    }
}

/// A liveness check against the remote automation server.
pub trait Probe {
    /// Run one probe to completion. Infallible by design: every failure is
    /// folded into a failing [`ProbeResult`].
    fn probe(&self) -> impl Future<Output = ProbeResult> + Send;
}
