//! Relay actuator seam.
//!
//! # Responsibilities
//! - Define the abstract device interface the controller drives
//! - Define the actuator error taxonomy
//!
//! # Design Decisions
//! - Device-specific protocols stay behind this trait; the controller only
//!   sees modes and channels
//! - Actuator errors are never fatal; the caller logs and retries next tick

pub mod http;

pub use http::HttpActuator;

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::failover::Mode;

/// Errors from relay device calls.
#[derive(Debug, Error)]
pub enum ActuatorError {
    /// Connection-level failure reaching the device.
    #[error("transport error: {0}")]
    Transport(String),

    /// Device call did not complete within the configured timeout.
    #[error("device call timed out after {0:?}")]
    Timeout(Duration),

    /// Device answered but refused the call.
    #[error("device rejected call: HTTP {0}")]
    Rejected(u16),

    /// Device answered with a body we could not interpret.
    #[error("malformed device response: {0}")]
    Malformed(String),
}

/// Abstract relay device interface.
///
/// `set_mode` carries the fixed input-handling policy: `Detached` holds the
/// output energized and ignores the physical input, `Follow` mirrors the
/// physical input directly.
pub trait Actuator {
    /// Report the mode the device currently has configured for a channel.
    fn get_mode(
        &self,
        channel_id: u32,
    ) -> impl Future<Output = Result<Mode, ActuatorError>> + Send;

    /// Reconfigure a channel's input-handling mode.
    fn set_mode(
        &self,
        channel_id: u32,
        mode: Mode,
    ) -> impl Future<Output = Result<(), ActuatorError>> + Send;
}
