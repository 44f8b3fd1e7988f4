//! Reachability-driven relay failover controller.

pub mod actuator;
pub mod config;
pub mod failover;
pub mod lifecycle;
pub mod observability;
pub mod probe;

pub use actuator::Actuator;
pub use config::FailoverConfig;
pub use failover::{FailoverLoop, Mode};
pub use lifecycle::Shutdown;
