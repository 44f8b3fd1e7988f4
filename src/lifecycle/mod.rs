//! Process lifecycle.
//!
//! # Data Flow
//! ```text
//! SIGINT / SIGTERM
//!     → signals.rs (translate to internal event)
//!     → shutdown.rs (broadcast to long-running tasks)
//!     → failover loop exits cleanly
//! ```
//!
//! # Design Decisions
//! - Startup is fail-fast: config errors abort before any task spawns
//! - Shutdown is cooperative via a broadcast channel

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
