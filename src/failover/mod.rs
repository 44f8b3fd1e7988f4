//! Failover control subsystem.
//!
//! # Data Flow
//! ```text
//! Scheduler tick (scheduler.rs):
//!     Drift-free interval, single-flight
//!     → one probe per tick
//!     → ProbeResult into debounce.rs
//!
//! Debounce (debounce.rs):
//!     failure_threshold consecutive failures → emit Follow (once)
//!     first success → emit Detached (once)
//!
//! Controller (controller.rs):
//!     Detached ←→ Follow
//!     Applies decisions through the actuator, idempotently
//! ```
//!
//! # Design Decisions
//! - Asymmetric thresholds: failure is debounced, restoration is immediate
//! - One coordinating loop owns all state; no locks needed
//! - Startup mode is always Detached; nothing persists across restarts

pub mod controller;
pub mod debounce;
pub mod mode;
pub mod scheduler;

pub use controller::ModeController;
pub use debounce::Debouncer;
pub use mode::Mode;
pub use scheduler::FailoverLoop;
