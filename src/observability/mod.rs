//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout log lines
//!     → Prometheus scrape endpoint
//! ```
//!
//! # Design Decisions
//! - Every probe outcome, threshold crossing and actuator attempt is logged
//!   with its counters as structured fields
//! - Metrics are cheap (atomic increments) and optional

pub mod logging;
pub mod metrics;
