//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relayguard_probes_total` (counter): probe outcomes by result
//! - `relayguard_probe_duration_seconds` (histogram): probe latency
//! - `relayguard_mode_transitions_total` (counter): applied transitions
//! - `relayguard_actuator_failures_total` (counter): failed device calls
//! - `relayguard_mode` (gauge): 0 = detached, 1 = follow

use std::net::SocketAddr;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::failover::Mode;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_probe(success: bool, latency: Duration) {
    let outcome = if success { "success" } else { "failure" };
    metrics::counter!("relayguard_probes_total", "outcome" => outcome).increment(1);
    metrics::histogram!("relayguard_probe_duration_seconds").record(latency.as_secs_f64());
}

pub fn record_transition(mode: Mode) {
    metrics::counter!("relayguard_mode_transitions_total", "mode" => mode.as_str()).increment(1);
    let value = match mode {
        Mode::Detached => 0.0,
        Mode::Follow => 1.0,
    };
    metrics::gauge!("relayguard_mode").set(value);
}

pub fn record_actuator_failure() {
    metrics::counter!("relayguard_actuator_failures_total").increment(1);
}
