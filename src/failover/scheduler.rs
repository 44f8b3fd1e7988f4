//! Periodic probe-and-apply loop.
//!
//! # Responsibilities
//! - Tick on a fixed interval, measured tick-start to tick-start
//! - Fire one immediate tick at startup
//! - Enforce single-flight: an overlapping tick is dropped, not queued
//!
//! # Design Decisions
//! - One task owns prober, debouncer and controller, so each probe result
//!   is fully processed before the next probe starts and no locks are
//!   needed
//! - Every tick re-applies the current desired mode, which is what retries
//!   a failed actuator call
//! - Probe and actuator failures never break the loop; only the shutdown
//!   signal ends it

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time;

use crate::actuator::Actuator;
use crate::failover::{Debouncer, ModeController};
use crate::observability::metrics;
use crate::probe::Probe;

pub struct FailoverLoop<P: Probe, A: Actuator> {
    prober: P,
    debouncer: Debouncer,
    controller: ModeController<A>,
    interval: Duration,
}

impl<P: Probe, A: Actuator> FailoverLoop<P, A> {
    pub fn new(
        prober: P,
        debouncer: Debouncer,
        controller: ModeController<A>,
        interval: Duration,
    ) -> Self {
        Self {
            prober,
            debouncer,
            controller,
            interval,
        }
    }

    /// Run until the shutdown signal fires. The first tick is immediate.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            "Failover loop starting"
        );

        // Tick deadlines stay aligned to loop start + k * interval, so the
        // schedule does not drift with probe latency.
        let mut next_tick = time::Instant::now();

        loop {
            tokio::select! {
                _ = time::sleep_until(next_tick) => {
                    self.tick().await;
                    // Deadlines that came due while the cycle ran are
                    // dropped, not queued.
                    let now = time::Instant::now();
                    while next_tick <= now {
                        next_tick += self.interval;
                    }
                }
                _ = shutdown.recv() => {
                    tracing::info!("Failover loop received shutdown signal, exiting");
                    break;
                }
            }
        }
    }

    /// One probe-and-apply cycle.
    pub async fn tick(&mut self) {
        let result = self.prober.probe().await;
        metrics::record_probe(result.success, result.latency);

        let decision = self.debouncer.observe(&result);
        if let Some(mode) = decision {
            let state = self.debouncer.state();
            tracing::info!(
                mode = %mode,
                consecutive_failures = state.consecutive_failures,
                consecutive_successes = state.consecutive_successes,
                "Debounce threshold crossed"
            );
        }

        let desired = decision.unwrap_or_else(|| self.controller.desired_mode());
        match self.controller.apply_if_changed(desired).await {
            Ok(true) => metrics::record_transition(desired),
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(
                    mode = %desired,
                    error = %e,
                    "Actuator call failed, retrying next tick"
                );
                metrics::record_actuator_failure();
            }
        }
    }
}
