//! Debounced mode decisions from raw probe outcomes.
//!
//! # State Transitions
//! ```text
//! failing probe:  failures += 1, successes = 0
//!                 failures == failure_threshold (exactly) → emit Follow
//! passing probe:  successes += 1, failures = 0
//!                 successes == 1 (exactly) → emit Detached
//! ```
//!
//! # Design Decisions
//! - Edge-triggered: each threshold crossing emits once, never repeatedly
//! - Strict alternation reset: one success zeroes the failure run and
//!   vice versa
//! - Asymmetric on purpose: declaring the server down takes a debounced
//!   run of failures, declaring it back takes a single success

use crate::failover::Mode;
use crate::probe::ProbeResult;

/// Consecutive-outcome counters. Owned exclusively by the [`Debouncer`].
#[derive(Debug, Default)]
pub struct DebounceState {
    pub consecutive_failures: u32,
    pub consecutive_successes: u32,
}

/// Turns a stream of probe outcomes into stable mode decisions.
pub struct Debouncer {
    failure_threshold: u32,
    state: DebounceState,
}

impl Debouncer {
    pub fn new(failure_threshold: u32) -> Self {
        Self {
            failure_threshold,
            state: DebounceState::default(),
        }
    }

    /// Feed one probe outcome; returns a mode decision only when a
    /// threshold newly fires.
    pub fn observe(&mut self, result: &ProbeResult) -> Option<Mode> {
        if result.success {
            self.state.consecutive_failures = 0;
            self.state.consecutive_successes =
                self.state.consecutive_successes.saturating_add(1);

            (self.state.consecutive_successes == 1).then_some(Mode::Detached)
        } else {
            self.state.consecutive_successes = 0;
            self.state.consecutive_failures =
                self.state.consecutive_failures.saturating_add(1);

            (self.state.consecutive_failures == self.failure_threshold).then_some(Mode::Follow)
        }
    }

    pub fn state(&self) -> &DebounceState {
        &self.state
    }
}
