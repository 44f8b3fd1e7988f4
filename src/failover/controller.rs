//! Idempotent mode application through the actuator.
//!
//! # Responsibilities
//! - Hold the desired and last-applied mode for the controlled channel
//! - Apply debounced decisions through the actuator
//! - Never issue a redundant device call for an unchanged mode
//!
//! # Design Decisions
//! - The live device mode is queried before writing, so out-of-band
//!   changes that already match the decision are not clobbered
//! - A failed device call leaves `last_applied` stale; the next tick
//!   carries the same desired mode and retries

use crate::actuator::{Actuator, ActuatorError};
use crate::failover::Mode;

/// Desired and applied mode for one relay channel. Process lifetime only;
/// a restart begins at `Detached` on both sides.
#[derive(Debug)]
pub struct ControllerState {
    /// Mode most recently decided by the debouncer.
    pub current_mode: Mode,
    /// Mode the actuator last acknowledged.
    pub last_applied: Mode,
}

pub struct ModeController<A: Actuator> {
    actuator: A,
    channel_id: u32,
    state: ControllerState,
}

impl<A: Actuator> ModeController<A> {
    pub fn new(actuator: A, channel_id: u32) -> Self {
        Self {
            actuator,
            channel_id,
            state: ControllerState {
                current_mode: Mode::Detached,
                last_applied: Mode::Detached,
            },
        }
    }

    /// The mode the system currently wants the channel in.
    pub fn desired_mode(&self) -> Mode {
        self.state.current_mode
    }

    pub fn last_applied(&self) -> Mode {
        self.state.last_applied
    }

    /// Record `desired` and push it to the device if it is not already
    /// applied. Returns true when a `set_mode` call was issued.
    ///
    /// On an actuator error `last_applied` is left unchanged, so calling
    /// again with the same mode retries the device call.
    pub async fn apply_if_changed(&mut self, desired: Mode) -> Result<bool, ActuatorError> {
        self.state.current_mode = desired;

        if desired == self.state.last_applied {
            return Ok(false);
        }

        // Respect out-of-band changes: only write when the live mode
        // actually differs.
        let live = self.actuator.get_mode(self.channel_id).await?;
        if live == desired {
            tracing::debug!(
                channel = self.channel_id,
                mode = %desired,
                "Device already in desired mode"
            );
            self.state.last_applied = desired;
            return Ok(false);
        }

        tracing::info!(
            channel = self.channel_id,
            from = %live,
            to = %desired,
            "Applying mode transition"
        );
        self.actuator.set_mode(self.channel_id, desired).await?;
        self.state.last_applied = desired;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// Scripted in-memory relay device.
    struct FakeRelay {
        live_mode: Mutex<Mode>,
        set_calls: Mutex<Vec<Mode>>,
        fail_sets: AtomicBool,
    }

    impl FakeRelay {
        fn new(live_mode: Mode) -> Self {
            Self {
                live_mode: Mutex::new(live_mode),
                set_calls: Mutex::new(Vec::new()),
                fail_sets: AtomicBool::new(false),
            }
        }

        fn set_calls(&self) -> Vec<Mode> {
            self.set_calls.lock().unwrap().clone()
        }
    }

    impl Actuator for &FakeRelay {
        async fn get_mode(&self, _channel_id: u32) -> Result<Mode, ActuatorError> {
            Ok(*self.live_mode.lock().unwrap())
        }

        async fn set_mode(&self, _channel_id: u32, mode: Mode) -> Result<(), ActuatorError> {
            if self.fail_sets.load(Ordering::SeqCst) {
                return Err(ActuatorError::Rejected(503));
            }
            self.set_calls.lock().unwrap().push(mode);
            *self.live_mode.lock().unwrap() = mode;
            Ok(())
        }
    }

    #[tokio::test]
    async fn unchanged_mode_is_a_noop() {
        let relay = FakeRelay::new(Mode::Detached);
        let mut controller = ModeController::new(&relay, 0);

        assert!(!controller.apply_if_changed(Mode::Detached).await.unwrap());
        assert!(!controller.apply_if_changed(Mode::Detached).await.unwrap());
        assert!(relay.set_calls().is_empty());
    }

    #[tokio::test]
    async fn transition_issues_one_call_then_noops() {
        let relay = FakeRelay::new(Mode::Detached);
        let mut controller = ModeController::new(&relay, 0);

        assert!(controller.apply_if_changed(Mode::Follow).await.unwrap());
        assert!(!controller.apply_if_changed(Mode::Follow).await.unwrap());
        assert_eq!(relay.set_calls(), vec![Mode::Follow]);
        assert_eq!(controller.last_applied(), Mode::Follow);
    }

    #[tokio::test]
    async fn out_of_band_match_skips_the_write() {
        // Device was flipped to Follow behind our back.
        let relay = FakeRelay::new(Mode::Follow);
        let mut controller = ModeController::new(&relay, 0);

        assert!(!controller.apply_if_changed(Mode::Follow).await.unwrap());
        assert!(relay.set_calls().is_empty());
        assert_eq!(controller.last_applied(), Mode::Follow);
    }

    #[tokio::test]
    async fn failed_set_keeps_last_applied_and_retries() {
        let relay = FakeRelay::new(Mode::Detached);
        let mut controller = ModeController::new(&relay, 0);

        relay.fail_sets.store(true, Ordering::SeqCst);
        assert!(controller.apply_if_changed(Mode::Follow).await.is_err());
        assert_eq!(controller.last_applied(), Mode::Detached);
        assert_eq!(controller.desired_mode(), Mode::Follow);

        // Next tick carries the same desired mode and the call goes through.
        relay.fail_sets.store(false, Ordering::SeqCst);
        assert!(controller.apply_if_changed(Mode::Follow).await.unwrap());
        assert_eq!(relay.set_calls(), vec![Mode::Follow]);
        assert_eq!(controller.last_applied(), Mode::Follow);
    }

    #[tokio::test]
    async fn never_two_identical_calls_in_succession() {
        let relay = FakeRelay::new(Mode::Detached);
        let mut controller = ModeController::new(&relay, 0);

        for mode in [
            Mode::Follow,
            Mode::Follow,
            Mode::Detached,
            Mode::Detached,
            Mode::Follow,
        ] {
            let _ = controller.apply_if_changed(mode).await;
        }

        let calls = relay.set_calls();
        assert_eq!(calls, vec![Mode::Follow, Mode::Detached, Mode::Follow]);
        for pair in calls.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
