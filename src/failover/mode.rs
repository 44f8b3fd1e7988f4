//! Operating mode of the relay channel.

use serde::{Deserialize, Serialize};

/// Input-handling mode of the controlled relay channel.
///
/// Exactly one mode is active at any instant. A fresh process always starts
/// in `Detached`, the fail-safe default that keeps the downstream device
/// powered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Output held fixed (energized); physical input ignored. Active while
    /// the automation server is reachable and handling the input itself.
    Detached,
    /// Output mirrors the physical input directly. Failover behavior while
    /// the automation server is unreachable.
    Follow,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Detached => "detached",
            Mode::Follow => "follow",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
