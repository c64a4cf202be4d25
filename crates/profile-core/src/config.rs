use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 3_000;
pub const DEFAULT_COMMIT_LATENCY_MS: u64 = 1_000;

/// Timing settings for the profile form.
///
/// Loaded from `settings.toml`; every key is optional.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FormSettings {
    /// How long a notification stays visible before it dismisses itself.
    pub notification_timeout_ms: u64,
    /// Simulated round trip after a profile is committed.
    pub commit_latency_ms: u64,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            notification_timeout_ms: DEFAULT_NOTIFICATION_TIMEOUT_MS,
            commit_latency_ms: DEFAULT_COMMIT_LATENCY_MS,
        }
    }
}

impl FormSettings {
    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }

    pub fn commit_latency(&self) -> Duration {
        Duration::from_millis(self.commit_latency_ms)
    }
}
