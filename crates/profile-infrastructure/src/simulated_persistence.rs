//! Stand-in for the network round trip that follows a profile commit.

use std::time::Duration;

use async_trait::async_trait;
use profile_core::config::FormSettings;
use profile_core::error::Result;
use profile_core::profile::{PersistenceGateway, Profile};

/// Waits a fixed delay and reports success.
#[derive(Debug, Clone)]
pub struct SimulatedPersistence {
    delay: Duration,
}

impl SimulatedPersistence {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_settings(settings: &FormSettings) -> Self {
        Self::new(settings.commit_latency())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedPersistence {
    fn default() -> Self {
        Self::from_settings(&FormSettings::default())
    }
}

#[async_trait]
impl PersistenceGateway for SimulatedPersistence {
    async fn persist(&self, _profile: &Profile) -> Result<()> {
        tracing::debug!("[Persistence] Simulating round trip of {:?}", self.delay);
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
