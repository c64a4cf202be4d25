//! Profile store and persistence traits.

use async_trait::async_trait;

use crate::error::Result;
use crate::profile::model::{Profile, ProfileUpdate};

/// Shared holder of the last-committed profile.
///
/// Created once by the application root and injected into form controllers.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Returns the current committed profile.
    ///
    /// Fields that were never set are empty (`Gender::Unset` for gender).
    async fn read(&self) -> Profile;

    /// Merges the provided fields into the stored profile.
    async fn apply(&self, update: ProfileUpdate) -> Result<()>;
}

/// The asynchronous step that follows a store update before a submission
/// counts as persisted.
///
/// Today this is a simulated round trip; a real backend call slots in here
/// without changing the submission state machine.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    async fn persist(&self, profile: &Profile) -> Result<()>;
}
