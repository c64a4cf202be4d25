//! Session-scoped profile store.
//!
//! Holds the committed profile in memory for the lifetime of the process.
//! Nothing is written to disk.

use std::sync::Arc;

use async_trait::async_trait;
use profile_core::error::Result;
use profile_core::profile::{Profile, ProfileStore, ProfileUpdate};
use tokio::sync::RwLock;

/// In-memory implementation of [`ProfileStore`].
///
/// Cloning shares the same underlying profile, so the application root can
/// keep a handle while controllers receive their own.
///
/// # Example
///
/// ```
/// use profile_core::profile::{ProfileStore, ProfileUpdate};
/// use profile_infrastructure::InMemoryProfileStore;
///
/// # tokio_test_block_on(async {
/// let store = InMemoryProfileStore::new();
/// store
///     .apply(ProfileUpdate {
///         first_name: Some("Jane".to_string()),
///         ..Default::default()
///     })
///     .await
///     .unwrap();
/// assert_eq!(store.read().await.first_name, "Jane");
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profile: Arc<RwLock<Profile>>,
}

impl InMemoryProfileStore {
    /// Creates a store whose profile is all-empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with an existing profile.
    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile: Arc::new(RwLock::new(profile)),
        }
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn read(&self) -> Profile {
        self.profile.read().await.clone()
    }

    async fn apply(&self, update: ProfileUpdate) -> Result<()> {
        if update.is_empty() {
            tracing::debug!("[ProfileStore] Ignoring empty update");
            return Ok(());
        }

        let mut profile = self.profile.write().await;
        profile.merge(update);
        tracing::debug!("[ProfileStore] Profile updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_core::profile::Gender;

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = InMemoryProfileStore::new();
        assert_eq!(store.read().await, Profile::default());
    }

    #[tokio::test]
    async fn test_apply_merges_partial_update() {
        let store = InMemoryProfileStore::with_profile(Profile {
            first_name: "Jane".to_string(),
            phone: "5551234567".to_string(),
            ..Default::default()
        });

        store
            .apply(ProfileUpdate {
                last_name: Some("Doe".to_string()),
                gender: Some(Gender::Female),
                ..Default::default()
            })
            .await
            .unwrap();

        let profile = store.read().await;
        assert_eq!(profile.first_name, "Jane");
        assert_eq!(profile.last_name, "Doe");
        assert_eq!(profile.phone, "5551234567");
        assert_eq!(profile.gender, Gender::Female);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let root = InMemoryProfileStore::new();
        let handle = root.clone();

        handle
            .apply(ProfileUpdate {
                email: Some("jane@example.com".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(root.read().await.email, "jane@example.com");
    }
}
