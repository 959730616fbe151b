//! Port to the backend that owns user profiles.

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::models::UserProfile;

/// Backend holding user profiles.
///
/// Both calls fail with [`ServiceError::NotInitialized`] until the session
/// gate is open. Calls may overlap; no ordering is promised between them.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Snapshot of every profile. Later mutations are not reflected in it.
    async fn fetch_all(&self) -> Result<Vec<UserProfile>, ServiceError>;

    /// Remove exactly one profile with `id`, or fail with `NotFound`.
    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError>;
}
