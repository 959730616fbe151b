use serde::{Deserialize, Serialize};

/// A user record as handed out by the profile store.
///
/// Profiles are immutable once fetched; two profiles are the same user when
/// their `id`s match, regardless of username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
}

impl UserProfile {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }

    /// Create a profile with a freshly generated opaque id
    pub fn with_generated_id(username: impl Into<String>) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), username)
    }

    pub fn same_user(&self, other: &UserProfile) -> bool {
        self.id == other.id
    }
}
