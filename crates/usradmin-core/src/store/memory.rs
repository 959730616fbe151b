use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use rand::Rng;
use tracing::{debug, warn};

use super::ProfileStore;
use crate::config::{CoreConfig, LatencyConfig};
use crate::constants::SEED_USERNAMES;
use crate::error::ServiceError;
use crate::models::UserProfile;
use crate::session::SessionGate;

/// Memory-resident profile store standing in for the remote service.
///
/// Every call sleeps for a random delay inside the configured window before
/// touching state, so the UI sees realistic in-flight periods.
pub struct InMemoryProfileStore {
    session: SessionGate,
    profiles: RwLock<Vec<UserProfile>>,
    latency: LatencyConfig,
}

impl InMemoryProfileStore {
    pub fn new(session: SessionGate, profiles: Vec<UserProfile>, latency: LatencyConfig) -> Self {
        Self {
            session,
            profiles: RwLock::new(profiles),
            latency,
        }
    }

    /// Store pre-populated with the five demo users
    pub fn seeded(session: SessionGate, latency: LatencyConfig) -> Self {
        let profiles = SEED_USERNAMES
            .iter()
            .enumerate()
            .map(|(idx, username)| UserProfile::new((idx + 1).to_string(), *username))
            .collect();
        Self::new(session, profiles, latency)
    }

    /// Store seeded from `config.seed_usernames`, or the demo users when unset
    pub fn from_config(session: SessionGate, config: &CoreConfig) -> Self {
        match &config.seed_usernames {
            Some(usernames) => Self::with_usernames(session, usernames.iter().cloned(), config.store_latency),
            None => Self::seeded(session, config.store_latency),
        }
    }

    /// Store with generated ids for the given usernames
    pub fn with_usernames<I, S>(session: SessionGate, usernames: I, latency: LatencyConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let profiles = usernames
            .into_iter()
            .map(UserProfile::with_generated_id)
            .collect();
        Self::new(session, profiles, latency)
    }

    pub fn len(&self) -> usize {
        self.profiles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.read().is_empty()
    }

    async fn simulate_latency(&self) {
        let (lo, hi) = self.latency.bounds();
        if hi.is_zero() {
            return;
        }
        let delay = if lo == hi {
            lo
        } else {
            let ms = rand::thread_rng().gen_range(lo.as_millis() as u64..=hi.as_millis() as u64);
            Duration::from_millis(ms)
        };
        tokio::time::sleep(delay).await;
    }

    fn ensure_ready(&self) -> Result<(), ServiceError> {
        if self.session.is_ready() {
            Ok(())
        } else {
            warn!("profile store used before session initialization");
            Err(ServiceError::NotInitialized)
        }
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn fetch_all(&self) -> Result<Vec<UserProfile>, ServiceError> {
        self.ensure_ready()?;
        self.simulate_latency().await;
        let snapshot = self.profiles.read().clone();
        debug!(count = snapshot.len(), "fetched profiles");
        Ok(snapshot)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        self.ensure_ready()?;
        self.simulate_latency().await;

        let mut profiles = self.profiles.write();
        match profiles.iter().position(|p| p.id == id) {
            Some(idx) => {
                let removed = profiles.remove(idx);
                debug!(id = %removed.id, username = %removed.username, "deleted profile");
                Ok(())
            }
            None => Err(ServiceError::NotFound { id: id.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_store() -> InMemoryProfileStore {
        let session = SessionGate::new();
        session.initialize("token").unwrap();
        InMemoryProfileStore::seeded(session, LatencyConfig::none())
    }

    #[tokio::test]
    async fn test_fetch_before_init_fails() {
        let store = InMemoryProfileStore::seeded(SessionGate::new(), LatencyConfig::none());
        assert_eq!(store.fetch_all().await, Err(ServiceError::NotInitialized));
    }

    #[tokio::test]
    async fn test_delete_before_init_fails_and_keeps_data() {
        let store = InMemoryProfileStore::seeded(SessionGate::new(), LatencyConfig::none());
        assert_eq!(store.delete_by_id("1").await, Err(ServiceError::NotInitialized));
        assert_eq!(store.len(), 5);
    }

    #[tokio::test]
    async fn test_fetch_returns_snapshot() {
        let store = ready_store();
        let mut snapshot = store.fetch_all().await.unwrap();
        assert_eq!(snapshot.len(), 5);

        snapshot.clear();
        assert_eq!(store.fetch_all().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let store = ready_store();
        store.delete_by_id("2").await.unwrap();

        let remaining = store.fetch_all().await.unwrap();
        assert_eq!(remaining.len(), 4);
        assert!(remaining.iter().all(|p| p.id != "2"));
        assert!(remaining.iter().all(|p| p.username != "bob@example.com"));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let store = ready_store();
        let before = store.fetch_all().await.unwrap();

        assert_eq!(
            store.delete_by_id("missing").await,
            Err(ServiceError::NotFound { id: "missing".into() })
        );
        assert_eq!(
            store.delete_by_id("missing").await,
            Err(ServiceError::NotFound { id: "missing".into() })
        );
        assert_eq!(store.fetch_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_repeat_delete_is_not_found() {
        let store = ready_store();
        store.delete_by_id("3").await.unwrap();
        assert!(matches!(
            store.delete_by_id("3").await,
            Err(ServiceError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_from_config_uses_seed_usernames() {
        let session = SessionGate::new();
        session.initialize("token").unwrap();
        let config = CoreConfig {
            seed_usernames: Some(vec!["a@example.com".into(), "b@example.com".into()]),
            store_latency: LatencyConfig::none(),
            ..CoreConfig::default()
        };

        let store = InMemoryProfileStore::from_config(session.clone(), &config);
        let profiles = store.fetch_all().await.unwrap();
        let usernames: Vec<_> = profiles.iter().map(|p| p.username.as_str()).collect();
        assert_eq!(usernames, ["a@example.com", "b@example.com"]);
        assert_ne!(profiles[0].id, profiles[1].id);

        let demo = CoreConfig {
            store_latency: LatencyConfig::none(),
            ..CoreConfig::default()
        };
        assert_eq!(InMemoryProfileStore::from_config(session, &demo).len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let session = SessionGate::new();
        session.initialize("token").unwrap();
        let latency = LatencyConfig { min_ms: 200, max_ms: 200 };
        let store = InMemoryProfileStore::with_usernames(session, ["x@example.com"], latency);

        let start = tokio::time::Instant::now();
        store.fetch_all().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(200));
    }
}
