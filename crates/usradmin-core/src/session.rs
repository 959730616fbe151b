use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::error::AuthError;

/// Tracks whether the panel holds a valid credential.
///
/// Clones share state. Once initialized the gate stays open for the rest of
/// the process; there is no logout.
#[derive(Debug, Clone, Default)]
pub struct SessionGate {
    credential: Arc<RwLock<Option<String>>>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the gate with `credential`.
    ///
    /// Blank credentials are rejected with [`AuthError::MissingCredential`].
    /// Calling again after success keeps the first credential.
    pub fn initialize(&self, credential: &str) -> Result<(), AuthError> {
        if credential.trim().is_empty() {
            return Err(AuthError::MissingCredential);
        }

        let mut slot = self.credential.write();
        if slot.is_some() {
            debug!("session already initialized, ignoring new credential");
            return Ok(());
        }
        *slot = Some(credential.to_string());
        info!("session initialized");
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.credential.read().is_some()
    }

    pub fn credential(&self) -> Option<String> {
        self.credential.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_credentials_rejected() {
        let gate = SessionGate::new();
        for blank in ["", "   ", "\n\t"] {
            assert_eq!(gate.initialize(blank), Err(AuthError::MissingCredential));
        }
        assert!(!gate.is_ready());
    }

    #[test]
    fn test_initialize_once() {
        let gate = SessionGate::new();
        gate.initialize("first").unwrap();
        assert!(gate.is_ready());

        gate.initialize("second").unwrap();
        assert_eq!(gate.credential().as_deref(), Some("first"));
    }

    #[test]
    fn test_clones_share_state() {
        let gate = SessionGate::new();
        let observer = gate.clone();
        gate.initialize("token").unwrap();
        assert!(observer.is_ready());
    }

    #[test]
    fn test_failed_init_does_not_block_later_success() {
        let gate = SessionGate::new();
        assert!(gate.initialize("").is_err());
        gate.initialize("token").unwrap();
        assert!(gate.is_ready());
    }
}
