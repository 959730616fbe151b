//! Two-step guarded deletion: request, then confirm or cancel.

use tracing::debug;

use crate::error::ServiceError;
use crate::models::{Notice, UserProfile};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeletionState {
    #[default]
    Idle,
    Confirming(UserProfile),
}

/// What the caller must do after a deletion finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionOutcome {
    pub notice: Notice,
    /// The list must be re-fetched (only after success)
    pub refresh: bool,
}

/// At most one profile awaits confirmation. A new request replaces it.
#[derive(Debug, Default)]
pub struct DeletionFlow {
    state: DeletionState,
}

impl DeletionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DeletionState {
        &self.state
    }

    pub fn pending(&self) -> Option<&UserProfile> {
        match &self.state {
            DeletionState::Confirming(profile) => Some(profile),
            DeletionState::Idle => None,
        }
    }

    pub fn request(&mut self, profile: UserProfile) {
        if let DeletionState::Confirming(previous) = &self.state {
            debug!(previous = %previous.id, next = %profile.id, "replacing pending deletion");
        }
        self.state = DeletionState::Confirming(profile);
    }

    /// Drop the pending target. Returns whether anything was pending.
    pub fn cancel(&mut self) -> bool {
        !matches!(std::mem::take(&mut self.state), DeletionState::Idle)
    }

    /// Commit to deleting the pending target, which the caller must now delete
    pub fn confirm(&mut self) -> Option<UserProfile> {
        match std::mem::take(&mut self.state) {
            DeletionState::Confirming(profile) => Some(profile),
            DeletionState::Idle => None,
        }
    }

    /// Feedback for a finished deletion of `profile`
    pub fn complete(profile: &UserProfile, result: &Result<(), ServiceError>) -> DeletionOutcome {
        match result {
            Ok(()) => DeletionOutcome {
                notice: Notice::success(format!("Deleted {}", profile.username)),
                refresh: true,
            },
            Err(e) => DeletionOutcome {
                notice: Notice::error(format!("Failed to delete {}: {}", profile.username, e)),
                refresh: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoticeKind;

    fn bob() -> UserProfile {
        UserProfile::new("2", "bob@example.com")
    }

    #[test]
    fn test_request_then_cancel() {
        let mut flow = DeletionFlow::new();
        flow.request(bob());
        assert_eq!(flow.pending(), Some(&bob()));

        assert!(flow.cancel());
        assert_eq!(flow.state(), &DeletionState::Idle);
        assert!(!flow.cancel());
        assert!(flow.confirm().is_none());
    }

    #[test]
    fn test_last_request_wins() {
        let mut flow = DeletionFlow::new();
        flow.request(UserProfile::new("1", "alice@example.com"));
        flow.request(bob());

        assert_eq!(flow.confirm(), Some(bob()));
        assert_eq!(flow.state(), &DeletionState::Idle);
    }

    #[test]
    fn test_complete_success_refreshes() {
        let outcome = DeletionFlow::complete(&bob(), &Ok(()));
        assert!(outcome.refresh);
        assert_eq!(outcome.notice.kind, NoticeKind::Success);
        assert!(outcome.notice.message.contains("bob@example.com"));
    }

    #[test]
    fn test_complete_failure_reports_reason() {
        let outcome = DeletionFlow::complete(
            &bob(),
            &Err(ServiceError::NotFound { id: "2".into() }),
        );
        assert!(!outcome.refresh);
        assert_eq!(outcome.notice.kind, NoticeKind::Error);
        assert!(outcome.notice.message.contains("User 2 not found"));
    }
}
