//! Headless state of the administration panel.
//!
//! `Panel` is a reducer: background results come in as [`CoreEvent`]s and
//! operator actions as method calls; both return the [`Effect`]s the runtime
//! has to carry out. Rendering reads the panel and never mutates it.

use tracing::{debug, info, warn};

use crate::bridge::OutboundMessage;
use crate::deletion::DeletionFlow;
use crate::events::{CoreEvent, FetchReason};
use crate::handshake::HandshakeState;
use crate::models::{Notice, UserProfile};
use crate::search::filter_profiles;

/// Work the panel asks the runtime to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchProfiles(FetchReason),
    DeleteProfile(UserProfile),
    NotifyParent(OutboundMessage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
    NotLoaded,
    Loaded,
    /// Page-level failure replacing the list
    Failed(String),
}

/// Why the visible list is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoProfiles,
    NoMatches,
}

pub struct Panel {
    handshake: HandshakeState,
    profiles: Vec<UserProfile>,
    list: ListStatus,
    search_term: String,
    fetches_in_flight: usize,
    deletes_in_flight: usize,
    deletion: DeletionFlow,
    notice: Option<Notice>,
    refresh_error: Option<String>,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel {
    pub fn new() -> Self {
        Self {
            handshake: HandshakeState::WaitingForToken,
            profiles: Vec::new(),
            list: ListStatus::NotLoaded,
            search_term: String::new(),
            fetches_in_flight: 0,
            deletes_in_flight: 0,
            deletion: DeletionFlow::new(),
            notice: None,
            refresh_error: None,
        }
    }

    // ===== Event handling =====

    pub fn apply(&mut self, event: CoreEvent) -> Vec<Effect> {
        match event {
            CoreEvent::Handshake(state) => {
                let ready = state == HandshakeState::Ready && self.handshake != HandshakeState::Ready;
                self.handshake = state;
                if ready {
                    vec![self.fetch(FetchReason::Initial)]
                } else {
                    Vec::new()
                }
            }
            CoreEvent::ProfilesFetched { reason, result } => {
                self.fetches_in_flight = self.fetches_in_flight.saturating_sub(1);
                match result {
                    Ok(profiles) => {
                        info!(count = profiles.len(), ?reason, "profile list loaded");
                        self.profiles = profiles;
                        self.list = ListStatus::Loaded;
                        self.refresh_error = None;
                        self.drop_vanished_deletion();
                    }
                    Err(e) if reason == FetchReason::AfterDelete && self.list == ListStatus::Loaded => {
                        warn!(error = %e, "refresh after deletion failed, keeping previous list");
                        self.refresh_error = Some(format!("Could not refresh the list: {}", e));
                    }
                    Err(e) => {
                        warn!(error = %e, ?reason, "profile fetch failed");
                        self.list = ListStatus::Failed(e.to_string());
                    }
                }
                Vec::new()
            }
            CoreEvent::ProfileDeleted { profile, result } => {
                self.deletes_in_flight = self.deletes_in_flight.saturating_sub(1);
                let outcome = DeletionFlow::complete(&profile, &result);
                self.notice = Some(outcome.notice);

                if outcome.refresh {
                    vec![
                        Effect::NotifyParent(OutboundMessage::user_deleted(profile.id)),
                        self.fetch(FetchReason::AfterDelete),
                    ]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// A confirmation for a profile the fresh list no longer has is stale
    fn drop_vanished_deletion(&mut self) {
        let vanished = self
            .deletion
            .pending()
            .is_some_and(|target| !self.profiles.iter().any(|p| p.same_user(target)));
        if vanished {
            debug!("pending deletion target no longer listed, dropping confirmation");
            self.deletion.cancel();
        }
    }

    fn fetch(&mut self, reason: FetchReason) -> Effect {
        self.fetches_in_flight += 1;
        Effect::FetchProfiles(reason)
    }

    // ===== Operator actions =====

    /// Re-fetch the list. Ignored until the session is ready.
    pub fn reload(&mut self) -> Vec<Effect> {
        if !self.is_ready() {
            return Vec::new();
        }
        vec![self.fetch(FetchReason::Manual)]
    }

    pub fn request_delete(&mut self, profile: UserProfile) {
        self.deletion.request(profile);
    }

    pub fn cancel_delete(&mut self) -> bool {
        self.deletion.cancel()
    }

    pub fn confirm_delete(&mut self) -> Vec<Effect> {
        match self.deletion.confirm() {
            Some(profile) => {
                info!(id = %profile.id, "deletion confirmed");
                self.deletes_in_flight += 1;
                vec![Effect::DeleteProfile(profile)]
            }
            None => Vec::new(),
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_term.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.search_term.pop();
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn dismiss_refresh_error(&mut self) {
        self.refresh_error = None;
    }

    // ===== Queries =====

    pub fn handshake(&self) -> &HandshakeState {
        &self.handshake
    }

    pub fn is_ready(&self) -> bool {
        self.handshake == HandshakeState::Ready
    }

    /// Initialization or a fetch is in flight
    pub fn is_loading(&self) -> bool {
        !self.handshake.is_terminal() || self.fetches_in_flight > 0
    }

    pub fn is_deleting(&self) -> bool {
        self.deletes_in_flight > 0
    }

    pub fn profiles(&self) -> &[UserProfile] {
        &self.profiles
    }

    pub fn list_status(&self) -> &ListStatus {
        &self.list
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn visible_profiles(&self) -> Vec<&UserProfile> {
        filter_profiles(&self.profiles, &self.search_term)
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.list != ListStatus::Loaded {
            return None;
        }
        if self.profiles.is_empty() {
            Some(EmptyState::NoProfiles)
        } else if self.visible_profiles().is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            None
        }
    }

    /// Blocking error that replaces the whole page or the list
    pub fn page_error(&self) -> Option<String> {
        if let HandshakeState::InitFailed(e) = &self.handshake {
            return Some(format!("Initialization failed: {}", e));
        }
        match &self.list {
            ListStatus::Failed(message) => Some(format!("Failed to load users: {}", message)),
            _ => None,
        }
    }

    pub fn pending_deletion(&self) -> Option<&UserProfile> {
        self.deletion.pending()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn refresh_error(&self) -> Option<&str> {
        self.refresh_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AuthError, ServiceError};
    use crate::models::NoticeKind;

    fn users(names: &[&str]) -> Vec<UserProfile> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| UserProfile::new((i + 1).to_string(), *n))
            .collect()
    }

    fn loaded_panel(names: &[&str]) -> Panel {
        let mut panel = Panel::new();
        panel.apply(CoreEvent::Handshake(HandshakeState::Ready));
        panel.apply(CoreEvent::ProfilesFetched {
            reason: FetchReason::Initial,
            result: Ok(users(names)),
        });
        panel
    }

    #[test]
    fn test_ready_triggers_initial_fetch_once() {
        let mut panel = Panel::new();
        assert!(panel.is_loading());
        assert!(panel.apply(CoreEvent::Handshake(HandshakeState::Initializing)).is_empty());

        let effects = panel.apply(CoreEvent::Handshake(HandshakeState::Ready));
        assert_eq!(effects, vec![Effect::FetchProfiles(FetchReason::Initial)]);
        assert!(panel.is_loading());

        assert!(panel.apply(CoreEvent::Handshake(HandshakeState::Ready)).is_empty());
    }

    #[test]
    fn test_init_failure_never_fetches() {
        let mut panel = Panel::new();
        let effects = panel.apply(CoreEvent::Handshake(HandshakeState::InitFailed(
            AuthError::MissingCredential,
        )));
        assert!(effects.is_empty());
        assert!(!panel.is_loading());
        assert!(panel.reload().is_empty());
        assert_eq!(
            panel.page_error().as_deref(),
            Some("Initialization failed: Missing credential")
        );
    }

    #[test]
    fn test_initial_fetch_failure_replaces_list() {
        let mut panel = Panel::new();
        panel.apply(CoreEvent::Handshake(HandshakeState::Ready));
        panel.apply(CoreEvent::ProfilesFetched {
            reason: FetchReason::Initial,
            result: Err(ServiceError::service("backend down")),
        });
        assert!(!panel.is_loading());
        assert_eq!(
            panel.list_status(),
            &ListStatus::Failed("backend down".to_string())
        );
        assert!(panel.page_error().unwrap().contains("backend down"));
        assert_eq!(panel.empty_state(), None);
    }

    #[test]
    fn test_empty_states_are_distinct() {
        let panel = loaded_panel(&[]);
        assert_eq!(panel.empty_state(), Some(EmptyState::NoProfiles));

        let mut panel = loaded_panel(&["alice@example.com"]);
        assert_eq!(panel.empty_state(), None);
        panel.set_search_term("zzz");
        assert_eq!(panel.empty_state(), Some(EmptyState::NoMatches));
    }

    #[test]
    fn test_search_updates_visible_profiles() {
        let mut panel = loaded_panel(&["alice@example.com", "bob@example.com"]);
        for c in "ALI".chars() {
            panel.push_search_char(c);
        }
        assert_eq!(panel.visible_profiles().len(), 1);
        panel.pop_search_char();
        panel.pop_search_char();
        panel.pop_search_char();
        assert_eq!(panel.visible_profiles().len(), 2);
        assert_eq!(panel.profiles().len(), 2);
    }

    #[test]
    fn test_confirmed_delete_success_notifies_and_refreshes() {
        let mut panel = loaded_panel(&["alice@example.com", "bob@example.com"]);
        let bob = panel.profiles()[1].clone();

        panel.request_delete(bob.clone());
        assert_eq!(panel.pending_deletion(), Some(&bob));

        let effects = panel.confirm_delete();
        assert_eq!(effects, vec![Effect::DeleteProfile(bob.clone())]);
        assert!(panel.pending_deletion().is_none());
        assert!(panel.is_deleting());

        let effects = panel.apply(CoreEvent::ProfileDeleted {
            profile: bob.clone(),
            result: Ok(()),
        });
        assert_eq!(
            effects,
            vec![
                Effect::NotifyParent(OutboundMessage::user_deleted("2")),
                Effect::FetchProfiles(FetchReason::AfterDelete),
            ]
        );
        assert_eq!(panel.notice().unwrap().kind, NoticeKind::Success);
        assert!(!panel.is_deleting());
    }

    #[test]
    fn test_delete_failure_is_transient_notice() {
        let mut panel = loaded_panel(&["alice@example.com"]);
        let alice = panel.profiles()[0].clone();
        panel.request_delete(alice.clone());
        panel.confirm_delete();

        let effects = panel.apply(CoreEvent::ProfileDeleted {
            profile: alice,
            result: Err(ServiceError::NotFound { id: "1".into() }),
        });
        assert!(effects.is_empty());
        assert_eq!(panel.notice().unwrap().kind, NoticeKind::Error);
        assert!(panel.page_error().is_none());
        assert_eq!(panel.profiles().len(), 1);

        panel.dismiss_notice();
        assert!(panel.notice().is_none());
    }

    #[test]
    fn test_refresh_drops_confirmation_for_vanished_profile() {
        let mut panel = loaded_panel(&["alice@example.com", "bob@example.com"]);
        let alice = panel.profiles()[0].clone();
        let bob = panel.profiles()[1].clone();

        panel.request_delete(bob.clone());
        panel.apply(CoreEvent::ProfilesFetched {
            reason: FetchReason::Manual,
            result: Ok(vec![alice.clone(), UserProfile::new(bob.id.clone(), "robert@example.com")]),
        });
        assert_eq!(panel.pending_deletion().map(|p| p.id.as_str()), Some(bob.id.as_str()));

        panel.apply(CoreEvent::ProfilesFetched {
            reason: FetchReason::Manual,
            result: Ok(vec![alice]),
        });
        assert!(panel.pending_deletion().is_none());
        assert!(panel.confirm_delete().is_empty());
    }

    #[test]
    fn test_cancel_has_no_effect() {
        let mut panel = loaded_panel(&["alice@example.com"]);
        panel.request_delete(panel.profiles()[0].clone());
        assert!(panel.cancel_delete());
        assert!(panel.confirm_delete().is_empty());
        assert_eq!(panel.profiles().len(), 1);
    }

    #[test]
    fn test_failed_refresh_after_delete_keeps_list() {
        let mut panel = loaded_panel(&["alice@example.com", "bob@example.com"]);
        panel.apply(CoreEvent::ProfilesFetched {
            reason: FetchReason::AfterDelete,
            result: Err(ServiceError::service("timeout")),
        });

        assert_eq!(panel.list_status(), &ListStatus::Loaded);
        assert_eq!(panel.profiles().len(), 2);
        assert!(panel.page_error().is_none());
        assert!(panel.refresh_error().unwrap().contains("timeout"));

        panel.apply(CoreEvent::ProfilesFetched {
            reason: FetchReason::Manual,
            result: Ok(users(&["alice@example.com"])),
        });
        assert!(panel.refresh_error().is_none());
    }

    #[test]
    fn test_reload_tracks_loading() {
        let mut panel = loaded_panel(&["alice@example.com"]);
        assert!(!panel.is_loading());
        assert_eq!(panel.reload(), vec![Effect::FetchProfiles(FetchReason::Manual)]);
        assert!(panel.is_loading());
    }
}
