use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::bridge::{EmbeddingChannel, ParentSink};
use crate::config::CoreConfig;
use crate::events::{CoreEvent, FetchReason};
use crate::handshake::HandshakeController;
use crate::models::UserProfile;
use crate::panel::Effect;
use crate::session::SessionGate;
use crate::store::ProfileStore;

/// Cloneable handle that runs store calls in the background.
///
/// Results come back as [`CoreEvent`]s on the runtime's event channel.
#[derive(Clone)]
pub struct CoreHandle {
    store: Arc<dyn ProfileStore>,
    events_tx: mpsc::UnboundedSender<CoreEvent>,
    parent: Option<ParentSink>,
}

impl CoreHandle {
    pub fn fetch_profiles(&self, reason: FetchReason) {
        let store = self.store.clone();
        let events_tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = store.fetch_all().await;
            let _ = events_tx.send(CoreEvent::ProfilesFetched { reason, result });
        });
    }

    pub fn delete_profile(&self, profile: UserProfile) {
        let store = self.store.clone();
        let events_tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = store.delete_by_id(&profile.id).await;
            let _ = events_tx.send(CoreEvent::ProfileDeleted { profile, result });
        });
    }

    pub fn notify_parent(&self, message: crate::bridge::OutboundMessage) {
        match &self.parent {
            Some(parent) => parent.post(message),
            None => debug!(?message, "standalone, not posting to parent"),
        }
    }

    pub fn dispatch(&self, effect: Effect) {
        match effect {
            Effect::FetchProfiles(reason) => self.fetch_profiles(reason),
            Effect::DeleteProfile(profile) => self.delete_profile(profile),
            Effect::NotifyParent(message) => self.notify_parent(message),
        }
    }

    pub fn dispatch_all(&self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            self.dispatch(effect);
        }
    }
}

/// Composition root: owns the session gate, the injected store and the link
/// to the embedding parent, and runs the handshake.
pub struct CoreRuntime {
    config: CoreConfig,
    session: SessionGate,
    handle: CoreHandle,
    events_rx: Option<mpsc::UnboundedReceiver<CoreEvent>>,
    embedding: Option<EmbeddingChannel>,
    handshake_task: Option<JoinHandle<()>>,
}

impl CoreRuntime {
    /// `session` must be the gate `store` checks before serving requests
    pub fn new(
        config: CoreConfig,
        session: SessionGate,
        store: Arc<dyn ProfileStore>,
        embedding: Option<EmbeddingChannel>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let parent = embedding.as_ref().map(|channel| channel.outbound.clone());

        Self {
            config,
            session,
            handle: CoreHandle {
                store,
                events_tx,
                parent,
            },
            events_rx: Some(events_rx),
            embedding,
            handshake_task: None,
        }
    }

    /// Spawn the handshake. Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        if self.handshake_task.is_some() {
            return;
        }
        let controller = HandshakeController::new(self.session.clone(), &self.config);
        let (inbound, parent) = match self.embedding.take() {
            Some(channel) => (Some(channel.inbound), Some(channel.outbound)),
            None => (None, None),
        };
        let events_tx = self.handle.events_tx.clone();
        self.handshake_task = Some(tokio::spawn(controller.run(inbound, parent, events_tx)));
    }

    pub fn handle(&self) -> CoreHandle {
        self.handle.clone()
    }

    pub fn session(&self) -> SessionGate {
        self.session.clone()
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn take_events_rx(&mut self) -> Option<mpsc::UnboundedReceiver<CoreEvent>> {
        self.events_rx.take()
    }

    /// Stop the handshake task, cancelling a pending fallback timer
    pub fn shutdown(&mut self) {
        if let Some(task) = self.handshake_task.take() {
            task.abort();
        }
    }
}

impl Drop for CoreRuntime {
    fn drop(&mut self) {
        self.shutdown();
    }
}
