//! Initialization handshake with the embedding parent.
//!
//! The panel announces itself with `APP_LOADED`, then races an inbound
//! `AUTH_TOKEN` against a one-shot fallback timer. Whichever wins opens the
//! session gate; everything after that is ignored.
//!
//! ```text
//! WaitingForToken --AUTH_TOKEN | timeout--> Initializing --ok--> Ready
//!                                                       \--err-> InitFailed
//! ```

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::bridge::{InboundEnvelope, InboundMessage, OutboundMessage, ParentSink};
use crate::config::CoreConfig;
use crate::error::{AuthError, BridgeError};
use crate::events::CoreEvent;
use crate::session::SessionGate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandshakeState {
    WaitingForToken,
    Initializing,
    Ready,
    InitFailed(AuthError),
}

impl HandshakeState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, HandshakeState::Ready | HandshakeState::InitFailed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Parent,
    Fallback,
}

/// A credential the controller has committed to. Only one is ever produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedCredential {
    pub token: String,
    pub source: CredentialSource,
}

pub struct HandshakeController {
    state: HandshakeState,
    session: SessionGate,
    timeout: Duration,
    fallback_token: String,
    trusted_origin: Option<String>,
}

impl HandshakeController {
    pub fn new(session: SessionGate, config: &CoreConfig) -> Self {
        Self {
            state: HandshakeState::WaitingForToken,
            session,
            timeout: config.handshake_timeout(),
            fallback_token: config.fallback_token.clone(),
            trusted_origin: config.trusted_origin.clone(),
        }
    }

    pub fn state(&self) -> &HandshakeState {
        &self.state
    }

    /// Take a credential from an inbound message if one is still wanted.
    ///
    /// Returns `None` for anything that is not a well-formed `AUTH_TOKEN` from a
    /// trusted origin, and for every message once a credential was accepted.
    pub fn accept_inbound(&mut self, envelope: &InboundEnvelope) -> Option<AcceptedCredential> {
        if self.state != HandshakeState::WaitingForToken {
            debug!(origin = %envelope.origin, "handshake settled, ignoring inbound message");
            return None;
        }

        if let Err(e) = self.check_origin(&envelope.origin) {
            debug!(error = %e, "ignoring inbound message");
            return None;
        }

        match InboundMessage::parse(&envelope.raw) {
            Ok(InboundMessage::AuthToken { token }) => {
                info!(origin = %envelope.origin, "received credential from parent");
                self.state = HandshakeState::Initializing;
                Some(AcceptedCredential {
                    token: token.unwrap_or_default(),
                    source: CredentialSource::Parent,
                })
            }
            Err(e) => {
                debug!(error = %e, "ignoring inbound message");
                None
            }
        }
    }

    /// Fall back to the placeholder credential if nothing was accepted yet
    pub fn accept_timeout(&mut self) -> Option<AcceptedCredential> {
        if self.state != HandshakeState::WaitingForToken {
            return None;
        }
        self.state = HandshakeState::Initializing;
        Some(AcceptedCredential {
            token: self.fallback_token.clone(),
            source: CredentialSource::Fallback,
        })
    }

    /// Open the session gate with the accepted credential
    pub fn initialize(&mut self, credential: AcceptedCredential) -> HandshakeState {
        self.state = match self.session.initialize(&credential.token) {
            Ok(()) => {
                info!(source = ?credential.source, "handshake complete");
                HandshakeState::Ready
            }
            Err(e) => {
                warn!(source = ?credential.source, error = %e, "handshake failed");
                HandshakeState::InitFailed(e)
            }
        };
        self.state.clone()
    }

    fn check_origin(&self, origin: &str) -> Result<(), BridgeError> {
        match &self.trusted_origin {
            Some(trusted) if trusted != origin => Err(BridgeError::UntrustedOrigin {
                origin: origin.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Drive the handshake to completion, reporting transitions on `events`.
    ///
    /// Without an embedding channel the fallback credential is used at once.
    /// With one, `APP_LOADED` is posted and the timer starts; afterwards the
    /// task keeps draining the channel so late credentials are dropped.
    pub async fn run(
        mut self,
        inbound: Option<mpsc::Receiver<InboundEnvelope>>,
        parent: Option<ParentSink>,
        events: mpsc::UnboundedSender<CoreEvent>,
    ) {
        let mut inbound = inbound;

        let accepted = match inbound.as_mut() {
            Some(rx) => {
                if let Some(parent) = &parent {
                    parent.post(OutboundMessage::AppLoaded);
                }
                self.wait_for_credential(rx).await
            }
            None => {
                info!("no embedding context, using fallback credential");
                self.accept_timeout()
            }
        };

        if let Some(credential) = accepted {
            let _ = events.send(CoreEvent::Handshake(HandshakeState::Initializing));
            let state = self.initialize(credential);
            let _ = events.send(CoreEvent::Handshake(state));
        }

        if let Some(rx) = inbound.as_mut() {
            while let Some(envelope) = rx.recv().await {
                let _ = self.accept_inbound(&envelope);
            }
        }
    }

    async fn wait_for_credential(
        &mut self,
        inbound: &mut mpsc::Receiver<InboundEnvelope>,
    ) -> Option<AcceptedCredential> {
        // Dropped on return, which cancels the fallback
        let timer = tokio::time::sleep(self.timeout);
        tokio::pin!(timer);
        let mut inbound_open = true;

        loop {
            tokio::select! {
                maybe_envelope = inbound.recv(), if inbound_open => match maybe_envelope {
                    Some(envelope) => {
                        if let Some(credential) = self.accept_inbound(&envelope) {
                            return Some(credential);
                        }
                    }
                    None => {
                        debug!("embedding channel closed before a credential arrived");
                        inbound_open = false;
                    }
                },
                _ = &mut timer => {
                    info!(timeout_ms = self.timeout.as_millis() as u64, "no credential received, using fallback");
                    return self.accept_timeout();
                }
            }
        }
    }
}
