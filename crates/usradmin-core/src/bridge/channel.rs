use tokio::sync::mpsc;
use tracing::warn;

use super::messages::OutboundMessage;

/// Capacity of the inbound queue; a chatty parent gets back-pressure
const INBOUND_CAPACITY: usize = 32;

/// A raw inbound message together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEnvelope {
    pub origin: String,
    pub raw: String,
}

impl InboundEnvelope {
    pub fn new(origin: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            raw: raw.into(),
        }
    }
}

/// Sending half towards the parent. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ParentSink {
    tx: mpsc::UnboundedSender<OutboundMessage>,
}

impl ParentSink {
    /// Fire-and-forget: a parent that went away is logged, not an error
    pub fn post(&self, message: OutboundMessage) {
        if self.tx.send(message).is_err() {
            warn!("embedding parent is gone, dropping outbound message");
        }
    }
}

/// The panel's side of a link to its embedding parent
#[derive(Debug)]
pub struct EmbeddingChannel {
    pub inbound: mpsc::Receiver<InboundEnvelope>,
    pub outbound: ParentSink,
}

/// The parent's side of the link. Used by transports and tests.
#[derive(Debug)]
pub struct ParentEnd {
    pub inbound_tx: mpsc::Sender<InboundEnvelope>,
    pub outbound_rx: mpsc::UnboundedReceiver<OutboundMessage>,
}

impl EmbeddingChannel {
    /// Create a connected (panel, parent) pair
    pub fn pair() -> (EmbeddingChannel, ParentEnd) {
        let (inbound_tx, inbound) = mpsc::channel(INBOUND_CAPACITY);
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        (
            EmbeddingChannel {
                inbound,
                outbound: ParentSink { tx: outbound_tx },
            },
            ParentEnd {
                inbound_tx,
                outbound_rx,
            },
        )
    }
}

impl ParentEnd {
    pub async fn send_raw(&self, origin: &str, raw: &str) -> bool {
        self.inbound_tx
            .send(InboundEnvelope::new(origin, raw))
            .await
            .is_ok()
    }
}
