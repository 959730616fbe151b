//! Cross-context messaging with the embedding parent.

pub mod channel;
pub mod messages;
pub mod socket;

pub use channel::{EmbeddingChannel, InboundEnvelope, ParentEnd, ParentSink};
pub use messages::{InboundMessage, OutboundMessage, UserDeletedPayload};
