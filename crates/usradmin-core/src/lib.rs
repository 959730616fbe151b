pub mod bridge;
pub mod config;
pub mod constants;
pub mod deletion;
pub mod error;
pub mod events;
pub mod handshake;
pub mod models;
pub mod panel;
pub mod runtime;
pub mod search;
pub mod session;
pub mod store;
pub mod tracing_setup;

// Re-export the types most callers need at crate root
pub use error::{AuthError, BridgeError, ServiceError};
pub use models::{Notice, NoticeKind, UserProfile};
pub use panel::{Effect, Panel};
pub use runtime::{CoreHandle, CoreRuntime};
