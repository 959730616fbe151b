//! Application-wide constants
//!
//! Message type tags and defaults shared by the core and the front end.

/// Placeholder credential used when no embedding parent supplies one
pub const DEFAULT_FALLBACK_TOKEN: &str = "dev-token";

/// How long to wait for an inbound credential before falling back
pub const DEFAULT_HANDSHAKE_TIMEOUT_MS: u64 = 1500;

// Simulated backend latency window
pub const DEFAULT_STORE_LATENCY_MIN_MS: u64 = 300;
pub const DEFAULT_STORE_LATENCY_MAX_MS: u64 = 800;

/// Environment variable naming a file to append logs to
pub const LOG_FILE_ENV: &str = "USRADMIN_LOG_FILE";

/// Usernames the in-memory store is seeded with
pub const SEED_USERNAMES: [&str; 5] = [
    "alice@example.com",
    "bob@example.com",
    "carol@example.com",
    "dave@example.com",
    "eve@example.com",
];

// Cross-context message type tags
pub mod message_types {
    /// Inbound credential from the embedding parent
    pub const AUTH_TOKEN: &str = "AUTH_TOKEN";
    /// Outbound readiness signal
    pub const APP_LOADED: &str = "APP_LOADED";
    /// Outbound notice that a user was removed
    pub const USER_DELETED: &str = "USER_DELETED";
}
