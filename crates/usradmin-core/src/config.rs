use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FALLBACK_TOKEN, DEFAULT_HANDSHAKE_TIMEOUT_MS, DEFAULT_STORE_LATENCY_MAX_MS,
    DEFAULT_STORE_LATENCY_MIN_MS,
};

/// Panel configuration, loadable from a JSON file. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoreConfig {
    /// Milliseconds to wait for `AUTH_TOKEN` before using the fallback token
    pub handshake_timeout_ms: u64,

    /// Credential used when no parent supplies one
    pub fallback_token: String,

    /// Only accept inbound messages from this origin (any origin when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted_origin: Option<String>,

    /// Simulated latency of the in-memory profile store
    pub store_latency: LatencyConfig,

    /// Usernames to seed the store with instead of the demo users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_usernames: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LatencyConfig {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl LatencyConfig {
    pub fn none() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }

    /// Inclusive bounds with `min <= max` regardless of how they were configured
    pub fn bounds(&self) -> (Duration, Duration) {
        let lo = self.min_ms.min(self.max_ms);
        let hi = self.min_ms.max(self.max_ms);
        (Duration::from_millis(lo), Duration::from_millis(hi))
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            min_ms: DEFAULT_STORE_LATENCY_MIN_MS,
            max_ms: DEFAULT_STORE_LATENCY_MAX_MS,
        }
    }
}

impl CoreConfig {
    /// Load config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to deserialize config")
    }

    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_millis(self.handshake_timeout_ms)
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            handshake_timeout_ms: DEFAULT_HANDSHAKE_TIMEOUT_MS,
            fallback_token: DEFAULT_FALLBACK_TOKEN.to_string(),
            trusted_origin: None,
            store_latency: LatencyConfig::default(),
            seed_usernames: None,
        }
    }
}
