//! Identity provider configuration

use serde::{Deserialize, Serialize};

/// Connection settings for the external identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Provider API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Project API key sent with every call
    #[serde(default)]
    pub api_key: String,
    /// HTTP timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            // Local auth emulator default
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:9099".to_string()
}

fn default_timeout() -> u64 {
    15
}
