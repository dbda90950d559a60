//! Document store configuration

use serde::{Deserialize, Serialize};

/// Connection settings for the external document store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStoreConfig {
    /// Store API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Project API key sent with every call
    #[serde(default)]
    pub api_key: String,
    /// HTTP timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for DocumentStoreConfig {
    fn default() -> Self {
        Self {
            // Local store emulator default
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8790".to_string()
}

fn default_timeout() -> u64 {
    15
}
