//! Access-control configuration

use serde::{Deserialize, Serialize};

/// Access-control settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Server-side session lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,
    /// Upper bound on one role lookup; elapsed lookups deny
    #[serde(default = "default_role_check_timeout")]
    pub role_check_timeout_secs: u64,
    /// Public login route the route guard redirects to
    #[serde(default = "default_login_route")]
    pub login_route: String,
    /// Admin console login route the access controller redirects to
    #[serde(default = "default_admin_login_route")]
    pub admin_login_route: String,
    /// Failed login attempts allowed per window before lockout
    #[serde(default = "default_login_max_attempts")]
    pub login_max_attempts: u32,
    /// Window for counting failed logins, in seconds
    #[serde(default = "default_login_window")]
    pub login_window_secs: u64,
    /// Base lockout duration in seconds; doubles per repeated lockout
    #[serde(default = "default_login_lockout")]
    pub login_lockout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: default_session_ttl(),
            role_check_timeout_secs: default_role_check_timeout(),
            login_route: default_login_route(),
            admin_login_route: default_admin_login_route(),
            login_max_attempts: default_login_max_attempts(),
            login_window_secs: default_login_window(),
            login_lockout_secs: default_login_lockout(),
        }
    }
}

fn default_session_ttl() -> u64 {
    3600
}

fn default_role_check_timeout() -> u64 {
    10
}

fn default_login_route() -> String {
    "/login".to_string()
}

fn default_admin_login_route() -> String {
    "/admin/login".to_string()
}

fn default_login_max_attempts() -> u32 {
    5
}

fn default_login_window() -> u64 {
    300
}

fn default_login_lockout() -> u64 {
    60
}
