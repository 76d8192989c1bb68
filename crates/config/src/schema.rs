//! Config schema types (server, upstream).

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeetscopeConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

/// Gateway server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to. Defaults to "127.0.0.1".
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 3000,
        }
    }
}

/// Upstream GraphQL endpoint configuration.
///
/// The header values form the static browser-identifying set the public
/// LeetCode endpoint expects. Upstream bot filtering changes over time, so
/// they are plain config values rather than constants in the relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Upstream GraphQL endpoint URL.
    pub url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
    pub origin: String,
    pub referer: String,
    pub accept: String,
    pub accept_language: String,
    /// Placeholder CSRF token sent as `x-csrftoken`. No session handling is
    /// performed; the upstream only checks for the header's presence.
    pub csrf_token: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: "https://leetcode.com/graphql".into(),
            timeout_secs: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .into(),
            origin: "https://leetcode.com".into(),
            referer: "https://leetcode.com/".into(),
            accept: "application/json".into(),
            accept_language: "en-US,en;q=0.9".into(),
            csrf_token: "dummy-csrf-token".into(),
        }
    }
}
