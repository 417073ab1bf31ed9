//! Relay configuration loaded from environment variables.
//!
//! The server starts without any configuration for local development,
//! but answers 500 on /api/gemini until the upstream key and URL are set.

use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Socket address for the HTTP server.
    /// Env: `RELAY_ADDR`. Default: `0.0.0.0:5000`.
    pub http_addr: SocketAddr,

    /// Upstream Gemini API key.
    /// Env: `GEMINI_API_KEY`.
    pub gemini_api_key: Option<String>,

    /// Upstream Gemini generateContent URL (without the key query param).
    /// Env: `GEMINI_API_URL`.
    pub gemini_api_url: Option<String>,

    /// Browser origin allowed by CORS.
    /// Env: `ALLOWED_ORIGIN`. Default: none (all origins, dev only).
    pub allowed_origin: Option<String>,

    /// Hard deadline for the upstream call.
    pub upstream_timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            http_addr: ([0, 0, 0, 0], 5000).into(),
            gemini_api_key: None,
            gemini_api_url: None,
            allowed_origin: None,
            upstream_timeout: Duration::from_secs(10),
        }
    }
}

impl RelayConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("RELAY_ADDR") {
            if let Ok(parsed) = addr.parse::<SocketAddr>() {
                config.http_addr = parsed;
            } else {
                tracing::warn!(value = %addr, "Invalid RELAY_ADDR, using default");
            }
        }

        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                config.gemini_api_key = Some(key);
            }
        }

        if let Ok(url) = std::env::var("GEMINI_API_URL") {
            if !url.is_empty() {
                config.gemini_api_url = Some(url);
            }
        }

        if let Ok(origin) = std::env::var("ALLOWED_ORIGIN") {
            if !origin.is_empty() {
                config.allowed_origin = Some(origin);
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RelayConfig::default();
        assert_eq!(config.http_addr, ([0, 0, 0, 0], 5000).into());
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
        assert!(config.gemini_api_key.is_none());
    }
}
