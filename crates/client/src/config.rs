//! Client configuration: where the gateway lives.

use std::time::Duration;

use apod_core::DEFAULT_TIMEOUT;

pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub gateway_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Read `APOD_GATEWAY_URL` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let gateway_url = lookup("APOD_GATEWAY_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string());

        ClientConfig {
            gateway_url,
            ..ClientConfig::default()
        }
    }

    /// Replace the gateway URL, e.g. from a command-line flag.
    pub fn with_gateway_url(mut self, url: impl Into<String>) -> Self {
        self.gateway_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_localhost_5000() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config.gateway_url, "http://localhost:5000");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn reads_gateway_url() {
        let config = ClientConfig::from_lookup(|name| {
            (name == "APOD_GATEWAY_URL").then(|| " https://apod.example.org ".to_string())
        });
        assert_eq!(config.gateway_url, "https://apod.example.org");
    }

    #[test]
    fn blank_value_falls_back_to_default() {
        let config = ClientConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config.gateway_url, DEFAULT_GATEWAY_URL);
    }

    #[test]
    fn flag_overrides_environment() {
        let config = ClientConfig::from_lookup(|_| Some("http://a".to_string()))
            .with_gateway_url("http://b");
        assert_eq!(config.gateway_url, "http://b");
    }
}
