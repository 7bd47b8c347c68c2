//! Process-wide gateway configuration, read once from the environment.

use std::fmt;
use std::time::Duration;

use apod_core::DEFAULT_TIMEOUT;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.nasa.gov";
pub const DEFAULT_TEXT_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_TEXT_MODEL: &str = "gpt-3.5-turbo";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },
}

/// Credentials and upstream locations. Never mutated after load.
#[derive(Clone)]
pub struct GatewayConfig {
    /// Picture provider credential (`NASA_API_KEY`).
    pub picture_api_key: String,
    /// Text provider credential (`OPENROUTER_API_KEY`). Without it every
    /// commentary request resolves to the fallback text.
    pub text_api_key: Option<String>,
    pub upstream_url: String,
    pub text_url: String,
    pub text_model: String,
    pub port: u16,
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let picture_api_key = get("NASA_API_KEY").ok_or(ConfigError::MissingVar("NASA_API_KEY"))?;

        let port = match get("APOD_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidVar {
                name: "APOD_PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(GatewayConfig {
            picture_api_key,
            text_api_key: get("OPENROUTER_API_KEY"),
            upstream_url: get("APOD_UPSTREAM_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_URL.into()),
            text_url: get("APOD_TEXT_URL").unwrap_or_else(|| DEFAULT_TEXT_URL.into()),
            text_model: get("APOD_TEXT_MODEL").unwrap_or_else(|| DEFAULT_TEXT_MODEL.into()),
            port,
            timeout: DEFAULT_TIMEOUT,
        })
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("picture_api_key", &"<redacted>")
            .field(
                "text_api_key",
                &self.text_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("upstream_url", &self.upstream_url)
            .field("text_url", &self.text_url)
            .field("text_model", &self.text_model)
            .field("port", &self.port)
            .field("timeout", &self.timeout)
            .finish()
    }
}
