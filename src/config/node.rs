//! Node configuration structures.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

/// Peer ping endpoint.
pub const ENV_OTHER_ENDPOINT: &str = "OTHER_ENDPOINT";
/// Reply delay in milliseconds.
pub const ENV_PONG_TIME_MS: &str = "PONG_TIME_MS";
/// Whether to send the initial ping at startup.
pub const ENV_DO_INITIAL_PING: &str = "DO_INITIAL_PING";
/// Listener address.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
/// Outbound request timeout in milliseconds.
pub const ENV_NOTIFY_TIMEOUT_MS: &str = "NOTIFY_TIMEOUT_MS";

/// Configuration consumed when a node is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// URL of the peer's ping operation.
    pub endpoint: String,
    /// Delay between receiving a ping and replying, in milliseconds.
    pub reply_delay_ms: u64,
    /// Send one ping to the peer at startup.
    #[serde(default)]
    pub initial_ping: bool,
    /// Address the HTTP listener binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    /// Timeout for the outbound ping, in milliseconds.
    #[serde(default = "default_notify_timeout_ms")]
    pub notify_timeout_ms: u64,
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 10000))
}

const fn default_notify_timeout_ms() -> u64 {
    5000
}

impl NodeConfig {
    /// Config with defaults for everything but the peer and delay.
    pub fn new(endpoint: impl Into<String>, reply_delay_ms: u64) -> Self {
        Self {
            endpoint: endpoint.into(),
            reply_delay_ms,
            initial_ping: false,
            bind_addr: default_bind_addr(),
            notify_timeout_ms: default_notify_timeout_ms(),
        }
    }

    /// Set the initial ping flag.
    #[must_use]
    pub fn with_initial_ping(mut self, initial_ping: bool) -> Self {
        self.initial_ping = initial_ping;
        self
    }

    /// Set the listener address.
    #[must_use]
    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".into());
        }
        let url = reqwest::Url::parse(&self.endpoint)
            .map_err(|e| format!("endpoint `{}` invalid: {e}", self.endpoint))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "endpoint `{}` must use http or https",
                self.endpoint
            ));
        }
        if self.notify_timeout_ms == 0 {
            return Err("notify_timeout_ms must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse node configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the process environment, reading a `.env`
    /// file first when one exists.
    pub fn from_env() -> Result<Self, String> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build and validate configuration from a key lookup using the
    /// environment variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(ENV_OTHER_ENDPOINT)
            .ok_or_else(|| format!("{ENV_OTHER_ENDPOINT} is not set"))?;
        let reply_delay_ms = lookup(ENV_PONG_TIME_MS)
            .ok_or_else(|| format!("{ENV_PONG_TIME_MS} is not set"))
            .and_then(|v| parse_u64(ENV_PONG_TIME_MS, &v))?;

        let mut cfg = Self::new(endpoint, reply_delay_ms);
        if let Some(v) = lookup(ENV_DO_INITIAL_PING) {
            cfg.initial_ping = parse_bool(ENV_DO_INITIAL_PING, &v)?;
        }
        if let Some(v) = lookup(ENV_BIND_ADDR) {
            cfg.bind_addr = v
                .trim()
                .parse::<SocketAddr>()
                .map_err(|e| format!("{ENV_BIND_ADDR} `{v}` invalid: {e}"))?;
        }
        if let Some(v) = lookup(ENV_NOTIFY_TIMEOUT_MS) {
            cfg.notify_timeout_ms = parse_u64(ENV_NOTIFY_TIMEOUT_MS, &v)?;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}

fn parse_u64(key: &str, value: &str) -> Result<u64, String> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("{key} `{value}` invalid: {e}"))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(format!("{key} `{value}` is not a boolean")),
    }
}
