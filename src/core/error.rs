//! Error types for node operations.

use thiserror::Error;

/// Errors produced by node components.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Configuration is missing or invalid; the node must not start.
    #[error("config error: {0}")]
    Config(String),
    /// Outbound notification to the peer failed.
    #[error("notify error: {0}")]
    Notify(String),
    /// Control request against a node failed.
    #[error("http error: {0}")]
    Http(String),
    /// Listener or socket failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
