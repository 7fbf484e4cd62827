//! Outbound "notify peer" action.
//!
//! A single HTTP `GET` against the peer's ping endpoint. There is no retry
//! and no acknowledgment beyond the HTTP status: when the call fails the
//! failure is logged and the task still counts as fired.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::core::{NodeError, TaskExecutor, TaskMetadata};

/// Payload of a reply task: the peer endpoint to ping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyPeer {
    /// Full URL of the peer's ping operation.
    pub endpoint: String,
}

/// HTTP notifier for the peer node.
#[derive(Debug, Clone)]
pub struct PeerNotifier {
    client: reqwest::Client,
}

impl PeerNotifier {
    /// Build a notifier whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, NodeError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NodeError::Config(format!("http client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Ping `endpoint` once.
    pub async fn notify(&self, endpoint: &str) -> Result<(), NodeError> {
        info!("pinging {}", endpoint);
        self.client
            .get(endpoint)
            .send()
            .await
            .map_err(|e| NodeError::Notify(e.to_string()))?
            .error_for_status()
            .map_err(|e| NodeError::Notify(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl TaskExecutor<NotifyPeer> for PeerNotifier {
    async fn execute(&self, payload: NotifyPeer, meta: TaskMetadata) {
        if let Err(e) = self.notify(&payload.endpoint).await {
            warn!("task {} failed to notify {}: {}", meta.id, payload.endpoint, e);
        }
    }
}
