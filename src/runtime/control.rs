//! Client for issuing commands to running nodes.

use std::time::Duration;

use tracing::info;

use crate::core::NodeError;
use crate::runtime::StatusResponse;

/// HTTP client bound to one node's base URL.
#[derive(Debug, Clone)]
pub struct ControlClient {
    client: reqwest::Client,
    base: reqwest::Url,
}

impl ControlClient {
    /// Create a client for the node at `base` (e.g. `http://localhost:10000`).
    pub fn new(base: &str, timeout: Duration) -> Result<Self, NodeError> {
        let base = reqwest::Url::parse(base)
            .map_err(|e| NodeError::Config(format!("base url `{base}` invalid: {e}")))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NodeError::Config(format!("http client: {e}")))?;
        Ok(Self { client, base })
    }

    /// Base URL of the node.
    pub const fn base(&self) -> &reqwest::Url {
        &self.base
    }

    /// Send a ping and return the acknowledgment token.
    pub async fn ping(&self) -> Result<String, NodeError> {
        let resp = self
            .client
            .get(self.url("ping")?)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(http_err)?;
        resp.json::<String>().await.map_err(http_err)
    }

    /// Suspend the node's pending reply.
    pub async fn pause(&self) -> Result<(), NodeError> {
        self.post("pause").await
    }

    /// Re-arm the node's suspended reply.
    pub async fn resume(&self) -> Result<(), NodeError> {
        self.post("resume").await
    }

    /// Fetch the node's scheduler status.
    pub async fn status(&self) -> Result<StatusResponse, NodeError> {
        let resp = self
            .client
            .get(self.url("status")?)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(http_err)?;
        resp.json::<StatusResponse>().await.map_err(http_err)
    }

    async fn post(&self, command: &str) -> Result<(), NodeError> {
        info!("{} {}", command, self.base);
        self.client
            .post(self.url(command)?)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(http_err)?;
        Ok(())
    }

    fn url(&self, path: &str) -> Result<reqwest::Url, NodeError> {
        self.base
            .join(path)
            .map_err(|e| NodeError::Config(format!("url join `{path}`: {e}")))
    }
}

/// Pause every node in order, stopping at the first failure.
pub async fn pause_all(nodes: &[ControlClient]) -> Result<(), NodeError> {
    for node in nodes {
        node.pause().await?;
    }
    Ok(())
}

/// Resume every node in order, stopping at the first failure.
pub async fn resume_all(nodes: &[ControlClient]) -> Result<(), NodeError> {
    for node in nodes {
        node.resume().await?;
    }
    Ok(())
}

fn http_err(e: reqwest::Error) -> NodeError {
    NodeError::Http(e.to_string())
}
