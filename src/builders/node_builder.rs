//! Builders to construct nodes from configuration.

use std::time::Duration;

use crate::config::NodeConfig;
use crate::core::{Node, NodeError, PeerNotifier, Spawn};

/// Validate `cfg` and build a node that notifies its peer over HTTP.
pub fn build_node<S>(cfg: &NodeConfig, spawner: S) -> Result<Node<PeerNotifier, S>, NodeError>
where
    S: Spawn,
{
    cfg.validate()
        .map_err(|e| NodeError::Config(format!("config invalid: {e}")))?;

    let notifier = PeerNotifier::new(Duration::from_millis(cfg.notify_timeout_ms))?;
    tracing::info!(
        "node configured: peer={} reply_delay_ms={} initial_ping={}",
        cfg.endpoint,
        cfg.reply_delay_ms,
        cfg.initial_ping
    );
    Ok(Node::new(cfg.clone(), notifier, spawner))
}
