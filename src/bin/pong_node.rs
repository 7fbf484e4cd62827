//! Ping/pong node server.
//!
//! Reads its configuration from the environment (and `.env`):
//! `OTHER_ENDPOINT`, `PONG_TIME_MS`, `DO_INITIAL_PING`, `BIND_ADDR`,
//! `NOTIFY_TIMEOUT_MS`.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use pingpong_node::builders::build_node;
use pingpong_node::config::NodeConfig;
use pingpong_node::core::AppResult;
use pingpong_node::runtime::{serve, TokioSpawner};
use pingpong_node::util::init_tracing;

#[tokio::main]
async fn main() -> AppResult<()> {
    init_tracing();

    let config = NodeConfig::from_env().map_err(anyhow::Error::msg)?;
    let node = Arc::new(build_node(&config, TokioSpawner::current())?);

    node.bootstrap().await;

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    serve(listener, node, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            error!("failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
