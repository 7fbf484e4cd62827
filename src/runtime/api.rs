//! HTTP surface dispatching inbound commands into a node.
//!
//! - `GET /ping` acknowledges with `"pong"` and schedules the reply
//! - `POST /pause` and `POST /resume` return `204 No Content`
//! - `GET /status` reports the reply task slot and scheduler counters
//! - `GET /health` is a liveness probe

use std::future::Future;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

use crate::core::{
    Node, NodeError, NotifyPeer, SchedulerStats, Spawn, TaskExecutor, TaskId, TaskPhase,
    TaskState,
};

/// Status response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Phase of the reply task slot.
    pub phase: TaskPhase,
    /// Pending task, if any.
    pub task_id: Option<TaskId>,
    /// Time left on the pending task, in milliseconds.
    pub remaining_ms: Option<u64>,
    /// Scheduler counters.
    pub stats: SchedulerStats,
}

impl StatusResponse {
    /// Build a response from a slot snapshot and counters.
    pub fn new(state: TaskState, stats: SchedulerStats) -> Self {
        Self {
            phase: state.phase(),
            task_id: state.task_id(),
            remaining_ms: state
                .remaining()
                .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
            stats,
        }
    }
}

/// Health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Healthy flag.
    pub ok: bool,
}

/// Build the router for `node`.
pub fn router<E, S>(node: Arc<Node<E, S>>) -> Router
where
    E: TaskExecutor<NotifyPeer>,
    S: Spawn + Send + Sync + 'static,
{
    Router::new()
        .route("/ping", get(ping::<E, S>))
        .route("/pause", post(pause::<E, S>))
        .route("/resume", post(resume::<E, S>))
        .route("/status", get(status::<E, S>))
        .route("/health", get(health))
        .with_state(node)
}

/// Serve `node` on `listener` until `shutdown` completes.
pub async fn serve<E, S, F>(
    listener: TcpListener,
    node: Arc<Node<E, S>>,
    shutdown: F,
) -> Result<(), NodeError>
where
    E: TaskExecutor<NotifyPeer>,
    S: Spawn + Send + Sync + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(node))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("listener stopped");
    Ok(())
}

async fn ping<E, S>(State(node): State<Arc<Node<E, S>>>) -> Json<&'static str>
where
    E: TaskExecutor<NotifyPeer>,
    S: Spawn + Send + Sync + 'static,
{
    Json(node.ping())
}

async fn pause<E, S>(State(node): State<Arc<Node<E, S>>>) -> StatusCode
where
    E: TaskExecutor<NotifyPeer>,
    S: Spawn + Send + Sync + 'static,
{
    info!("pause");
    node.pause();
    StatusCode::NO_CONTENT
}

async fn resume<E, S>(State(node): State<Arc<Node<E, S>>>) -> StatusCode
where
    E: TaskExecutor<NotifyPeer>,
    S: Spawn + Send + Sync + 'static,
{
    info!("resume");
    node.resume();
    StatusCode::NO_CONTENT
}

async fn status<E, S>(State(node): State<Arc<Node<E, S>>>) -> Json<StatusResponse>
where
    E: TaskExecutor<NotifyPeer>,
    S: Spawn + Send + Sync + 'static,
{
    Json(StatusResponse::new(node.state(), node.stats()))
}

async fn health() -> Json<Health> {
    Json(Health { ok: true })
}
