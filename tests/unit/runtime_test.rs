//! Tests for runtime adapters

use std::time::Duration;

use pingpong_node::core::{SchedulerStats, Spawn, TaskPhase, TaskState};
use pingpong_node::runtime::tokio_spawner::TokioSpawner;
use pingpong_node::runtime::{ControlClient, StatusResponse};
use uuid::Uuid;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tokio_spawner_spawn() {
    let spawner = TokioSpawner::new(tokio::runtime::Handle::current());

    let (tx, rx) = tokio::sync::oneshot::channel();
    spawner.spawn(async move {
        tx.send(123).unwrap();
    });

    let result = rx.await.expect("oneshot result");
    assert_eq!(result, 123);
}

#[test]
fn test_status_response_idle() {
    let status = StatusResponse::new(TaskState::Idle, SchedulerStats::default());
    assert_eq!(status.phase, TaskPhase::Idle);
    assert_eq!(status.task_id, None);
    assert_eq!(status.remaining_ms, None);
}

#[test]
fn test_status_response_suspended() {
    let task_id = Uuid::new_v4();
    let state = TaskState::Suspended {
        task_id,
        remaining: Duration::from_millis(700),
    };
    let stats = SchedulerStats {
        submitted: 1,
        paused: 1,
        ..SchedulerStats::default()
    };

    let status = StatusResponse::new(state, stats);
    assert_eq!(status.phase, TaskPhase::Suspended);
    assert_eq!(status.task_id, Some(task_id));
    assert_eq!(status.remaining_ms, Some(700));
    assert_eq!(status.stats, stats);
}

#[test]
fn test_status_response_json_shape() {
    let status = StatusResponse::new(TaskState::Idle, SchedulerStats::default());
    let json = serde_json::to_value(&status).expect("serialize");
    assert_eq!(json["phase"], "idle");
    assert_eq!(json["stats"]["fired"], 0);
}

#[test]
fn test_control_client_rejects_bad_base() {
    assert!(ControlClient::new("not a url", Duration::from_secs(1)).is_err());
}

#[test]
fn test_control_client_base() {
    let client = ControlClient::new("http://localhost:10000", Duration::from_secs(1)).expect("client");
    assert_eq!(client.base().as_str(), "http://localhost:10000/");
}
