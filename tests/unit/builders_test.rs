//! Tests for builder modules

use pingpong_node::builders::build_node;
use pingpong_node::config::NodeConfig;
use pingpong_node::core::{NodeError, TaskPhase};
use pingpong_node::runtime::TokioSpawner;

#[tokio::test]
async fn test_build_node_from_valid_config() {
    let config = NodeConfig::new("http://localhost:20000/ping", 250).with_initial_ping(true);

    let node = build_node(&config, TokioSpawner::current()).expect("node");
    assert_eq!(node.config(), &config);
    assert_eq!(node.state().phase(), TaskPhase::Idle);
}

#[tokio::test]
async fn test_build_node_rejects_invalid_config() {
    let config = NodeConfig::new("not a url", 250);

    let result = build_node(&config, TokioSpawner::current());
    assert!(matches!(result, Err(NodeError::Config(_))));
}
