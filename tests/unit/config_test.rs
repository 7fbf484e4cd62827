//! Tests for configuration validation and loading

use std::collections::HashMap;

use pingpong_node::config::NodeConfig;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_node_config_validation() {
    let valid = NodeConfig::new("http://localhost:20000/ping", 1000);
    assert!(valid.validate().is_ok());
}

#[test]
fn test_node_config_zero_delay_is_valid() {
    let valid = NodeConfig::new("http://localhost:20000/ping", 0);
    assert!(valid.validate().is_ok());
}

#[test]
fn test_node_config_empty_endpoint() {
    let invalid = NodeConfig::new("  ", 1000);
    assert!(invalid.validate().is_err());
}

#[test]
fn test_node_config_unparseable_endpoint() {
    let invalid = NodeConfig::new("localhost ping", 1000);
    assert!(invalid.validate().is_err());
}

#[test]
fn test_node_config_non_http_endpoint() {
    let invalid = NodeConfig::new("ftp://localhost/ping", 1000);
    assert!(invalid.validate().is_err());
}

#[test]
fn test_node_config_invalid_timeout() {
    let mut invalid = NodeConfig::new("http://localhost:20000/ping", 1000);
    invalid.notify_timeout_ms = 0;
    assert!(invalid.validate().is_err());
}

#[test]
fn test_node_config_from_json() {
    let json = r#"{
        "endpoint": "http://localhost:20000/ping",
        "reply_delay_ms": 1500,
        "initial_ping": true
    }"#;

    let config = NodeConfig::from_json_str(json).expect("valid config");
    assert_eq!(config.reply_delay_ms, 1500);
    assert!(config.initial_ping);
    assert_eq!(config.bind_addr.port(), 10000);
    assert_eq!(config.notify_timeout_ms, 5000);
}

#[test]
fn test_node_config_from_json_missing_delay() {
    let json = r#"{ "endpoint": "http://localhost:20000/ping" }"#;
    assert!(NodeConfig::from_json_str(json).is_err());
}

#[test]
fn test_node_config_from_lookup() {
    let config = NodeConfig::from_lookup(lookup(&[
        ("OTHER_ENDPOINT", "http://localhost:10000/ping"),
        ("PONG_TIME_MS", "2500"),
        ("DO_INITIAL_PING", "True"),
        ("BIND_ADDR", "127.0.0.1:20000"),
        ("NOTIFY_TIMEOUT_MS", "750"),
    ]))
    .expect("valid config");

    assert_eq!(config.endpoint, "http://localhost:10000/ping");
    assert_eq!(config.reply_delay_ms, 2500);
    assert!(config.initial_ping);
    assert_eq!(config.bind_addr.port(), 20000);
    assert_eq!(config.notify_timeout_ms, 750);
}

#[test]
fn test_node_config_from_lookup_defaults() {
    let config = NodeConfig::from_lookup(lookup(&[
        ("OTHER_ENDPOINT", "http://localhost:10000/ping"),
        ("PONG_TIME_MS", "100"),
    ]))
    .expect("valid config");

    assert!(!config.initial_ping);
    assert_eq!(config, NodeConfig::new("http://localhost:10000/ping", 100));
}

#[test]
fn test_node_config_from_lookup_missing_endpoint() {
    let err = NodeConfig::from_lookup(lookup(&[("PONG_TIME_MS", "100")])).unwrap_err();
    assert!(err.contains("OTHER_ENDPOINT"));
}

#[test]
fn test_node_config_from_lookup_negative_delay() {
    let err = NodeConfig::from_lookup(lookup(&[
        ("OTHER_ENDPOINT", "http://localhost:10000/ping"),
        ("PONG_TIME_MS", "-5"),
    ]))
    .unwrap_err();
    assert!(err.contains("PONG_TIME_MS"));
}

#[test]
fn test_node_config_from_lookup_bad_bool() {
    let err = NodeConfig::from_lookup(lookup(&[
        ("OTHER_ENDPOINT", "http://localhost:10000/ping"),
        ("PONG_TIME_MS", "100"),
        ("DO_INITIAL_PING", "maybe"),
    ]))
    .unwrap_err();
    assert!(err.contains("DO_INITIAL_PING"));
}
