//! Tests for error types

use pingpong_node::core::NodeError;

#[test]
fn test_config_error() {
    let err = NodeError::Config("endpoint must not be empty".to_string());
    assert_eq!(format!("{}", err), "config error: endpoint must not be empty");
}

#[test]
fn test_notify_error() {
    let err = NodeError::Notify("connection refused".to_string());
    assert_eq!(format!("{}", err), "notify error: connection refused");
}

#[test]
fn test_http_error() {
    let err = NodeError::Http("timed out".to_string());
    assert_eq!(format!("{}", err), "http error: timed out");
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
    let err: NodeError = io.into();
    assert!(matches!(err, NodeError::Io(_)));
    assert_eq!(format!("{}", err), "io error: port taken");
}
