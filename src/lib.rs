//! # Ping/Pong Node
//!
//! A pair of cooperating HTTP nodes that bounce a ping back and forth, where
//! either side can be paused and later resumed without losing its place in
//! the countdown.
//!
//! Each node receives `ping`, acknowledges with `"pong"`, and schedules a
//! reply to its peer after a configured delay. The reply lives in a
//! single-slot delay scheduler:
//!
//! - **Submit** arms a task, replacing whatever was pending
//! - **Pause** freezes the armed task and records its remaining time
//! - **Resume** re-arms the frozen task for `now + remaining`
//!
//! The time spent suspended does not count toward the delay: a 10s task
//! paused after 3s and resumed 100s later fires 7s after the resume.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pingpong_node::builders::build_node;
//! use pingpong_node::config::NodeConfig;
//! use pingpong_node::runtime::{serve, TokioSpawner};
//!
//! let config = NodeConfig::new("http://localhost:20000/ping", 1000).with_initial_ping(true);
//! let node = Arc::new(build_node(&config, TokioSpawner::current())?);
//! node.bootstrap().await;
//!
//! let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
//! serve(listener, node, std::future::pending()).await?;
//! ```
//!
//! The scheduler itself is generic over the fired action and the runtime
//! spawner, see [`core::Scheduler`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Delay scheduler, peer notification and the node command set.
pub mod core;
/// Configuration models for nodes.
pub mod config;
/// Builders to construct nodes from configuration.
pub mod builders;
/// Runtime adapters and the HTTP surface.
pub mod runtime;
/// Shared utilities.
pub mod util;
