//! Core scheduling abstractions, peer notification and the node command set.

pub mod error;
pub mod executor;
pub mod node;
pub mod notifier;
pub mod scheduler;

pub use error::{AppResult, NodeError};
pub use executor::{TaskExecutor, TaskPayload};
pub use node::{Node, PONG};
pub use notifier::{NotifyPeer, PeerNotifier};
pub use scheduler::{
    ScheduledTask, Scheduler, SchedulerStats, Spawn, TaskId, TaskMetadata, TaskPhase, TaskState,
};
