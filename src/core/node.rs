//! Node: the inbound command set wired to a scheduler and a notifier.

use std::time::Duration;

use tracing::info;
use uuid::Uuid;

use crate::config::NodeConfig;
use crate::core::{
    NotifyPeer, PeerNotifier, Scheduler, SchedulerStats, Spawn, TaskExecutor, TaskMetadata,
    TaskState,
};
use crate::runtime::TokioSpawner;

/// Acknowledgment token returned by `ping`.
pub const PONG: &str = "pong";

/// One of the two cooperating ping/pong services.
pub struct Node<E = PeerNotifier, S = TokioSpawner>
where
    E: TaskExecutor<NotifyPeer>,
    S: Spawn,
{
    config: NodeConfig,
    scheduler: Scheduler<NotifyPeer, E, S>,
    notifier: E,
}

impl<E, S> Node<E, S>
where
    E: TaskExecutor<NotifyPeer>,
    S: Spawn,
{
    /// Create a node. The configuration is assumed to be validated.
    pub fn new(config: NodeConfig, notifier: E, spawner: S) -> Self {
        Self {
            config,
            scheduler: Scheduler::new(notifier.clone(), spawner),
            notifier,
        }
    }

    /// Handle an inbound ping: schedule the reply and acknowledge at once.
    pub fn ping(&self) -> &'static str {
        let task_id = self.scheduler.submit(self.reply(), self.reply_delay());
        info!("ping received, reply task {} scheduled", task_id);
        PONG
    }

    /// Handle an inbound pause.
    pub fn pause(&self) {
        self.scheduler.pause();
    }

    /// Handle an inbound resume.
    pub fn resume(&self) {
        self.scheduler.resume();
    }

    /// Fire the initial ping if configured. Call before accepting traffic.
    pub async fn bootstrap(&self) {
        if !self.config.initial_ping {
            return;
        }
        info!("sending initial ping to {}", self.config.endpoint);
        let meta = TaskMetadata {
            id: Uuid::new_v4(),
            delay: Duration::ZERO,
        };
        self.notifier.execute(self.reply(), meta).await;
    }

    /// Snapshot of the reply task slot.
    pub fn state(&self) -> TaskState {
        self.scheduler.state()
    }

    /// Scheduler counters.
    pub fn stats(&self) -> SchedulerStats {
        self.scheduler.stats()
    }

    /// Node configuration.
    pub const fn config(&self) -> &NodeConfig {
        &self.config
    }

    fn reply(&self) -> NotifyPeer {
        NotifyPeer {
            endpoint: self.config.endpoint.clone(),
        }
    }

    const fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.config.reply_delay_ms)
    }
}
