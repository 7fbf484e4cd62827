//! Single-slot delay scheduler with pause/resume.
//!
//! The scheduler owns at most one task. A task is either armed (a timer is
//! counting down to its fire instant) or suspended (the countdown is frozen
//! and the remaining time is stored). Submitting always replaces whatever the
//! slot holds.
//!
//! All slot transitions (submit, pause, resume and the timer fire) happen
//! under one `parking_lot::Mutex`. Each arming bumps a generation counter and
//! hands the timer task a oneshot cancel receiver; the timer only fires if the
//! slot is still armed with its generation when it takes the lock, so a
//! superseded or paused timer can never run its payload.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::{TaskExecutor, TaskPayload};

/// Identifier assigned to every submitted task.
pub type TaskId = Uuid;

/// Metadata describing a scheduled task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskMetadata {
    /// Unique task identifier.
    pub id: TaskId,
    /// Delay requested at submit time.
    pub delay: Duration,
}

/// A schedulable task with metadata and payload.
#[derive(Debug, Clone)]
pub struct ScheduledTask<P> {
    /// Metadata for logging and status.
    pub meta: TaskMetadata,
    /// Payload handed to the executor on fire.
    pub payload: P,
}

/// Abstraction for spawning timer tasks on a runtime.
pub trait Spawn {
    /// Spawn a detached future.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// Observable state of the scheduler slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// No task is pending.
    Idle,
    /// A task is counting down.
    Armed {
        /// Task identifier.
        task_id: TaskId,
        /// Time left until it fires.
        remaining: Duration,
    },
    /// A task is frozen mid-countdown.
    Suspended {
        /// Task identifier.
        task_id: TaskId,
        /// Time left that will be reapplied on resume.
        remaining: Duration,
    },
}

impl TaskState {
    /// Coarse phase without the task details.
    pub const fn phase(&self) -> TaskPhase {
        match self {
            Self::Idle => TaskPhase::Idle,
            Self::Armed { .. } => TaskPhase::Armed,
            Self::Suspended { .. } => TaskPhase::Suspended,
        }
    }

    /// Identifier of the pending task, if any.
    pub const fn task_id(&self) -> Option<TaskId> {
        match self {
            Self::Idle => None,
            Self::Armed { task_id, .. } | Self::Suspended { task_id, .. } => Some(*task_id),
        }
    }

    /// Remaining delay of the pending task, if any.
    pub const fn remaining(&self) -> Option<Duration> {
        match self {
            Self::Idle => None,
            Self::Armed { remaining, .. } | Self::Suspended { remaining, .. } => Some(*remaining),
        }
    }
}

/// Phase of the scheduler slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPhase {
    /// Nothing pending.
    Idle,
    /// Timer running.
    Armed,
    /// Countdown frozen.
    Suspended,
}

/// Lifetime counters for a scheduler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerStats {
    /// Tasks submitted.
    pub submitted: u64,
    /// Tasks discarded by a later submit.
    pub replaced: u64,
    /// Successful armed-to-suspended transitions.
    pub paused: u64,
    /// Successful suspended-to-armed transitions.
    pub resumed: u64,
    /// Tasks handed to the executor.
    pub fired: u64,
}

enum Slot<P> {
    Absent,
    Armed {
        task: ScheduledTask<P>,
        fire_at: Instant,
        generation: u64,
        // Dropping the sender wakes the timer task so it exits early.
        _cancel: oneshot::Sender<()>,
    },
    Suspended {
        task: ScheduledTask<P>,
        remaining: Duration,
    },
}

struct Inner<P> {
    slot: Slot<P>,
    generation: u64,
    stats: SchedulerStats,
}

impl<P> Inner<P> {
    /// Arm `task` for `fire_at`, dropping whatever the slot held.
    fn arm(&mut self, task: ScheduledTask<P>, fire_at: Instant) -> (u64, oneshot::Receiver<()>) {
        self.generation = self.generation.wrapping_add(1);
        let (cancel_tx, cancel_rx) = oneshot::channel();
        self.slot = Slot::Armed {
            task,
            fire_at,
            generation: self.generation,
            _cancel: cancel_tx,
        };
        (self.generation, cancel_rx)
    }

    /// Take the task out of the slot if it is still armed by `generation`.
    fn take_due(&mut self, generation: u64) -> Option<ScheduledTask<P>> {
        match &self.slot {
            Slot::Armed { generation: g, .. } if *g == generation => {}
            _ => return None,
        }
        match std::mem::replace(&mut self.slot, Slot::Absent) {
            Slot::Armed { task, .. } => {
                self.stats.fired += 1;
                Some(task)
            }
            _ => None,
        }
    }
}

/// Single-slot delayed task scheduler with pause/resume.
pub struct Scheduler<P, E, S>
where
    P: TaskPayload,
{
    inner: Arc<Mutex<Inner<P>>>,
    executor: E,
    spawner: S,
}

impl<P, E, S> Scheduler<P, E, S>
where
    P: TaskPayload,
    E: TaskExecutor<P>,
    S: Spawn,
{
    /// Create an idle scheduler that fires tasks through `executor`.
    pub fn new(executor: E, spawner: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                slot: Slot::Absent,
                generation: 0,
                stats: SchedulerStats::default(),
            })),
            executor,
            spawner,
        }
    }

    /// Arm a new task to fire after `delay`, discarding any armed or
    /// suspended task without running it.
    pub fn submit(&self, payload: P, delay: Duration) -> TaskId {
        let meta = TaskMetadata {
            id: Uuid::new_v4(),
            delay,
        };
        let task_id = meta.id;
        let fire_at = Instant::now() + delay;

        let (generation, cancel) = {
            let mut inner = self.inner.lock();
            if !matches!(inner.slot, Slot::Absent) {
                inner.stats.replaced += 1;
                debug!("task {} replaces pending task", task_id);
            }
            inner.stats.submitted += 1;
            inner.arm(ScheduledTask { meta, payload }, fire_at)
        };

        info!("task {} armed, fires in {:?}", task_id, delay);
        self.spawn_timer(generation, fire_at, cancel);
        task_id
    }

    /// Freeze the armed task, capturing its remaining time.
    ///
    /// Returns `false` (and changes nothing) when no task is armed. A task
    /// whose fire instant has passed but which has not been taken by its timer
    /// yet is still suspended, with zero time remaining.
    pub fn pause(&self) -> bool {
        let now = Instant::now();
        let mut inner = self.inner.lock();
        match std::mem::replace(&mut inner.slot, Slot::Absent) {
            Slot::Armed { task, fire_at, .. } => {
                let remaining = fire_at.saturating_duration_since(now);
                // Invalidate a timer that already woke and is waiting on the lock.
                inner.generation = inner.generation.wrapping_add(1);
                inner.stats.paused += 1;
                info!("task {} suspended with {:?} remaining", task.meta.id, remaining);
                inner.slot = Slot::Suspended { task, remaining };
                true
            }
            other => {
                inner.slot = other;
                debug!("pause ignored: no armed task");
                false
            }
        }
    }

    /// Re-arm the suspended task to fire after its captured remaining time,
    /// measured from now.
    ///
    /// Returns `false` (and changes nothing) when no task is suspended.
    pub fn resume(&self) -> bool {
        let now = Instant::now();
        let (generation, fire_at, cancel) = {
            let mut inner = self.inner.lock();
            match std::mem::replace(&mut inner.slot, Slot::Absent) {
                Slot::Suspended { task, remaining } => {
                    info!("task {} resumed, fires in {:?}", task.meta.id, remaining);
                    let fire_at = now + remaining;
                    inner.stats.resumed += 1;
                    let (generation, cancel) = inner.arm(task, fire_at);
                    (generation, fire_at, cancel)
                }
                other => {
                    inner.slot = other;
                    debug!("resume ignored: no suspended task");
                    return false;
                }
            }
        };

        self.spawn_timer(generation, fire_at, cancel);
        true
    }

    /// Snapshot of the slot.
    pub fn state(&self) -> TaskState {
        let now = Instant::now();
        let inner = self.inner.lock();
        match &inner.slot {
            Slot::Absent => TaskState::Idle,
            Slot::Armed { task, fire_at, .. } => TaskState::Armed {
                task_id: task.meta.id,
                remaining: fire_at.saturating_duration_since(now),
            },
            Slot::Suspended { task, remaining } => TaskState::Suspended {
                task_id: task.meta.id,
                remaining: *remaining,
            },
        }
    }

    /// Lifetime counters.
    pub fn stats(&self) -> SchedulerStats {
        self.inner.lock().stats
    }

    fn spawn_timer(&self, generation: u64, fire_at: Instant, cancel: oneshot::Receiver<()>) {
        let inner = Arc::clone(&self.inner);
        let executor = self.executor.clone();

        self.spawner.spawn(async move {
            tokio::select! {
                () = tokio::time::sleep_until(fire_at) => {}
                _ = cancel => {
                    debug!("timer generation {} cancelled", generation);
                    return;
                }
            }

            let due = inner.lock().take_due(generation);
            let Some(task) = due else {
                debug!("timer generation {} superseded", generation);
                return;
            };

            info!("task {} firing", task.meta.id);
            executor.execute(task.payload, task.meta).await;
        });
    }
}
