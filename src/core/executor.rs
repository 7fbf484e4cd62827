//! Task execution traits and payload abstraction.

use async_trait::async_trait;

use super::TaskMetadata;

/// Marker trait for task payloads held by the scheduler slot.
///
/// Payloads cross from the submitting caller to the timer task, so they
/// must be `Send + 'static`. No serialization is required: the slot is
/// process-local and never persisted.
pub trait TaskPayload: Send + 'static {}

/// Blanket implementation: any type meeting the requirements is a `TaskPayload`.
impl<T> TaskPayload for T where T: Send + 'static {}

/// The action a scheduled task performs when it fires.
///
/// The scheduler invokes `execute` exactly once per fired task, outside its
/// slot lock, from the spawned timer task. Implementations own their failure
/// handling: the scheduler considers the task fired whatever happens inside.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use pingpong_node::core::{TaskExecutor, TaskMetadata};
///
/// #[derive(Clone)]
/// struct LogExecutor;
///
/// #[async_trait]
/// impl TaskExecutor<String> for LogExecutor {
///     async fn execute(&self, payload: String, meta: TaskMetadata) {
///         tracing::info!(task_id = %meta.id, "fired: {payload}");
///     }
/// }
/// ```
#[async_trait]
pub trait TaskExecutor<P>: Send + Sync + Clone + 'static
where
    P: TaskPayload,
{
    /// Run the fired task's payload.
    async fn execute(&self, payload: P, meta: TaskMetadata);
}
