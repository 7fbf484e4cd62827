//! Runtime adapters: tokio spawning, the HTTP surface and its client.

pub mod api;
pub mod control;
pub mod tokio_spawner;

pub use api::{router, serve, Health, StatusResponse};
pub use control::{pause_all, resume_all, ControlClient};
pub use tokio_spawner::TokioSpawner;
