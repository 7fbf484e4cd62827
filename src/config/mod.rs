//! Configuration models for nodes.

pub mod node;

pub use node::NodeConfig;
