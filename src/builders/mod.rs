//! Builders to construct nodes from configuration.

pub mod node_builder;

pub use node_builder::build_node;
