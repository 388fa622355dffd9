//! `cnnr-graph` - Operator-graph accessor contract and in-memory model for
//! cnn-runtime.
//!
//! This crate provides:
//! - The read-only operator node / attribute data model
//! - The `GraphAccessor` lookup trait the pipeline consumes
//! - An `InMemoryGraph` accessor used by the demo model and tests

pub mod accessor;
pub mod memory;
pub mod node;

pub use accessor::GraphAccessor;
pub use memory::InMemoryGraph;
pub use node::{Attribute, OperatorNode};
