//! `cnnr-pipeline` - Fixed-pipeline CNN layer orchestration for cnn-runtime.
//!
//! This crate provides:
//! - Stage executors implementing the shape/layout contract of each
//!   operator kind (convolution, pooling, dense, bias-add, activation,
//!   transpose, softmax, flatten)
//! - A declarative `Pipeline` driver threading tensors through the fixed
//!   stage sequence with fail-fast error propagation
//! - Structured stage errors (`PipelineError` / `StageError`)
//! - The embedded demo model and labeled sample digits

pub mod demo;
pub mod driver;
pub mod error;
pub mod plan;
pub mod stages;
mod tables;

pub use driver::{argmax, Pipeline};
pub use error::{PipelineError, Result, StageError};
pub use plan::{StageKind, StageSpec};
