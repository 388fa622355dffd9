use thiserror::Error;

use cnnr_tensor::TensorError;

/// A failure detected by a single stage executor.
///
/// A stage validates all of its preconditions before calling a kernel, so a
/// `StageError` always means the kernel was never invoked with malformed
/// arguments.
#[derive(Error, Debug)]
pub enum StageError {
    #[error("node not found in model: {0}")]
    NodeNotFound(String),
    #[error("missing weight tensor: {0}")]
    MissingWeight(String),
    #[error("missing bias tensor: {0}")]
    MissingBias(String),
    #[error("node '{node}' is missing required attribute '{attribute}'")]
    MissingAttribute { node: String, attribute: String },
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },
    #[error("empty input vector")]
    EmptyInput,
    #[error("tensor error: {0}")]
    Tensor(#[from] TensorError),
}

/// The single structured error the driver surfaces to its caller:
/// the failing stage's name plus the underlying reason. The driver aborts
/// the remaining stage sequence as soon as one of these is produced.
#[derive(Error, Debug)]
#[error("stage '{stage}' failed: {source}")]
pub struct PipelineError {
    pub stage: String,
    #[source]
    pub source: StageError,
}

pub type Result<T> = std::result::Result<T, PipelineError>;
