//! Stage executors: one function per operator kind.
//!
//! Each executor resolves whatever it needs from the graph accessor,
//! validates shapes and attributes, converts weight layouts, and invokes
//! exactly one kernel (or none, for pure shape reinterpretations). Each
//! returns a newly owned output tensor; the input is only borrowed.

mod conv;
mod dense;
mod pointwise;
mod pool;
mod reshape;

pub use conv::conv2d;
pub use dense::dense;
pub use pointwise::{bias_add, relu, softmax};
pub use pool::maxpool;
pub use reshape::{flatten, transpose};

use cnnr_tensor::Tensor;

use crate::error::StageError;

/// Interpret a tensor's shape as the pipeline's rank-3 convention,
/// failing with `ShapeMismatch` for any other rank.
fn dims3(input: &Tensor) -> Result<(usize, usize, usize), StageError> {
    let shape = input.shape();
    if shape.ndim() != 3 {
        return Err(StageError::ShapeMismatch {
            expected: vec![3],
            got: shape.dims().to_vec(),
        });
    }
    Ok((shape.dim(0), shape.dim(1), shape.dim(2)))
}
