//! `cnnr-tensor` - Tensor type, layout transposer, and compute kernels for
//! cnn-runtime.
//!
//! This crate provides:
//! - A `Tensor` type pairing a shape with an owned flat f32 buffer
//! - A generic N-dimensional axis permutation (layout conversion)
//! - A `ComputeBackend` trait describing the primitive numeric kernels
//! - A reference `CpuBackend` implementation

pub mod backend;
pub mod cpu;
pub mod error;
pub mod shape;
pub mod tensor;
pub mod transpose;

// Re-export primary types at the crate root for convenience.
pub use backend::ComputeBackend;
pub use cpu::CpuBackend;
pub use error::{Result, TensorError};
pub use shape::Shape;
pub use tensor::Tensor;
