//! Generic axis permutation over an N-dimensional contiguous buffer.
//!
//! Weight tensors arrive in the model's channel-major storage layout; the
//! kernels consume channel-last ordering. This module performs that
//! conversion for any rank (rank 2 for dense weight matrices, rank 4 for
//! convolution weights).

use crate::error::{Result, TensorError};
use crate::shape::Shape;

/// Reorder `data` so that the axis order `perm` becomes the new storage
/// order, returning the new buffer and the identically permuted shape.
///
/// `perm[k]` names the source axis that becomes output axis `k`; for a
/// rank-2 shape, `[1, 0]` is the ordinary matrix transpose.
///
/// Errors with `InvalidPermutation` unless `perm` is a bijection on
/// `0..shape.ndim()`, and with `ShapeMismatch` if `data` does not hold
/// exactly `shape.numel()` elements.
pub fn transpose(data: &[f32], shape: &Shape, perm: &[usize]) -> Result<(Vec<f32>, Shape)> {
    let ndim = shape.ndim();
    check_permutation(perm, ndim)?;
    if data.len() != shape.numel() {
        return Err(TensorError::ShapeMismatch {
            expected: shape.dims().to_vec(),
            got: vec![data.len()],
        });
    }

    let out_dims: Vec<usize> = perm.iter().map(|&axis| shape.dim(axis)).collect();
    let out_shape = Shape::new(out_dims);

    let in_strides = shape.strides();
    let out_strides = out_shape.strides();

    let mut out = vec![0.0f32; data.len()];
    for (j, slot) in out.iter_mut().enumerate() {
        // Decompose the output index into coordinates, then gather from the
        // source using the permuted axis strides.
        let mut src = 0usize;
        for k in 0..ndim {
            let coord = (j / out_strides[k]) % out_shape.dim(k);
            src += coord * in_strides[perm[k]];
        }
        *slot = data[src];
    }

    Ok((out, out_shape))
}

/// The permutation that undoes `perm`.
pub fn inverse(perm: &[usize]) -> Vec<usize> {
    let mut inv = vec![0usize; perm.len()];
    for (k, &axis) in perm.iter().enumerate() {
        inv[axis] = k;
    }
    inv
}

fn check_permutation(perm: &[usize], ndim: usize) -> Result<()> {
    let mut seen = vec![false; ndim];
    let valid = perm.len() == ndim
        && perm.iter().all(|&axis| {
            if axis >= ndim || seen[axis] {
                return false;
            }
            seen[axis] = true;
            true
        });
    if valid {
        Ok(())
    } else {
        Err(TensorError::InvalidPermutation {
            perm: perm.to_vec(),
            ndim,
        })
    }
}
