use crate::error::{Result, TensorError};
use crate::shape::Shape;
use crate::transpose;

/// A tensor pairing an owned, contiguous f32 buffer with a shape.
///
/// This is the unit of data flowing between pipeline stages. Spatial stages
/// interpret a rank-3 shape as (width, height, channels) with the flat index
/// `(x * height + y) * channels + c`; dense stages use (1, features, 1).
/// The type itself is rank-agnostic so that rank-2 and rank-4 weight tensors
/// can pass through the layout transposer.
#[derive(Debug, Clone)]
pub struct Tensor {
    data: Vec<f32>,
    shape: Shape,
}

impl Tensor {
    /// Create a new tensor from f32 data and a shape.
    ///
    /// # Panics
    /// Panics if `data.len() != shape.numel()`.
    pub fn new(data: Vec<f32>, shape: Shape) -> Self {
        assert_eq!(
            data.len(),
            shape.numel(),
            "data length {} does not match shape {} (numel={})",
            data.len(),
            shape,
            shape.numel()
        );
        Tensor { data, shape }
    }

    /// Create a zero-filled tensor with the given shape.
    pub fn zeros(shape: Shape) -> Self {
        let n = shape.numel();
        Tensor {
            data: vec![0.0; n],
            shape,
        }
    }

    /// Returns a reference to the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    /// Returns the underlying data as an f32 slice.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Consumes the tensor and returns the underlying buffer.
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// Reinterpret the tensor under a new shape with the same element count.
    ///
    /// Consumes the tensor and rebinds the existing buffer without copying.
    /// This is how the flatten transition collapses (w, h, c) into
    /// (1, w*h*c, 1).
    pub fn reshape(self, new_shape: Shape) -> Result<Tensor> {
        if self.shape.numel() != new_shape.numel() {
            return Err(TensorError::ShapeMismatch {
                expected: self.shape.dims().to_vec(),
                got: new_shape.dims().to_vec(),
            });
        }
        Ok(Tensor {
            data: self.data,
            shape: new_shape,
        })
    }

    /// Permute the tensor's axes, producing a newly allocated tensor.
    ///
    /// See [`transpose::transpose`] for the permutation contract.
    pub fn permute(&self, perm: &[usize]) -> Result<Tensor> {
        let (data, shape) = transpose::transpose(&self.data, &self.shape, perm)?;
        Ok(Tensor { data, shape })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tensor() {
        let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], Shape::new(vec![2, 3]));
        assert_eq!(t.shape().dims(), &[2, 3]);
        assert_eq!(t.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(t.numel(), 6);
    }

    #[test]
    fn test_zeros() {
        let z = Tensor::zeros(Shape::new(vec![2, 3]));
        assert_eq!(z.data(), &[0.0; 6]);
    }

    #[test]
    #[should_panic]
    fn test_new_length_mismatch_panics() {
        let _t = Tensor::new(vec![1.0, 2.0], Shape::new(vec![3]));
    }

    #[test]
    fn test_reshape_keeps_order() {
        let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], Shape::new(vec![2, 3, 1]));
        let r = t.reshape(Shape::new(vec![1, 6, 1])).unwrap();
        assert_eq!(r.shape().dims(), &[1, 6, 1]);
        assert_eq!(r.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_reshape_mismatch() {
        let t = Tensor::new(vec![1.0, 2.0, 3.0], Shape::new(vec![3]));
        assert!(t.reshape(Shape::new(vec![2, 2])).is_err());
    }
}
