use cnnr_graph::{GraphAccessor, OperatorNode};
use cnnr_tensor::{ComputeBackend, Shape, Tensor};

use crate::error::StageError;

use super::dims3;

// Pooling never pads in this pipeline.
const PAD: usize = 0;

/// Max-pooling stage.
///
/// Reads the pooling window and stride from the node's `kernel_shape` and
/// `strides` attributes; either one absent (or unusable) is a
/// `MissingAttribute`, never a silent sentinel that flows into the shape
/// arithmetic. Output spatial extent per axis is
/// `floor((in - kernel + 2*pad) / stride) + 1`, with truncating division.
pub fn maxpool(
    graph: &dyn GraphAccessor,
    backend: &dyn ComputeBackend,
    input: &Tensor,
    node_name: &str,
) -> Result<Tensor, StageError> {
    let (in_w, in_h, channels) = dims3(input)?;

    let node = graph
        .find_node(node_name)
        .ok_or_else(|| StageError::NodeNotFound(node_name.to_string()))?;
    let (k_w, k_h) = require_pair(node, "kernel_shape")?;
    let (s_w, s_h) = require_pair(node, "strides")?;

    let out_w = pooled_extent(in_w, k_w, PAD, s_w);
    let out_h = pooled_extent(in_h, k_h, PAD, s_h);
    let (out_w, out_h) = match (out_w, out_h) {
        (Some(w), Some(h)) => (w, h),
        _ => {
            return Err(StageError::ShapeMismatch {
                expected: vec![k_w, k_h],
                got: vec![in_w, in_h],
            })
        }
    };

    let out = backend.maxpool2d(
        input.data(),
        in_w,
        in_h,
        channels,
        k_w,
        k_h,
        s_w,
        s_h,
        out_w,
        out_h,
    )?;

    Ok(Tensor::new(out, Shape::new(vec![out_w, out_h, channels])))
}

/// Output extent of a pooling axis, `None` when the window does not fit.
fn pooled_extent(input: usize, kernel: usize, pad: usize, stride: usize) -> Option<usize> {
    let adjusted = input as i64 - kernel as i64 + 2 * pad as i64;
    if adjusted < 0 {
        return None;
    }
    // Non-negative operands, so truncating division is the floor.
    Some((adjusted / stride as i64) as usize + 1)
}

/// Resolve a two-element positive integer attribute.
fn require_pair(node: &OperatorNode, attribute: &str) -> Result<(usize, usize), StageError> {
    let missing = || StageError::MissingAttribute {
        node: node.name.clone(),
        attribute: attribute.to_string(),
    };
    let ints = node.attr_ints(attribute).ok_or_else(missing)?;
    match ints {
        &[a, b] if a > 0 && b > 0 => Ok((a as usize, b as usize)),
        _ => Err(missing()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnnr_graph::InMemoryGraph;
    use cnnr_tensor::CpuBackend;

    fn pool_graph(kernel: Option<Vec<i64>>, strides: Option<Vec<i64>>) -> InMemoryGraph {
        let mut g = InMemoryGraph::new();
        let mut node = OperatorNode::new("pool", vec!["x".into()]);
        if let Some(k) = kernel {
            node = node.with_attr("kernel_shape", k);
        }
        if let Some(s) = strides {
            node = node.with_attr("strides", s);
        }
        g.add_node(node);
        g
    }

    #[test]
    fn test_output_extent_formula() {
        // S=24, K=2, T=2 -> 12
        let g = pool_graph(Some(vec![2, 2]), Some(vec![2, 2]));
        let input = Tensor::zeros(Shape::new(vec![24, 24, 3]));
        let out = maxpool(&g, &CpuBackend::new(), &input, "pool").unwrap();
        assert_eq!(out.shape().dims(), &[12, 12, 3]);
        assert_eq!(out.numel(), out.data().len());
    }

    #[test]
    fn test_truncating_division() {
        // (5 - 2) / 2 + 1 = 2 (truncated, not rounded)
        let g = pool_graph(Some(vec![2, 2]), Some(vec![2, 2]));
        let input = Tensor::zeros(Shape::new(vec![5, 5, 1]));
        let out = maxpool(&g, &CpuBackend::new(), &input, "pool").unwrap();
        assert_eq!(out.shape().dims(), &[2, 2, 1]);
    }

    #[test]
    fn test_missing_kernel_shape() {
        let g = pool_graph(None, Some(vec![2, 2]));
        let input = Tensor::zeros(Shape::new(vec![4, 4, 1]));
        let err = maxpool(&g, &CpuBackend::new(), &input, "pool").unwrap_err();
        assert!(matches!(
            err,
            StageError::MissingAttribute { ref attribute, .. } if attribute == "kernel_shape"
        ));
    }

    #[test]
    fn test_missing_strides() {
        let g = pool_graph(Some(vec![2, 2]), None);
        let input = Tensor::zeros(Shape::new(vec![4, 4, 1]));
        let err = maxpool(&g, &CpuBackend::new(), &input, "pool").unwrap_err();
        assert!(matches!(
            err,
            StageError::MissingAttribute { ref attribute, .. } if attribute == "strides"
        ));
    }

    #[test]
    fn test_window_larger_than_input() {
        let g = pool_graph(Some(vec![8, 8]), Some(vec![2, 2]));
        let input = Tensor::zeros(Shape::new(vec![4, 4, 1]));
        let err = maxpool(&g, &CpuBackend::new(), &input, "pool").unwrap_err();
        assert!(matches!(err, StageError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_values_28_to_14() {
        let g = pool_graph(Some(vec![2, 2]), Some(vec![2, 2]));
        let data: Vec<f32> = (0..784).map(|v| v as f32).collect();
        let input = Tensor::new(data, Shape::new(vec![28, 28, 1]));
        let out = maxpool(&g, &CpuBackend::new(), &input, "pool").unwrap();
        assert_eq!(out.shape().dims(), &[14, 14, 1]);
        // Each window's max is its bottom-right corner.
        assert_eq!(out.data()[0], 29.0);
    }
}
