use cnnr_graph::GraphAccessor;
use cnnr_tensor::{Shape, Tensor};

use crate::error::StageError;

use super::dims3;

/// Transpose stage: applies a spatial layout change described by the node's
/// 4-element `perm` attribute. The first element is a batch-axis placeholder
/// and is discarded; the remaining three become a zero-based permutation of
/// the rank-3 shape after subtracting one. Used when the model's raw layout
/// convention differs from the pipeline's internal one; the default MNIST
/// plan skips it because the sample images are already channel-last.
pub fn transpose(
    graph: &dyn GraphAccessor,
    input: &Tensor,
    node_name: &str,
) -> Result<Tensor, StageError> {
    dims3(input)?;

    let node = graph
        .find_node(node_name)
        .ok_or_else(|| StageError::NodeNotFound(node_name.to_string()))?;
    let perm = node
        .attr_ints("perm")
        .filter(|p| p.len() == 4)
        .ok_or_else(|| StageError::MissingAttribute {
            node: node.name.clone(),
            attribute: "perm".to_string(),
        })?;

    // Drop the batch placeholder and shift to zero-based axes. Out-of-range
    // entries wrap to values the transposer rejects as non-bijective.
    let axes: Vec<usize> = perm[1..]
        .iter()
        .map(|&p| p.wrapping_sub(1) as usize)
        .collect();

    input.permute(&axes).map_err(Into::into)
}

/// Flatten transition: reinterpret (w, h, c) as (1, w*h*c, 1).
///
/// Pure shape change; consumes the tensor and rebinds its buffer without a
/// kernel call or copy.
pub fn flatten(input: Tensor) -> Result<Tensor, StageError> {
    let (w, h, c) = dims3(&input)?;
    input
        .reshape(Shape::new(vec![1, w * h * c, 1]))
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnnr_graph::{InMemoryGraph, OperatorNode};
    use cnnr_tensor::TensorError;

    fn transpose_graph(perm: Vec<i64>) -> InMemoryGraph {
        let mut g = InMemoryGraph::new();
        g.add_node(OperatorNode::new("t", vec!["x".into()]).with_attr("perm", perm));
        g
    }

    #[test]
    fn test_transpose_permutes_shape() {
        // (2, 3, 1) with perm [0, 3, 1, 2] -> axes [2, 0, 1] -> (1, 2, 3)
        let g = transpose_graph(vec![0, 3, 1, 2]);
        let input = Tensor::new(
            (0..6).map(|v| v as f32).collect(),
            Shape::new(vec![2, 3, 1]),
        );
        let out = transpose(&g, &input, "t").unwrap();
        assert_eq!(out.shape().dims(), &[1, 2, 3]);
        assert_eq!(out.numel(), out.data().len());
    }

    #[test]
    fn test_transpose_identity_perm() {
        let g = transpose_graph(vec![0, 1, 2, 3]);
        let input = Tensor::new(
            (0..6).map(|v| v as f32).collect(),
            Shape::new(vec![2, 3, 1]),
        );
        let out = transpose(&g, &input, "t").unwrap();
        assert_eq!(out.shape().dims(), &[2, 3, 1]);
        assert_eq!(out.data(), input.data());
    }

    #[test]
    fn test_transpose_missing_perm() {
        let mut g = InMemoryGraph::new();
        g.add_node(OperatorNode::new("t", vec!["x".into()]));
        let input = Tensor::zeros(Shape::new(vec![2, 3, 1]));
        let err = transpose(&g, &input, "t").unwrap_err();
        assert!(matches!(err, StageError::MissingAttribute { .. }));
    }

    #[test]
    fn test_transpose_bad_perm_rejected() {
        let g = transpose_graph(vec![0, 1, 1, 2]);
        let input = Tensor::zeros(Shape::new(vec![2, 3, 1]));
        let err = transpose(&g, &input, "t").unwrap_err();
        assert!(matches!(
            err,
            StageError::Tensor(TensorError::InvalidPermutation { .. })
        ));
    }

    #[test]
    fn test_flatten_preserves_order() {
        let data: Vec<f32> = (0..24).map(|v| v as f32).collect();
        let input = Tensor::new(data.clone(), Shape::new(vec![4, 3, 2]));
        let out = flatten(input).unwrap();
        assert_eq!(out.shape().dims(), &[1, 24, 1]);
        assert_eq!(out.data(), data.as_slice());
    }
}
