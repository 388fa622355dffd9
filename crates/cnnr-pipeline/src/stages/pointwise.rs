use cnnr_graph::GraphAccessor;
use cnnr_tensor::{ComputeBackend, Shape, Tensor};

use crate::error::StageError;

use super::dims3;

/// Bias-add stage: resolves the node's bias vector (`inputs[1]`) and adds it
/// elementwise. The bias length must match the current feature count.
pub fn bias_add(
    graph: &dyn GraphAccessor,
    backend: &dyn ComputeBackend,
    input: &Tensor,
    node_name: &str,
) -> Result<Tensor, StageError> {
    let (_, features, _) = dims3(input)?;

    let node = graph
        .find_node(node_name)
        .ok_or_else(|| StageError::NodeNotFound(node_name.to_string()))?;
    let bias_name = node
        .input(1)
        .ok_or_else(|| StageError::MissingBias(node_name.to_string()))?;
    let bias = graph
        .weights(bias_name)
        .ok_or_else(|| StageError::MissingBias(bias_name.to_string()))?;
    if bias.len() != features {
        return Err(StageError::ShapeMismatch {
            expected: vec![features],
            got: vec![bias.len()],
        });
    }

    let out = backend.bias_add(input.data(), bias)?;
    let len = out.len();
    Ok(Tensor::new(out, Shape::new(vec![1, len, 1])))
}

/// Activation stage: rectified-linear over the full flattened length.
/// Shape is unchanged; no graph lookup is needed.
pub fn relu(backend: &dyn ComputeBackend, input: &Tensor) -> Result<Tensor, StageError> {
    let out = backend.relu(input.data())?;
    Ok(Tensor::new(out, input.shape().clone()))
}

/// Softmax stage: normalizes the feature vector into probabilities.
/// Fails with `EmptyInput` for a zero-length vector; the kernel handles
/// overflow-safe normalization.
pub fn softmax(backend: &dyn ComputeBackend, input: &Tensor) -> Result<Tensor, StageError> {
    let (_, features, _) = dims3(input)?;
    if features == 0 {
        return Err(StageError::EmptyInput);
    }
    let out = backend.softmax(input.data(), features)?;
    Ok(Tensor::new(out, input.shape().clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cnnr_graph::{InMemoryGraph, OperatorNode};
    use cnnr_tensor::CpuBackend;

    fn bias_graph(len: usize) -> InMemoryGraph {
        let mut g = InMemoryGraph::new();
        g.add_tensor("fc.bias", vec![len], (0..len).map(|v| v as f32).collect());
        g.add_node(OperatorNode::new(
            "add",
            vec!["x".into(), "fc.bias".into()],
        ));
        g
    }

    #[test]
    fn test_bias_add() {
        let g = bias_graph(3);
        let input = Tensor::new(vec![10.0, 10.0, 10.0], Shape::new(vec![1, 3, 1]));
        let out = bias_add(&g, &CpuBackend::new(), &input, "add").unwrap();
        assert_eq!(out.shape().dims(), &[1, 3, 1]);
        assert_eq!(out.data(), &[10.0, 11.0, 12.0]);
    }

    #[test]
    fn test_bias_length_mismatch() {
        let g = bias_graph(4);
        let input = Tensor::zeros(Shape::new(vec![1, 3, 1]));
        let err = bias_add(&g, &CpuBackend::new(), &input, "add").unwrap_err();
        assert!(matches!(err, StageError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_missing_bias() {
        let mut g = InMemoryGraph::new();
        g.add_node(OperatorNode::new(
            "add",
            vec!["x".into(), "fc.bias".into()],
        ));
        let input = Tensor::zeros(Shape::new(vec![1, 3, 1]));
        let err = bias_add(&g, &CpuBackend::new(), &input, "add").unwrap_err();
        assert!(matches!(err, StageError::MissingBias(_)));
    }

    #[test]
    fn test_relu_preserves_shape() {
        let input = Tensor::new(
            vec![-1.0, 2.0, -3.0, 4.0, -5.0, 6.0],
            Shape::new(vec![3, 2, 1]),
        );
        let out = relu(&CpuBackend::new(), &input).unwrap();
        assert_eq!(out.shape().dims(), &[3, 2, 1]);
        assert_eq!(out.data(), &[0.0, 2.0, 0.0, 4.0, 0.0, 6.0]);
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let input = Tensor::new(vec![0.5, 1.5, -0.5], Shape::new(vec![1, 3, 1]));
        let out = softmax(&CpuBackend::new(), &input).unwrap();
        assert_eq!(out.shape().dims(), &[1, 3, 1]);
        let sum: f32 = out.data().iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_softmax_empty_input() {
        let input = Tensor::zeros(Shape::new(vec![1, 0, 1]));
        let err = softmax(&CpuBackend::new(), &input).unwrap_err();
        assert!(matches!(err, StageError::EmptyInput));
    }
}
