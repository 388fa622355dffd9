use cnnr_graph::GraphAccessor;
use cnnr_tensor::{transpose, ComputeBackend, Shape, Tensor};

use crate::error::StageError;

use super::dims3;

/// Dense (matrix-multiply) stage.
///
/// The input is a flattened feature vector (1, features, 1). The weight
/// matrix is stored [inFeatures, outFeatures]; it is transposed to
/// output-major orientation before the matmul so the kernel computes
/// `(outF, inF) @ (inF, 1)`. Output shape is (1, outFeatures, 1).
pub fn dense(
    graph: &dyn GraphAccessor,
    backend: &dyn ComputeBackend,
    input: &Tensor,
    node_name: &str,
) -> Result<Tensor, StageError> {
    let (_, features, _) = dims3(input)?;

    let node = graph
        .find_node(node_name)
        .ok_or_else(|| StageError::NodeNotFound(node_name.to_string()))?;
    let weight_name = node
        .input(1)
        .ok_or_else(|| StageError::MissingWeight(node_name.to_string()))?;

    let w_shape = graph
        .tensor_shape(weight_name)
        .ok_or_else(|| StageError::MissingWeight(weight_name.to_string()))?;
    let w_data = graph
        .weights(weight_name)
        .ok_or_else(|| StageError::MissingWeight(weight_name.to_string()))?;
    if w_shape.len() != 2 {
        return Err(StageError::ShapeMismatch {
            expected: vec![2],
            got: w_shape.to_vec(),
        });
    }
    let (in_f, out_f) = (w_shape[0], w_shape[1]);
    if in_f != features {
        return Err(StageError::ShapeMismatch {
            expected: vec![features],
            got: vec![in_f],
        });
    }

    let (w_t, _) = transpose::transpose(w_data, &Shape::from_slice(w_shape), &[1, 0])?;
    let out = backend.matmul(&w_t, input.data(), out_f, in_f, 1)?;

    Ok(Tensor::new(out, Shape::new(vec![1, out_f, 1])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnnr_graph::{InMemoryGraph, OperatorNode};
    use cnnr_tensor::CpuBackend;

    fn dense_graph() -> InMemoryGraph {
        let mut g = InMemoryGraph::new();
        // 3 inputs -> 2 outputs, stored [inFeatures, outFeatures].
        g.add_tensor(
            "fc.weight",
            vec![3, 2],
            vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0],
        );
        g.add_node(OperatorNode::new(
            "fc",
            vec!["x".into(), "fc.weight".into()],
        ));
        g
    }

    #[test]
    fn test_three_features_to_two() {
        let g = dense_graph();
        let input = Tensor::new(vec![1.0, 1.0, 1.0], Shape::new(vec![1, 3, 1]));
        let out = dense(&g, &CpuBackend::new(), &input, "fc").unwrap();
        assert_eq!(out.shape().dims(), &[1, 2, 1]);
        // Column sums of the stored matrix: 1+2+3 and 4+5+6.
        assert_eq!(out.data(), &[6.0, 15.0]);
    }

    #[test]
    fn test_feature_count_mismatch() {
        let g = dense_graph();
        let input = Tensor::zeros(Shape::new(vec![1, 4, 1]));
        let err = dense(&g, &CpuBackend::new(), &input, "fc").unwrap_err();
        assert!(matches!(err, StageError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_missing_weight() {
        let mut g = InMemoryGraph::new();
        g.add_node(OperatorNode::new(
            "fc",
            vec!["x".into(), "fc.weight".into()],
        ));
        let input = Tensor::zeros(Shape::new(vec![1, 3, 1]));
        let err = dense(&g, &CpuBackend::new(), &input, "fc").unwrap_err();
        assert!(matches!(err, StageError::MissingWeight(_)));
    }
}
