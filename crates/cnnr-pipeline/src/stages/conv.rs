use cnnr_graph::GraphAccessor;
use cnnr_tensor::{transpose, ComputeBackend, Shape, Tensor};

use crate::error::StageError;

use super::dims3;

/// Stride 1 with one pixel of padding keeps the spatial dimensions
/// unchanged for the 3x3 kernels this pipeline uses.
const STRIDE: usize = 1;
const PAD: usize = 1;

/// Channel-major storage [outC, inC, kW, kH] to the kernel's channel-last
/// [outC, kW, kH, inC].
const WEIGHT_PERM: [usize; 4] = [0, 2, 3, 1];

/// Convolution stage.
///
/// Resolves the node's weight (`inputs[1]`) and bias (`inputs[2]`) tensors,
/// converts the weights to channel-last layout, and produces an output of
/// shape (w, h, outC). The transposed weight buffer is transient and dropped
/// when the stage returns.
pub fn conv2d(
    graph: &dyn GraphAccessor,
    backend: &dyn ComputeBackend,
    input: &Tensor,
    node_name: &str,
) -> Result<Tensor, StageError> {
    let (in_w, in_h, in_c) = dims3(input)?;

    let node = graph
        .find_node(node_name)
        .ok_or_else(|| StageError::NodeNotFound(node_name.to_string()))?;
    let weight_name = node
        .input(1)
        .ok_or_else(|| StageError::MissingWeight(node_name.to_string()))?;
    let bias_name = node
        .input(2)
        .ok_or_else(|| StageError::MissingBias(node_name.to_string()))?;

    let w_shape = graph
        .tensor_shape(weight_name)
        .ok_or_else(|| StageError::MissingWeight(weight_name.to_string()))?;
    let w_data = graph
        .weights(weight_name)
        .ok_or_else(|| StageError::MissingWeight(weight_name.to_string()))?;
    if w_shape.len() != 4 {
        return Err(StageError::ShapeMismatch {
            expected: vec![4],
            got: w_shape.to_vec(),
        });
    }
    let (out_c, w_in_c, k_w, k_h) = (w_shape[0], w_shape[1], w_shape[2], w_shape[3]);
    if w_in_c != in_c {
        return Err(StageError::ShapeMismatch {
            expected: vec![in_c],
            got: vec![w_in_c],
        });
    }

    let bias = graph
        .weights(bias_name)
        .ok_or_else(|| StageError::MissingBias(bias_name.to_string()))?;
    if bias.len() != out_c {
        return Err(StageError::ShapeMismatch {
            expected: vec![out_c],
            got: vec![bias.len()],
        });
    }

    let (w_converted, _) =
        transpose::transpose(w_data, &Shape::from_slice(w_shape), &WEIGHT_PERM)?;

    let out = backend.conv2d(
        input.data(),
        &w_converted,
        bias,
        in_w,
        in_h,
        in_c,
        out_c,
        k_w,
        k_h,
        STRIDE,
        PAD,
        in_w,
        in_h,
    )?;

    Ok(Tensor::new(out, Shape::new(vec![in_w, in_h, out_c])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnnr_graph::{InMemoryGraph, OperatorNode};
    use cnnr_tensor::CpuBackend;

    fn conv_graph() -> InMemoryGraph {
        let mut g = InMemoryGraph::new();
        // Single in/out channel, 3x3 identity kernel (center tap only).
        let mut w = vec![0.0f32; 9];
        w[4] = 1.0;
        g.add_tensor("conv.weight", vec![1, 1, 3, 3], w);
        g.add_tensor("conv.bias", vec![1], vec![0.0]);
        g.add_node(OperatorNode::new(
            "conv",
            vec!["x".into(), "conv.weight".into(), "conv.bias".into()],
        ));
        g
    }

    fn input_4x4() -> Tensor {
        let data: Vec<f32> = (0..16).map(|v| v as f32).collect();
        Tensor::new(data, Shape::new(vec![4, 4, 1]))
    }

    #[test]
    fn test_same_size_output() {
        let g = conv_graph();
        let input = input_4x4();
        let out = conv2d(&g, &CpuBackend::new(), &input, "conv").unwrap();
        assert_eq!(out.shape().dims(), &[4, 4, 1]);
        assert_eq!(out.numel(), out.data().len());
        // Identity kernel reproduces the input.
        assert_eq!(out.data(), input.data());
    }

    #[test]
    fn test_node_not_found() {
        let g = conv_graph();
        let err = conv2d(&g, &CpuBackend::new(), &input_4x4(), "conv2").unwrap_err();
        assert!(matches!(err, StageError::NodeNotFound(_)));
    }

    #[test]
    fn test_missing_weight() {
        let mut g = InMemoryGraph::new();
        g.add_node(OperatorNode::new(
            "conv",
            vec!["x".into(), "conv.weight".into(), "conv.bias".into()],
        ));
        let err = conv2d(&g, &CpuBackend::new(), &input_4x4(), "conv").unwrap_err();
        assert!(matches!(err, StageError::MissingWeight(_)));
    }

    #[test]
    fn test_missing_bias() {
        let mut g = InMemoryGraph::new();
        let mut w = vec![0.0f32; 9];
        w[4] = 1.0;
        g.add_tensor("conv.weight", vec![1, 1, 3, 3], w);
        g.add_node(OperatorNode::new(
            "conv",
            vec!["x".into(), "conv.weight".into(), "conv.bias".into()],
        ));
        let err = conv2d(&g, &CpuBackend::new(), &input_4x4(), "conv").unwrap_err();
        assert!(matches!(err, StageError::MissingBias(_)));
    }

    #[test]
    fn test_channel_mismatch() {
        let g = conv_graph();
        let input = Tensor::zeros(Shape::new(vec![4, 4, 2]));
        let err = conv2d(&g, &CpuBackend::new(), &input, "conv").unwrap_err();
        assert!(matches!(err, StageError::ShapeMismatch { .. }));
    }
}
