//! Built-in demo model and labeled sample digits.
//!
//! The weight tables in `tables` are the trained parameters of the bundled
//! tiny MNIST classifier, kept as literal fixture data. Stage executors
//! never read them directly: [`graph`] registers everything in an
//! [`InMemoryGraph`] so all weight access flows through the
//! [`GraphAccessor`](cnnr_graph::GraphAccessor) contract.

use cnnr_graph::{InMemoryGraph, OperatorNode};
use cnnr_tensor::{Shape, Tensor};

use crate::tables;

/// Side length of a sample digit.
pub const SAMPLE_DIM: usize = 28;
/// Number of output classes.
pub const NUM_CLASSES: usize = 10;
/// Number of built-in labeled samples.
pub const TOTAL_SAMPLES: usize = 2;

/// Returns the `index`-th built-in sample as (pixels, label).
/// Pixels are channel-last (28, 28, 1), values in [0, 1].
pub fn sample(index: usize) -> Option<(&'static [f32], u8)> {
    match index {
        0 => Some((&tables::IMG0, 7)),
        1 => Some((&tables::IMG1, 3)),
        _ => None,
    }
}

/// Wrap a sample's pixel buffer in a (28, 28, 1) input tensor.
pub fn input_tensor(pixels: &[f32]) -> Tensor {
    Tensor::new(pixels.to_vec(), Shape::new(vec![SAMPLE_DIM, SAMPLE_DIM, 1]))
}

/// Build the in-memory model description backing [`Pipeline::mnist`]
/// (two 3x3 convolutions with two output channels each, two dense layers,
/// ten classes).
///
/// [`Pipeline::mnist`]: crate::Pipeline::mnist
pub fn graph() -> InMemoryGraph {
    let mut g = InMemoryGraph::new();

    g.add_tensor("conv2d_5.weight", vec![2, 1, 3, 3], tables::CONV1_WEIGHT.to_vec());
    g.add_tensor("conv2d_5.bias", vec![2], tables::CONV1_BIAS.to_vec());
    g.add_tensor("conv2d_6.weight", vec![2, 2, 3, 3], tables::CONV2_WEIGHT.to_vec());
    g.add_tensor("conv2d_6.bias", vec![2], tables::CONV2_BIAS.to_vec());
    g.add_tensor("dense_5.weight", vec![98, 4], tables::DENSE1_WEIGHT.to_vec());
    g.add_tensor("dense_5.bias", vec![4], tables::DENSE1_BIAS.to_vec());
    g.add_tensor("dense_6.weight", vec![4, 10], tables::DENSE2_WEIGHT.to_vec());
    g.add_tensor("dense_6.bias", vec![10], tables::DENSE2_BIAS.to_vec());

    g.add_node(OperatorNode::new(
        "conv2d_5",
        vec![
            "input".into(),
            "conv2d_5.weight".into(),
            "conv2d_5.bias".into(),
        ],
    ));
    g.add_node(
        OperatorNode::new("max_pooling2d_5", vec!["conv2d_5".into()])
            .with_attr("kernel_shape", vec![2, 2])
            .with_attr("strides", vec![2, 2]),
    );
    g.add_node(OperatorNode::new(
        "conv2d_6",
        vec![
            "max_pooling2d_5".into(),
            "conv2d_6.weight".into(),
            "conv2d_6.bias".into(),
        ],
    ));
    g.add_node(
        OperatorNode::new("max_pooling2d_6", vec!["conv2d_6".into()])
            .with_attr("kernel_shape", vec![2, 2])
            .with_attr("strides", vec![2, 2]),
    );
    g.add_node(OperatorNode::new(
        "dense_5",
        vec!["flatten".into(), "dense_5.weight".into()],
    ));
    g.add_node(OperatorNode::new(
        "Add1",
        vec!["dense_5".into(), "dense_5.bias".into()],
    ));
    g.add_node(OperatorNode::new(
        "dense_6",
        vec!["Add1".into(), "dense_6.weight".into()],
    ));
    g.add_node(OperatorNode::new(
        "Add",
        vec!["dense_6".into(), "dense_6.bias".into()],
    ));

    g
}
