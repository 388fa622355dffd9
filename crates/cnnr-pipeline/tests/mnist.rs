//! End-to-end tests over the bundled demo model.

use approx::assert_relative_eq;
use cnnr_graph::{GraphAccessor, InMemoryGraph, OperatorNode};
use cnnr_pipeline::{argmax, demo, Pipeline, StageError};
use cnnr_tensor::CpuBackend;

#[test]
fn classifies_builtin_samples() {
    let graph = demo::graph();
    let backend = CpuBackend::new();
    let pipeline = Pipeline::mnist();

    for index in 0..demo::TOTAL_SAMPLES {
        let (pixels, label) = demo::sample(index).unwrap();
        let input = demo::input_tensor(pixels);

        let probs = pipeline.run(&graph, &backend, &input).unwrap();

        assert_eq!(probs.shape().dims(), &[1, demo::NUM_CLASSES, 1]);
        assert_eq!(probs.numel(), probs.data().len());

        let sum: f32 = probs.data().iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-5);

        let predicted = argmax(probs.data()).unwrap();
        assert_eq!(
            predicted, label as usize,
            "sample {index} predicted {predicted}, expected {label}"
        );
    }
}

#[test]
fn missing_weight_aborts_with_stage_name() {
    // Rebuild the demo graph without the second conv's weight tensor.
    let full = demo::graph();
    let mut broken = InMemoryGraph::new();
    for node in [
        "conv2d_5",
        "max_pooling2d_5",
        "conv2d_6",
        "max_pooling2d_6",
        "dense_5",
        "Add1",
        "dense_6",
        "Add",
    ] {
        broken.add_node(full.find_node(node).unwrap().clone());
    }
    for tensor in [
        "conv2d_5.weight",
        "conv2d_5.bias",
        "conv2d_6.bias",
        "dense_5.weight",
        "dense_5.bias",
        "dense_6.weight",
        "dense_6.bias",
    ] {
        broken.add_tensor(
            tensor,
            full.tensor_shape(tensor).unwrap().to_vec(),
            full.weights(tensor).unwrap().to_vec(),
        );
    }

    let (pixels, _) = demo::sample(0).unwrap();
    let input = demo::input_tensor(pixels);
    let err = Pipeline::mnist()
        .run(&broken, &CpuBackend::new(), &input)
        .unwrap_err();

    assert_eq!(err.stage, "conv2d_6");
    assert!(matches!(err.source, StageError::MissingWeight(_)));
}

#[test]
fn intermediate_shapes_follow_the_architecture() {
    // Run prefixes of the plan and check the documented shape transitions.
    let graph = demo::graph();
    let backend = CpuBackend::new();
    let full = Pipeline::mnist();
    let (pixels, _) = demo::sample(0).unwrap();
    let input = demo::input_tensor(pixels);

    let expected: [&[usize]; 12] = [
        &[28, 28, 2], // conv2d_5
        &[28, 28, 2], // relu
        &[14, 14, 2], // max_pooling2d_5
        &[14, 14, 2], // conv2d_6
        &[14, 14, 2], // relu
        &[7, 7, 2],   // max_pooling2d_6
        &[1, 98, 1],  // flatten
        &[1, 4, 1],   // dense_5
        &[1, 4, 1],   // Add1
        &[1, 10, 1],  // dense_6
        &[1, 10, 1],  // Add
        &[1, 10, 1],  // softmax
    ];

    for (n, want) in expected.iter().enumerate() {
        let prefix = Pipeline::new(full.stages()[..=n].to_vec());
        let out = prefix.run(&graph, &backend, &input).unwrap();
        assert_eq!(out.shape().dims(), *want, "after stage {n}");
        assert_eq!(out.numel(), out.data().len(), "after stage {n}");
    }
}
