use cnnr_graph::GraphAccessor;
use cnnr_tensor::{ComputeBackend, Tensor};

use crate::error::{PipelineError, Result, StageError};
use crate::plan::{StageKind, StageSpec};
use crate::stages;

/// The fixed, ordered composition of stage executors realizing one network
/// architecture.
///
/// Execution is strictly serial: each stage consumes the previous stage's
/// output tensor, and the driver rebinds its working tensor so the consumed
/// buffer is dropped as soon as the next one exists. The externally supplied
/// input tensor is only borrowed and never freed here.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: Vec<StageSpec>,
}

impl Pipeline {
    pub fn new(stages: Vec<StageSpec>) -> Self {
        Pipeline { stages }
    }

    /// The MNIST classifier architecture, with the node names used by the
    /// bundled model:
    /// conv -> relu -> pool -> conv -> relu -> pool -> flatten ->
    /// dense -> bias -> dense -> bias -> softmax.
    pub fn mnist() -> Self {
        use StageKind::*;
        Pipeline::new(vec![
            StageSpec::new(Conv2d, "conv2d_5"),
            StageSpec::new(Relu, "Relu1"),
            StageSpec::new(MaxPool, "max_pooling2d_5"),
            StageSpec::new(Conv2d, "conv2d_6"),
            StageSpec::new(Relu, "Relu"),
            StageSpec::new(MaxPool, "max_pooling2d_6"),
            StageSpec::new(Flatten, "flatten"),
            StageSpec::new(Dense, "dense_5"),
            StageSpec::new(BiasAdd, "Add1"),
            StageSpec::new(Dense, "dense_6"),
            StageSpec::new(BiasAdd, "Add"),
            StageSpec::new(Softmax, "Softmax"),
        ])
    }

    pub fn stages(&self) -> &[StageSpec] {
        &self.stages
    }

    /// Run the full pipeline over `input`, producing the final tensor
    /// (a class-probability vector for a classifier plan).
    ///
    /// Every stage result is checked; on the first failure the remaining
    /// stages are skipped and the error names the failing stage. Already
    /// produced intermediate tensors are released as the stack unwinds.
    pub fn run(
        &self,
        graph: &dyn GraphAccessor,
        backend: &dyn ComputeBackend,
        input: &Tensor,
    ) -> Result<Tensor> {
        let mut current: Option<Tensor> = None;

        for spec in &self.stages {
            {
                let shape = current.as_ref().unwrap_or(input).shape();
                tracing::debug!(stage = %spec.node, kind = ?spec.kind, %shape, "executing stage");
            }

            let result = match spec.kind {
                StageKind::Flatten => {
                    // Flatten rebinds the buffer in place, so it takes the
                    // working tensor by value.
                    let owned = current.take().unwrap_or_else(|| input.clone());
                    stages::flatten(owned)
                }
                _ => {
                    let tensor = current.as_ref().unwrap_or(input);
                    self.execute(spec, graph, backend, tensor)
                }
            };

            let output = result.map_err(|source| PipelineError {
                stage: spec.node.clone(),
                source,
            })?;
            // Rebinding drops the consumed tensor.
            current = Some(output);
        }

        Ok(current.unwrap_or_else(|| input.clone()))
    }

    fn execute(
        &self,
        spec: &StageSpec,
        graph: &dyn GraphAccessor,
        backend: &dyn ComputeBackend,
        input: &Tensor,
    ) -> std::result::Result<Tensor, StageError> {
        match spec.kind {
            StageKind::Conv2d => stages::conv2d(graph, backend, input, &spec.node),
            StageKind::Relu => stages::relu(backend, input),
            StageKind::MaxPool => stages::maxpool(graph, backend, input, &spec.node),
            StageKind::Dense => stages::dense(graph, backend, input, &spec.node),
            StageKind::BiasAdd => stages::bias_add(graph, backend, input, &spec.node),
            StageKind::Transpose => stages::transpose(graph, input, &spec.node),
            StageKind::Softmax => stages::softmax(backend, input),
            StageKind::Flatten => stages::flatten(input.clone()),
        }
    }
}

/// Index of the largest value, keeping the earliest on ties.
/// Returns `None` for an empty slice.
pub fn argmax(values: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &v) in values.iter().enumerate() {
        let better = match best {
            None => true,
            Some((_, b)) => v > b,
        };
        if better {
            best = Some((i, v));
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnnr_graph::InMemoryGraph;
    use cnnr_tensor::{CpuBackend, Shape};

    #[test]
    fn test_argmax() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some(1));
        assert_eq!(argmax(&[0.5, 0.5]), Some(0));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = Pipeline::new(vec![]);
        let input = Tensor::new(vec![1.0, 2.0], Shape::new(vec![1, 2, 1]));
        let out = pipeline
            .run(&InMemoryGraph::new(), &CpuBackend::new(), &input)
            .unwrap();
        assert_eq!(out.data(), input.data());
    }

    #[test]
    fn test_failure_names_stage() {
        // No nodes registered, so the first conv lookup fails.
        let pipeline = Pipeline::mnist();
        let input = Tensor::zeros(Shape::new(vec![28, 28, 1]));
        let err = pipeline
            .run(&InMemoryGraph::new(), &CpuBackend::new(), &input)
            .unwrap_err();
        assert_eq!(err.stage, "conv2d_5");
        assert!(matches!(err.source, StageError::NodeNotFound(_)));
    }

    #[test]
    fn test_mnist_plan_order() {
        let pipeline = Pipeline::mnist();
        let kinds: Vec<StageKind> = pipeline.stages().iter().map(|s| s.kind).collect();
        use StageKind::*;
        assert_eq!(
            kinds,
            vec![
                Conv2d, Relu, MaxPool, Conv2d, Relu, MaxPool, Flatten, Dense, BiasAdd, Dense,
                BiasAdd, Softmax
            ]
        );
    }
}
