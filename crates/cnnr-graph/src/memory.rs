use std::collections::HashMap;

use crate::accessor::GraphAccessor;
use crate::node::OperatorNode;

/// A named weight tensor in the model's native storage layout.
#[derive(Debug, Clone)]
struct WeightTensor {
    shape: Vec<usize>,
    data: Vec<f32>,
}

/// An in-memory model description implementing [`GraphAccessor`].
///
/// Backs the embedded demo model and the stage tests; a file-based model
/// reader would implement the same trait.
#[derive(Debug, Default)]
pub struct InMemoryGraph {
    nodes: Vec<OperatorNode>,
    tensors: HashMap<String, WeightTensor>,
}

impl InMemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: OperatorNode) {
        self.nodes.push(node);
    }

    /// Register a named weight tensor.
    ///
    /// # Panics
    /// Panics if `data.len()` does not match the product of `shape`.
    pub fn add_tensor(&mut self, name: impl Into<String>, shape: Vec<usize>, data: Vec<f32>) {
        let numel: usize = shape.iter().product();
        assert_eq!(
            data.len(),
            numel,
            "tensor data length {} does not match shape {:?}",
            data.len(),
            shape
        );
        self.tensors.insert(name.into(), WeightTensor { shape, data });
    }
}

impl GraphAccessor for InMemoryGraph {
    fn find_node(&self, name: &str) -> Option<&OperatorNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    fn tensor_shape(&self, name: &str) -> Option<&[usize]> {
        self.tensors.get(name).map(|t| t.shape.as_slice())
    }

    fn weights(&self, name: &str) -> Option<&[f32]> {
        self.tensors.get(name).map(|t| t.data.as_slice())
    }
}
