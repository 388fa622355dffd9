/// Operator kinds the fixed pipeline can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    Conv2d,
    Relu,
    MaxPool,
    Flatten,
    Dense,
    BiasAdd,
    Transpose,
    Softmax,
}

/// One step of the pipeline: an operator kind paired with the name of the
/// model node backing it.
///
/// This list is the only per-model configuration; the orchestration logic
/// never hard-codes node names. `Relu`, `Flatten`, and `Softmax` execute
/// without a node lookup, but their entries keep a label so driver errors
/// and logs can still name the stage.
#[derive(Debug, Clone)]
pub struct StageSpec {
    pub kind: StageKind,
    pub node: String,
}

impl StageSpec {
    pub fn new(kind: StageKind, node: impl Into<String>) -> Self {
        StageSpec {
            kind,
            node: node.into(),
        }
    }
}
