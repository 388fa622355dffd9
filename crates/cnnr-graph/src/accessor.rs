use crate::node::OperatorNode;

/// Lookup contract over a model description.
///
/// All lookups are by exact string match. Absence is a normal, expected
/// outcome (a model may omit optional layers), so every method returns
/// `Option`; whether a missing entry is fatal is decided by the stage
/// executor that asked for it.
pub trait GraphAccessor {
    /// Find an operator node by name.
    fn find_node(&self, name: &str) -> Option<&OperatorNode>;

    /// Shape of a named weight/bias tensor in its stored layout.
    fn tensor_shape(&self, name: &str) -> Option<&[usize]>;

    /// Rank of a named tensor.
    fn tensor_rank(&self, name: &str) -> Option<usize> {
        self.tensor_shape(name).map(<[usize]>::len)
    }

    /// Raw weight buffer of a named tensor.
    fn weights(&self, name: &str) -> Option<&[f32]>;
}
