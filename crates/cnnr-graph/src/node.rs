/// A named operator attribute holding one or more integers
/// (e.g. `kernel_shape`, `strides`, `perm`).
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub ints: Vec<i64>,
}

/// A named operator node, consumed read-only by the pipeline.
///
/// Input name convention: `inputs[0]` is the data input, `inputs[1]` the
/// weight tensor name, `inputs[2]` the optional bias tensor name.
#[derive(Debug, Clone)]
pub struct OperatorNode {
    pub name: String,
    pub inputs: Vec<String>,
    pub attributes: Vec<Attribute>,
}

impl OperatorNode {
    pub fn new(name: impl Into<String>, inputs: Vec<String>) -> Self {
        OperatorNode {
            name: name.into(),
            inputs,
            attributes: Vec::new(),
        }
    }

    /// Add an integer-list attribute, builder style.
    pub fn with_attr(mut self, name: impl Into<String>, ints: Vec<i64>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            ints,
        });
        self
    }

    /// Returns the `i`-th input tensor name, if present.
    pub fn input(&self, i: usize) -> Option<&str> {
        self.inputs.get(i).map(String::as_str)
    }

    /// Looks up an integer-list attribute by exact name.
    pub fn attr_ints(&self, name: &str) -> Option<&[i64]> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.ints.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs() {
        let node = OperatorNode::new(
            "conv2d_5",
            vec!["input".into(), "conv2d_5.weight".into(), "conv2d_5.bias".into()],
        );
        assert_eq!(node.input(1), Some("conv2d_5.weight"));
        assert_eq!(node.input(3), None);
    }

    #[test]
    fn test_attr_lookup() {
        let node = OperatorNode::new("max_pooling2d_5", vec!["x".into()])
            .with_attr("kernel_shape", vec![2, 2])
            .with_attr("strides", vec![2, 2]);
        assert_eq!(node.attr_ints("kernel_shape"), Some(&[2i64, 2][..]));
        assert_eq!(node.attr_ints("pads"), None);
    }
}
