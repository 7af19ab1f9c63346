use crate::error::AutogradError;
use crate::graph::{Graph, NodeId, Operand};

impl Graph {
    /// Negates an operand, built as `a * -1`.
    ///
    /// The `-1` constant is a leaf of its own, and the result is tagged `*`.
    pub fn neg(&mut self, a: impl Into<Operand>) -> Result<NodeId, AutogradError> {
        let a = a.into();
        self.atomic(|g| g.mul(a, -1.0))
    }
}
