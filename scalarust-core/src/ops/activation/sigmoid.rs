use crate::error::AutogradError;
use crate::graph::{Graph, NodeId, Operand};
use crate::node::Op;

// --- Forward Operation ---

impl Graph {
    /// Logistic sigmoid: `1 / (1 + e ** -a)`.
    pub fn sigmoid(&mut self, a: impl Into<Operand>) -> Result<NodeId, AutogradError> {
        self.apply_unary_op(
            a.into(),
            |x| 1.0 / (1.0 + (-x).exp()),
            Op::Sigmoid,
            "sigmoid",
        )
    }
}

// --- Backward Operation ---

/// d sigmoid(a)/da = sigmoid(a) * (1 - sigmoid(a)).
pub(crate) fn sigmoid_backward(graph: &mut Graph, a: NodeId, out_value: f64, out_grad: f64) {
    graph.accumulate(a, out_grad * (out_value * (1.0 - out_value)));
}
