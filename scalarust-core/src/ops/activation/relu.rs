use crate::error::AutogradError;
use crate::graph::{Graph, NodeId, Operand};
use crate::node::Op;

// --- Forward Operation ---

impl Graph {
    /// Rectified linear unit: `max(0, a)`. A NaN input stays NaN.
    pub fn relu(&mut self, a: impl Into<Operand>) -> Result<NodeId, AutogradError> {
        self.apply_unary_op(
            a.into(),
            |x| if x <= 0.0 { 0.0 } else { x },
            Op::Relu,
            "relu",
        )
    }
}

// --- Backward Operation ---

/// Passes the gradient through where the output is positive. The boundary `0` counts
/// as inactive.
pub(crate) fn relu_backward(graph: &mut Graph, a: NodeId, out_value: f64, out_grad: f64) {
    let mask = if out_value > 0.0 { 1.0 } else { 0.0 };
    graph.accumulate(a, out_grad * mask);
}
