use crate::error::AutogradError;
use crate::graph::{Graph, NodeId, Operand};
use crate::node::Op;

// --- Forward Operation ---

impl Graph {
    /// Natural exponential: `e ** a`.
    pub fn exp(&mut self, a: impl Into<Operand>) -> Result<NodeId, AutogradError> {
        self.apply_unary_op(a.into(), f64::exp, Op::Exp, "exp")
    }
}

// --- Backward Operation ---

/// d(e ** a)/da = e ** a, which is the output value itself.
pub(crate) fn exp_backward(graph: &mut Graph, a: NodeId, out_value: f64, out_grad: f64) {
    graph.accumulate(a, out_value * out_grad);
}
