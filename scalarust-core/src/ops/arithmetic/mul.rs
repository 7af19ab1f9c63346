// scalarust-core/src/ops/arithmetic/mul.rs

use crate::error::AutogradError;
use crate::graph::{Graph, NodeId, Operand};
use crate::node::Op;

// --- Forward Operation ---

impl Graph {
    /// Multiplies two operands: `a * b`.
    pub fn mul(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, AutogradError> {
        self.apply_binary_op(a.into(), b.into(), |x, y| x * y, Op::Mul, "mul")
    }
}

// --- Backward Operation ---

/// d(a * b)/da = b, d(a * b)/db = a.
pub(crate) fn mul_backward(graph: &mut Graph, a: NodeId, b: NodeId, out_grad: f64) {
    let (a_value, b_value) = (graph.value(a), graph.value(b));
    graph.accumulate(a, b_value * out_grad);
    graph.accumulate(b, a_value * out_grad);
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
