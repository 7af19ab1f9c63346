// scalarust-core/src/ops/arithmetic/add.rs

use crate::error::AutogradError;
use crate::graph::{Graph, NodeId, Operand};
use crate::node::Op;

// --- Forward Operation ---

impl Graph {
    /// Adds two operands: `a + b`.
    ///
    /// Either side may be a raw `f64`, which becomes a fresh leaf.
    pub fn add(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, AutogradError> {
        self.apply_binary_op(a.into(), b.into(), |x, y| x + y, Op::Add, "add")
    }
}

// --- Backward Operation ---

/// d(a + b)/da = d(a + b)/db = 1.
///
/// Both updates run even when `a == b`, so `a + a` contributes twice.
pub(crate) fn add_backward(graph: &mut Graph, a: NodeId, b: NodeId, out_grad: f64) {
    graph.accumulate(a, out_grad);
    graph.accumulate(b, out_grad);
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
