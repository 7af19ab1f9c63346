// scalarust-core/src/ops/arithmetic/pow.rs

use crate::error::AutogradError;
use crate::graph::{Graph, NodeId, Operand};
use crate::node::Op;
use log::debug;

// --- Forward Operation ---

impl Graph {
    /// Raises an operand to a constant power: `a ** exponent`.
    ///
    /// The exponent is a plain number fixed at construction, not a node, and gets no
    /// gradient. Real-domain results follow `f64::powf` (a zero base with a negative
    /// exponent gives infinity, a negative base with a fractional exponent gives NaN).
    /// The gradient is the direct formula too, so `pow(0, 0)` has value `1` and
    /// gradient NaN (`0 * 0 ** -1`).
    ///
    /// # Errors
    /// `InvalidOperand` if `exponent` is NaN or infinite.
    pub fn pow(&mut self, a: impl Into<Operand>, exponent: f64) -> Result<NodeId, AutogradError> {
        if !exponent.is_finite() {
            return Err(AutogradError::InvalidOperand {
                operation: "pow",
                reason: format!("exponent must be a finite number, got {exponent}"),
            });
        }
        let a = a.into();
        self.apply_unary_op(
            a,
            |x| {
                if x == 0.0 && exponent < 0.0 {
                    debug!("pow: zero base with negative exponent {exponent}");
                }
                x.powf(exponent)
            },
            |a| Op::Pow(a, exponent),
            "pow",
        )
    }
}

// --- Backward Operation ---

/// d(a ** k)/da = k * a ** (k - 1).
pub(crate) fn pow_backward(graph: &mut Graph, a: NodeId, exponent: f64, out_grad: f64) {
    let base = graph.value(a);
    graph.accumulate(a, out_grad * exponent * base.powf(exponent - 1.0));
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
