use crate::error::AutogradError;
use crate::graph::{Graph, NodeId, Operand};
use crate::node::Op;

// --- Forward Operation ---

impl Graph {
    /// Hyperbolic tangent.
    pub fn tanh(&mut self, a: impl Into<Operand>) -> Result<NodeId, AutogradError> {
        self.apply_unary_op(a.into(), f64::tanh, Op::Tanh, "tanh")
    }
}

// --- Backward Operation ---

/// d tanh(a)/da = 1 - tanh(a)^2.
pub(crate) fn tanh_backward(graph: &mut Graph, a: NodeId, out_value: f64, out_grad: f64) {
    graph.accumulate(a, (1.0 - out_value.powi(2)) * out_grad);
}

#[cfg(test)]
mod tests {
    use crate::autograd::grad_check::check_grad;
    use crate::error::AutogradError;
    use crate::graph::Graph;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_tanh_chain_rule() -> Result<(), AutogradError> {
        let mut g = Graph::new();
        let x = g.leaf(2.0);
        let three = g.leaf(3.0);
        let z = g.mul(three, x)?;
        let y = g.tanh(z)?;
        g.backward(y)?;
        assert_eq!(g.op_tag(y), "tanh");
        assert_abs_diff_eq!(g.value(y), 6.0_f64.tanh(), epsilon = 1e-12);
        assert_abs_diff_eq!(g.grad(x), 3.0 * (1.0 - 6.0_f64.tanh().powi(2)), epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_tanh_saturates_without_nan() -> Result<(), AutogradError> {
        let mut g = Graph::new();
        let x = g.leaf(500.0);
        let y = g.tanh(x)?;
        g.backward(y)?;
        assert_eq!(g.value(y), 1.0);
        assert_eq!(g.grad(x), 0.0);
        Ok(())
    }

    #[test]
    fn test_tanh_grad_check() {
        let result = check_grad(|g, x| g.tanh(x[0]), &[0.37], 1e-6, 1e-6);
        assert_eq!(result, Ok(()));
    }
}
