use crate::autograd::graph::topological_sort;
use crate::error::AutogradError;
use crate::graph::{Graph, NodeId};
use crate::node::Op;
use crate::ops::activation::{relu, sigmoid, tanh};
use crate::ops::arithmetic::{add, mul, pow};
use crate::ops::math_elem::exp;
use log::{debug, trace};

impl Graph {
    /// Performs the backward pass starting from `terminal`.
    ///
    /// Seeds `terminal`'s gradient with `1.0`, then applies the local rule of every
    /// reachable node in reverse topological order, so each node has received all of
    /// its downstream contributions before it pushes gradient to its own operands.
    /// Afterwards every reachable node holds d(terminal)/d(node).
    ///
    /// Gradients accumulate: running a second pass without [`Graph::reset_gradient`]
    /// or [`Graph::zero_grad`] adds to the previous results.
    ///
    /// # Errors
    /// * `InvalidOperand` if `terminal` does not belong to this graph.
    /// * `CyclicGraph` if the predecessor relation contains a cycle. No gradient is
    ///   modified in that case.
    pub fn backward(&mut self, terminal: NodeId) -> Result<(), AutogradError> {
        let order = topological_sort(self, terminal)?;
        debug!(
            "backward: {} nodes reachable from {} (arena holds {})",
            order.len(),
            terminal,
            self.len()
        );

        self.nodes[terminal.0].grad = 1.0;
        for &id in order.iter().rev() {
            self.propagate(id);
        }
        Ok(())
    }

    /// Post-order of the nodes reachable from `terminal`, leaves first.
    pub fn topological_order(&self, terminal: NodeId) -> Result<Vec<NodeId>, AutogradError> {
        topological_sort(self, terminal)
    }

    /// Applies the local-derivative rule of `out` to its operands.
    fn propagate(&mut self, out: NodeId) {
        let node = &self.nodes[out.0];
        let (op, out_value, out_grad) = (node.op, node.value, node.grad);
        trace!("propagate {} ({}): grad = {}", out, op.tag(), out_grad);

        match op {
            Op::Leaf => {}
            Op::Add(a, b) => add::add_backward(self, a, b, out_grad),
            Op::Mul(a, b) => mul::mul_backward(self, a, b, out_grad),
            Op::Pow(a, k) => pow::pow_backward(self, a, k, out_grad),
            Op::Exp(a) => exp::exp_backward(self, a, out_value, out_grad),
            Op::Tanh(a) => tanh::tanh_backward(self, a, out_value, out_grad),
            Op::Relu(a) => relu::relu_backward(self, a, out_value, out_grad),
            Op::Sigmoid(a) => sigmoid::sigmoid_backward(self, a, out_value, out_grad),
        }
    }
}
