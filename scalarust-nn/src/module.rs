use crate::error::NnError;
use scalarust_core::{Graph, NodeId};

/// The base trait for network components (neurons, layers, MLPs).
///
/// Parameters are leaves of the [`Graph`] the module was built in; `forward` must be
/// called with that same graph.
pub trait Module: std::fmt::Debug {
    /// Wires the module over `inputs`, returning its output nodes.
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, NnError>;

    /// All learnable parameters, in a stable order.
    fn parameters(&self) -> Vec<NodeId>;

    /// Resets the gradient of every parameter.
    ///
    /// Call before each backward pass that reuses the parameters, otherwise gradients
    /// from earlier steps keep accumulating.
    fn zero_grad(&self, graph: &mut Graph) -> Result<(), NnError> {
        for param in self.parameters() {
            graph.reset_gradient(param)?;
        }
        Ok(())
    }
}
