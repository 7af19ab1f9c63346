use crate::graph::NodeId;
use thiserror::Error;

/// Custom error type for the scalarust autograd engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum AutogradError {
    #[error("Invalid operand for operation '{operation}': {reason}")]
    InvalidOperand {
        operation: &'static str,
        reason: String,
    },

    #[error("Domain error in operation '{operation}': result {value} is not finite")]
    DomainError { operation: &'static str, value: f64 },

    #[error("Cycle detected in the computation graph at node {node}")]
    CyclicGraph { node: NodeId },
}

impl AutogradError {
    pub(crate) fn unknown_node(operation: &'static str, node: NodeId, len: usize) -> Self {
        AutogradError::InvalidOperand {
            operation,
            reason: format!("node {node} does not belong to this graph ({len} nodes)"),
        }
    }
}
