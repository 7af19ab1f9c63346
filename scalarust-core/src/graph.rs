//! The node arena that owns one computation graph.

use crate::error::AutogradError;
use crate::node::{Node, Op};
use log::trace;
use std::borrow::Cow;
use std::fmt;

/// Index of a node inside its [`Graph`].
///
/// Ids are only meaningful for the graph that created them. Operations check that an
/// id is in range, but an id taken from another graph of sufficient size cannot be told
/// apart from a local one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An argument to a graph operation: an existing node, or a raw scalar that is
/// promoted to a fresh leaf when the operation runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Node(NodeId),
    Scalar(f64),
}

impl From<NodeId> for Operand {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl From<&NodeId> for Operand {
    fn from(id: &NodeId) -> Self {
        Operand::Node(*id)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

/// Construction-time configuration of a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GraphOptions {
    /// Reject operations whose finite inputs produce an infinite or NaN value with
    /// [`AutogradError::DomainError`]. Off by default: IEEE-754 results surface as-is.
    pub check_domain: bool,
}

impl GraphOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check_domain(mut self, enabled: bool) -> Self {
        self.check_domain = enabled;
        self
    }
}

/// Arena holding every node of a computation graph.
///
/// Nodes are appended in construction order, so every operand index is smaller than
/// the index of the node it feeds. Values are immutable once pushed; only gradients
/// change, through [`Graph::backward`], [`Graph::reset_gradient`] and [`Graph::zero_grad`].
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    options: GraphOptions,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GraphOptions) -> Self {
        Graph {
            nodes: Vec::new(),
            options,
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// Wraps a raw scalar as a new leaf with zero gradient.
    pub fn leaf(&mut self, value: f64) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(value, Op::Leaf));
        id
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Iterates over all nodes in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Forward value of `id`.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this graph.
    pub fn value(&self, id: NodeId) -> f64 {
        self.nodes[id.0].value
    }

    /// Accumulated gradient of `id`.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this graph.
    pub fn grad(&self, id: NodeId) -> f64 {
        self.nodes[id.0].grad
    }

    /// Diagnostic tag of the operation that produced `id` (`""` for leaves).
    ///
    /// # Panics
    /// Panics if `id` does not belong to this graph.
    pub fn op_tag(&self, id: NodeId) -> Cow<'static, str> {
        self.nodes[id.0].op.tag()
    }

    /// Distinct operands of `id`.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this graph.
    pub fn predecessors(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes[id.0].op.predecessors()
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).and_then(|n| n.label.as_deref())
    }

    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), AutogradError> {
        let len = self.nodes.len();
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or_else(|| AutogradError::unknown_node("set_label", id, len))?;
        node.label = Some(label.into());
        Ok(())
    }

    /// Sets the gradient of `id` back to `0.0`.
    ///
    /// Call this on every reused node (typically parameters) before each new backward
    /// pass; gradients otherwise keep accumulating across passes.
    pub fn reset_gradient(&mut self, id: NodeId) -> Result<(), AutogradError> {
        let len = self.nodes.len();
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or_else(|| AutogradError::unknown_node("reset_gradient", id, len))?;
        node.grad = 0.0;
        Ok(())
    }

    /// Resets the gradient of every node in the arena.
    pub fn zero_grad(&mut self) {
        for node in self.nodes.iter_mut() {
            node.grad = 0.0;
        }
    }

    // --- Crate-internal construction helpers ---

    pub(crate) fn check(&self, operation: &'static str, id: NodeId) -> Result<NodeId, AutogradError> {
        if self.contains(id) {
            Ok(id)
        } else {
            Err(AutogradError::unknown_node(operation, id, self.nodes.len()))
        }
    }

    /// Resolves an operand to a node id, promoting scalars to leaves.
    pub(crate) fn resolve(
        &mut self,
        operation: &'static str,
        operand: Operand,
    ) -> Result<NodeId, AutogradError> {
        match operand {
            Operand::Node(id) => self.check(operation, id),
            Operand::Scalar(value) => Ok(self.leaf(value)),
        }
    }

    /// Appends the result of an operation whose operands are already in the arena.
    pub(crate) fn push(
        &mut self,
        operation: &'static str,
        value: f64,
        op: Op,
    ) -> Result<NodeId, AutogradError> {
        if self.options.check_domain && !value.is_finite() {
            let inputs_finite = op
                .operands()
                .into_iter()
                .flatten()
                .all(|id| self.nodes[id.0].value.is_finite());
            if inputs_finite {
                return Err(AutogradError::DomainError { operation, value });
            }
        }
        let id = NodeId(self.nodes.len());
        trace!("{operation}: {id} = {value}");
        self.nodes.push(Node::new(value, op));
        Ok(id)
    }

    /// Runs `build`, discarding every node it appended if it fails.
    ///
    /// Nothing outside `build` can hold ids past the mark, so truncating keeps the
    /// arena free of partially constructed results.
    pub(crate) fn atomic<F>(&mut self, build: F) -> Result<NodeId, AutogradError>
    where
        F: FnOnce(&mut Self) -> Result<NodeId, AutogradError>,
    {
        let mark = self.nodes.len();
        let result = build(self);
        if result.is_err() {
            self.nodes.truncate(mark);
        }
        result
    }

    pub(crate) fn accumulate(&mut self, id: NodeId, delta: f64) {
        self.nodes[id.0].grad += delta;
    }

    #[cfg(test)]
    pub(crate) fn rewire(&mut self, id: NodeId, op: Op) {
        self.nodes[id.0].op = op;
    }
}
