use crate::graph::NodeId;
use std::borrow::Cow;
use std::fmt;

/// The operation that produced a node, together with the indices of its operands.
///
/// This closed enumeration replaces a per-node backward closure: the backward pass
/// dispatches on it in one place (see [`crate::autograd::backward`]), so adding a
/// variant forces every rule site to handle it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// An input value with no predecessors.
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    /// Raise to a constant power fixed at construction.
    Pow(NodeId, f64),
    Exp(NodeId),
    Tanh(NodeId),
    Relu(NodeId),
    Sigmoid(NodeId),
}

impl Op {
    /// Diagnostic label of the producing operation.
    pub fn tag(&self) -> Cow<'static, str> {
        match self {
            Op::Leaf => Cow::Borrowed(""),
            Op::Add(..) => Cow::Borrowed("+"),
            Op::Mul(..) => Cow::Borrowed("*"),
            Op::Pow(_, k) => Cow::Owned(format!("**{k}")),
            Op::Exp(_) => Cow::Borrowed("exp"),
            Op::Tanh(_) => Cow::Borrowed("tanh"),
            Op::Relu(_) => Cow::Borrowed("relu"),
            Op::Sigmoid(_) => Cow::Borrowed("sigmoid"),
        }
    }

    /// Operands in construction order, duplicates included.
    pub(crate) fn operands(&self) -> [Option<NodeId>; 2] {
        match *self {
            Op::Leaf => [None, None],
            Op::Add(a, b) | Op::Mul(a, b) => [Some(a), Some(b)],
            Op::Pow(a, _) | Op::Exp(a) | Op::Tanh(a) | Op::Relu(a) | Op::Sigmoid(a) => {
                [Some(a), None]
            }
        }
    }

    /// Distinct predecessor nodes. `a + a` reports `a` once.
    pub fn predecessors(&self) -> Vec<NodeId> {
        let mut preds: Vec<NodeId> = Vec::with_capacity(2);
        for id in self.operands().into_iter().flatten() {
            if !preds.contains(&id) {
                preds.push(id);
            }
        }
        preds
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }
}

/// One scalar value in the computation graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) label: Option<String>,
}

impl Node {
    pub(crate) fn new(value: f64, op: Op) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
            label: None,
        }
    }

    /// The forward value, fixed at construction.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The accumulated gradient of the last backward pass(es).
    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data:{})", self.value)
    }
}
