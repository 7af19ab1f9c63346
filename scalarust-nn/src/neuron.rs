use crate::error::NnError;
use crate::init::uniform_leaves;
use crate::module::Module;
use rand::Rng;
use scalarust_core::{AutogradError, Graph, NodeId};

/// Nonlinearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    Sigmoid,
    /// No nonlinearity; the weighted sum is the output.
    Linear,
}

impl Activation {
    pub fn apply(self, graph: &mut Graph, z: NodeId) -> Result<NodeId, AutogradError> {
        match self {
            Activation::Tanh => graph.tanh(z),
            Activation::Relu => graph.relu(z),
            Activation::Sigmoid => graph.sigmoid(z),
            Activation::Linear => Ok(z),
        }
    }
}

/// A single unit computing `act(b + Σ wᵢ·xᵢ)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `n_in` weights and a bias, all drawn uniformly from `[-1, 1]`.
    pub fn new<R: Rng + ?Sized>(graph: &mut Graph, n_in: usize, rng: &mut R) -> Self {
        let weights = uniform_leaves(graph, n_in, rng);
        let bias = graph.leaf(rng.gen_range(-1.0..=1.0));
        Neuron {
            weights,
            bias,
            activation: Activation::default(),
        }
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    /// Wires the neuron over `inputs` and returns its single output node.
    pub fn output(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, NnError> {
        if inputs.len() != self.weights.len() {
            return Err(NnError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let mut sum = self.bias;
        for (&w, &x) in self.weights.iter().zip(inputs) {
            let wx = graph.mul(w, x)?;
            sum = graph.add(sum, wx)?;
        }
        Ok(self.activation.apply(graph, sum)?)
    }
}

impl Module for Neuron {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, NnError> {
        Ok(vec![self.output(graph, inputs)?])
    }

    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
