use crate::error::NnError;
use crate::module::Module;
use crate::neuron::{Activation, Neuron};
use rand::Rng;
use scalarust_core::{Graph, NodeId};

/// `n_out` neurons reading the same `n_in` inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(graph: &mut Graph, n_in: usize, n_out: usize, rng: &mut R) -> Self {
        let neurons = (0..n_out).map(|_| Neuron::new(graph, n_in, rng)).collect();
        Layer { neurons }
    }

    /// Sets the activation of every neuron in the layer.
    pub fn with_activation(self, activation: Activation) -> Self {
        let neurons = self
            .neurons
            .into_iter()
            .map(|n| n.with_activation(activation))
            .collect();
        Layer { neurons }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, NnError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.output(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}
