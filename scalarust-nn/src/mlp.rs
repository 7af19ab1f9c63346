use crate::error::NnError;
use crate::layer::Layer;
use crate::module::Module;
use crate::neuron::Activation;
use log::debug;
use rand::Rng;
use scalarust_core::{Graph, NodeId};

/// A multi-layer perceptron: layers applied in sequence, each feeding the next.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds layers of the given output sizes; the first one reads `n_in` inputs.
    ///
    /// `Mlp::new(graph, 3, &[4, 4, 1], rng)` gives a 3 → 4 → 4 → 1 network.
    pub fn new<R: Rng + ?Sized>(graph: &mut Graph, n_in: usize, n_outs: &[usize], rng: &mut R) -> Self {
        let mut layers = Vec::with_capacity(n_outs.len());
        let mut fan_in = n_in;
        for &n_out in n_outs {
            layers.push(Layer::new(graph, fan_in, n_out, rng));
            fan_in = n_out;
        }
        let mlp = Mlp { layers };
        debug!(
            "Mlp::new: {} -> {:?}, {} parameters",
            n_in,
            n_outs,
            mlp.parameters().len()
        );
        mlp
    }

    /// Sets the activation of the last layer, e.g. [`Activation::Linear`] for regression
    /// outputs.
    pub fn with_output_activation(mut self, activation: Activation) -> Self {
        if let Some(last) = self.layers.pop() {
            self.layers.push(last.with_activation(activation));
        }
        self
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, NnError> {
        let mut x = inputs.to_vec();
        for layer in &self.layers {
            x = layer.forward(graph, &x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
