use crate::error::AutogradError;
use crate::graph::{Graph, NodeId};
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(AutogradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(AutogradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Evaluates `func` on a fresh graph whose leaves hold `inputs`.
fn evaluate<F>(func: &F, inputs: &[f64]) -> Result<(Graph, Vec<NodeId>, NodeId), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, AutogradError>,
{
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs.iter().map(|&v| graph.leaf(v)).collect();
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok((graph, leaves, output))
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs`, and returns the
/// terminal node to differentiate. Each analytic gradient is compared with
/// `(f(x + ε) - f(x - ε)) / 2ε` using `approx::relative_eq!`, with `tolerance` as both
/// the absolute and the relative bound.
pub fn check_grad<F>(func: F, inputs: &[f64], epsilon: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, AutogradError>,
{
    // --- 1. Analytical gradients ---
    let (mut graph, leaves, output) = evaluate(&func, inputs)?;
    graph
        .backward(output)
        .map_err(GradCheckError::BackwardPassError)?;

    // --- 2. Compare with numerical gradients, one input at a time ---
    let mut perturbed = inputs.to_vec();
    for (input_index, &leaf) in leaves.iter().enumerate() {
        let analytical_grad = graph.grad(leaf);
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let original = inputs[input_index];
        perturbed[input_index] = original + epsilon;
        let (plus_graph, _, plus_out) = evaluate(&func, &perturbed)?;
        perturbed[input_index] = original - epsilon;
        let (minus_graph, _, minus_out) = evaluate(&func, &perturbed)?;
        perturbed[input_index] = original;

        let loss_plus = plus_graph.value(plus_out);
        let loss_minus = minus_graph.value(minus_out);
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        debug!(
            "check_grad: input {}: analytical {} numerical {}",
            input_index, analytical_grad, numerical_grad
        );
        if !approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}
