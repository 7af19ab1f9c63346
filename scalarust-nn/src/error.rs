use scalarust_core::AutogradError;
use thiserror::Error;

/// Errors raised by the network wiring layer.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum NnError {
    #[error("Input size mismatch: expected {expected} inputs, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Autograd(#[from] AutogradError),
}
