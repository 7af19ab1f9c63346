use crate::autograd::grad_check::check_grad;
use crate::error::AutogradError;
use crate::graph::{Graph, GraphOptions};
use approx::assert_relative_eq;

#[test]
fn test_div_forward_and_backward() -> Result<(), AutogradError> {
    let mut g = Graph::new();
    let a = g.leaf(3.0);
    let b = g.leaf(2.0);
    let c = g.div(a, b)?;
    assert_eq!(g.value(c), 1.5);
    assert_eq!(g.op_tag(c), "*");
    g.backward(c)?;
    assert_relative_eq!(g.grad(a), 0.5);
    assert_relative_eq!(g.grad(b), -0.75);
    Ok(())
}

#[test]
fn test_div_reflected_scalar() -> Result<(), AutogradError> {
    let mut g = Graph::new();
    let x = g.leaf(4.0);
    let r = g.div(1.0, x)?;
    assert_eq!(g.value(r), 0.25);
    g.backward(r)?;
    assert_relative_eq!(g.grad(x), -1.0 / 16.0);
    Ok(())
}

#[test]
fn test_div_by_zero_is_infinite() -> Result<(), AutogradError> {
    let mut g = Graph::new();
    let a = g.leaf(1.0);
    let z = g.leaf(0.0);
    let c = g.div(a, z)?;
    assert_eq!(g.value(c), f64::INFINITY);

    let m = g.leaf(-1.0);
    let d = g.div(m, z)?;
    assert_eq!(g.value(d), f64::NEG_INFINITY);
    Ok(())
}

#[test]
fn test_div_by_zero_with_domain_check_rolls_back() {
    let mut g = Graph::with_options(GraphOptions::new().check_domain(true));
    let a = g.leaf(1.0);
    let z = g.leaf(0.0);
    let len = g.len();
    assert!(matches!(
        g.div(a, z),
        Err(AutogradError::DomainError { operation: "pow", .. })
    ));
    assert_eq!(g.len(), len);
}

#[test]
fn test_div_grad_check() {
    let result = check_grad(|g, x| g.div(x[0], x[1]), &[0.8, -1.6], 1e-6, 1e-6);
    assert_eq!(result, Ok(()));
}
