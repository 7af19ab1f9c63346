use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scalarust_core::check_grad;

#[test]
fn test_mlp_parameter_count() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(0);
    let mlp = Mlp::new(&mut graph, 3, &[4, 4, 1], &mut rng);
    // (3 + 1) * 4 + (4 + 1) * 4 + (4 + 1) * 1
    assert_eq!(mlp.parameters().len(), 41);
    assert_eq!(mlp.layers().len(), 3);
    assert_eq!(graph.len(), 41);
}

#[test]
fn test_mlp_forward_single_output() -> Result<(), NnError> {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(0);
    let mlp = Mlp::new(&mut graph, 3, &[4, 4, 1], &mut rng);
    let xs: Vec<NodeId> = [2.0, 3.0, -1.0].iter().map(|&v| graph.leaf(v)).collect();
    let out = mlp.forward(&mut graph, &xs)?;
    assert_eq!(out.len(), 1);
    let y = graph.value(out[0]);
    assert!(y > -1.0 && y < 1.0);
    Ok(())
}

#[test]
fn test_mlp_input_size_mismatch() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(0);
    let mlp = Mlp::new(&mut graph, 3, &[2, 1], &mut rng);
    let x = graph.leaf(1.0);
    assert_eq!(
        mlp.forward(&mut graph, &[x]),
        Err(NnError::InputSizeMismatch {
            expected: 3,
            actual: 1
        })
    );
}

#[test]
fn test_mlp_gradients_reach_every_parameter() -> Result<(), NnError> {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(11);
    let mlp = Mlp::new(&mut graph, 2, &[3, 1], &mut rng);
    let xs: Vec<NodeId> = [0.4, -0.9].iter().map(|&v| graph.leaf(v)).collect();
    let out = mlp.forward(&mut graph, &xs)?;
    graph.backward(out[0])?;
    for p in mlp.parameters() {
        assert!(graph.grad(p).is_finite());
    }
    // Output bias always receives 1 - tanh^2 of the output.
    let out_bias = mlp.layers()[1].neurons()[0].bias();
    let y = graph.value(out[0]);
    approx::assert_relative_eq!(graph.grad(out_bias), 1.0 - y * y, epsilon = 1e-12);

    mlp.zero_grad(&mut graph)?;
    assert!(mlp.parameters().iter().all(|&p| graph.grad(p) == 0.0));
    Ok(())
}

#[test]
fn test_mlp_input_gradients_match_finite_differences() {
    // Same seed, same parameters: every evaluation rebuilds an identical network.
    let result = check_grad(
        |g, x| {
            let mut rng = StdRng::seed_from_u64(5);
            let mlp = Mlp::new(g, 2, &[3, 1], &mut rng);
            let out = mlp.forward(g, x).map_err(|e| match e {
                NnError::Autograd(inner) => inner,
                other => panic!("unexpected error: {other}"),
            })?;
            Ok(out[0])
        },
        &[0.3, -0.6],
        1e-6,
        1e-5,
    );
    assert_eq!(result, Ok(()));
}

#[test]
fn test_mlp_output_activation() -> Result<(), NnError> {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(9);
    let mlp = Mlp::new(&mut graph, 1, &[2, 1], &mut rng).with_output_activation(Activation::Linear);
    assert_eq!(
        mlp.layers()[0].neurons()[0].activation(),
        Activation::Tanh
    );
    assert_eq!(
        mlp.layers()[1].neurons()[0].activation(),
        Activation::Linear
    );
    let x = graph.leaf(0.5);
    let out = mlp.forward(&mut graph, &[x])?;
    assert_eq!(graph.op_tag(out[0]), "+");
    Ok(())
}
