use scalarust_core::{Graph, NodeId};

// Shared by several integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Checks the gradients of `nodes` against `expected` within `tolerance`.
#[allow(dead_code)]
pub fn check_grads_near(graph: &Graph, nodes: &[NodeId], expected: &[f64], tolerance: f64) {
    assert_eq!(nodes.len(), expected.len(), "Node/expectation length mismatch");
    for (i, (&node, &e)) in nodes.iter().zip(expected.iter()).enumerate() {
        let actual = graph.grad(node);
        let diff = (actual - e).abs();
        if diff > tolerance {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, actual, e, diff, tolerance
            );
        }
    }
}
