//! Builds a small MLP, evaluates a squared-error loss over four samples and prints the
//! gradient of every parameter.
//!
//! `cargo run -p scalarust-nn --example mlp_forward_backward`

use scalarust_core::{Graph, NodeId};
use scalarust_nn::{Mlp, Module, NnError};

fn main() -> Result<(), NnError> {
    let mut graph = Graph::new();
    let mut rng = rand::thread_rng();
    let mlp = Mlp::new(&mut graph, 3, &[4, 4, 1], &mut rng);

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut loss = graph.leaf(0.0);
    for (x, &y) in xs.iter().zip(ys.iter()) {
        let inputs: Vec<NodeId> = x.iter().map(|&v| graph.leaf(v)).collect();
        let out = mlp.forward(&mut graph, &inputs)?;
        println!("prediction {:+.4} target {:+.1}", graph.value(out[0]), y);
        let diff = graph.sub(out[0], y)?;
        let sq = graph.pow(diff, 2.0)?;
        loss = graph.add(loss, sq)?;
    }

    mlp.zero_grad(&mut graph)?;
    graph.backward(loss)?;
    println!("loss {:.6} over {} graph nodes", graph.value(loss), graph.len());
    for (i, p) in mlp.parameters().into_iter().enumerate() {
        println!("param {:2}: value {:+.4} grad {:+.6}", i, graph.value(p), graph.grad(p));
    }
    Ok(())
}
