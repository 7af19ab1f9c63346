use rand::Rng;
use scalarust_core::{Graph, NodeId};

/// Allocates `count` parameter leaves drawn uniformly from `[-1, 1]`.
pub fn uniform_leaves<R: Rng + ?Sized>(graph: &mut Graph, count: usize, rng: &mut R) -> Vec<NodeId> {
    (0..count)
        .map(|_| graph.leaf(rng.gen_range(-1.0..=1.0)))
        .collect()
}
