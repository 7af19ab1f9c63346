use crate::error::AutogradError;
use crate::graph::{Graph, NodeId};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

struct Frame {
    node: NodeId,
    preds: Vec<NodeId>,
    cursor: usize,
}

/// Builds a post-order of every node reachable from `terminal`.
///
/// A node is appended only after all of its predecessors, so iterating the result in
/// reverse visits each node before anything it depends on. The walk is iterative to
/// cope with long chains (e.g. sums over many terms). Meeting a node that is still on
/// the current path means the predecessor relation has a cycle.
pub fn topological_sort(graph: &Graph, terminal: NodeId) -> Result<Vec<NodeId>, AutogradError> {
    graph.check("topological_sort", terminal)?;

    let mut marks = vec![Mark::Unvisited; graph.len()];
    let mut order = Vec::new();
    let mut stack = vec![Frame {
        node: terminal,
        preds: graph.predecessors(terminal),
        cursor: 0,
    }];
    marks[terminal.0] = Mark::InProgress;

    while let Some(frame) = stack.last_mut() {
        let next = frame.preds.get(frame.cursor).copied();
        frame.cursor += 1;

        match next {
            Some(child) => {
                let mark = marks
                    .get(child.0)
                    .copied()
                    .ok_or_else(|| AutogradError::unknown_node("topological_sort", child, graph.len()))?;
                match mark {
                    Mark::Unvisited => {
                        marks[child.0] = Mark::InProgress;
                        stack.push(Frame {
                            node: child,
                            preds: graph.predecessors(child),
                            cursor: 0,
                        });
                    }
                    Mark::InProgress => return Err(AutogradError::CyclicGraph { node: child }),
                    Mark::Done => {}
                }
            }
            None => {
                if let Some(done) = stack.pop() {
                    marks[done.node.0] = Mark::Done;
                    order.push(done.node);
                }
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Op;

    #[test]
    fn test_post_order_puts_predecessors_first() -> Result<(), AutogradError> {
        let mut g = Graph::new();
        let a = g.leaf(2.0);
        let b = g.leaf(3.0);
        let c = g.mul(a, b)?;
        let d = g.add(c, a)?;

        let order = topological_sort(&g, d)?;
        assert_eq!(order.len(), 4);
        assert_eq!(order.last(), Some(&d));
        let pos = |id: NodeId| order.iter().position(|&n| n == id).unwrap();
        assert!(pos(a) < pos(c));
        assert!(pos(b) < pos(c));
        assert!(pos(c) < pos(d));
        Ok(())
    }

    #[test]
    fn test_shared_node_visited_once() -> Result<(), AutogradError> {
        let mut g = Graph::new();
        let a = g.leaf(3.0);
        let b = g.add(a, a)?;
        let c = g.mul(b, a)?;
        let order = topological_sort(&g, c)?;
        assert_eq!(order, vec![a, b, c]);
        Ok(())
    }

    #[test]
    fn test_unreachable_nodes_are_skipped() -> Result<(), AutogradError> {
        let mut g = Graph::new();
        let a = g.leaf(1.0);
        let _unrelated = g.leaf(5.0);
        let b = g.exp(a)?;
        assert_eq!(topological_sort(&g, b)?, vec![a, b]);
        Ok(())
    }

    #[test]
    fn test_cycle_is_detected() {
        let mut g = Graph::new();
        let a = g.leaf(1.0);
        let b = g.tanh(a).unwrap();
        let c = g.exp(b).unwrap();
        // Only reachable through corruption: point the leaf back at its consumer.
        g.rewire(a, Op::Exp(c));

        match topological_sort(&g, c) {
            Err(AutogradError::CyclicGraph { .. }) => {}
            other => panic!("Expected CyclicGraph, got {:?}", other),
        }
    }

    #[test]
    fn test_self_loop_is_detected() {
        let mut g = Graph::new();
        let a = g.leaf(1.0);
        g.rewire(a, Op::Relu(a));
        assert_eq!(
            topological_sort(&g, a),
            Err(AutogradError::CyclicGraph { node: a })
        );
    }

    #[test]
    fn test_unknown_terminal() {
        let g = Graph::new();
        assert!(matches!(
            topological_sort(&g, NodeId(3)),
            Err(AutogradError::InvalidOperand { .. })
        ));
    }
}
