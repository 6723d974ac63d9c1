//! Topological scheduler for backward episodes.

use crate::autograd::node::{Node, NodeId};
use log::trace;

/// Orders every node reachable from `start` via parent links so that each
/// parent appears strictly before each child, each node exactly once.
///
/// Depth-first post-order with an explicit stack of `(node, next-parent)`
/// frames; recursion depth would otherwise equal graph depth. Visited marking
/// is a boolean array indexed by arena position, which also collapses
/// duplicate operand slots and shared ancestors (diamond graphs) to a single
/// visit. No cycle check: the arena can only link a node to earlier nodes,
/// so the graph is a DAG by construction.
///
/// The caller must have validated `start` against the arena.
pub(crate) fn topological_sort<T>(nodes: &[Node<T>], start: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; nodes.len()];
    let mut order = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = vec![(start, 0)];
    visited[start.0] = true;

    while let Some((id, cursor)) = stack.pop() {
        let parents = &nodes[id.0].parents;
        if cursor < parents.len() {
            stack.push((id, cursor + 1));
            let parent = parents[cursor];
            if !visited[parent.0] {
                visited[parent.0] = true;
                stack.push((parent, 0));
            }
        } else {
            trace!("topo: finished {id}");
            order.push(id);
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::Graph;
    use crate::tensor::from_vec;

    fn scalar_leaf(g: &mut Graph<f32>, v: f32) -> NodeId {
        g.leaf(from_vec(vec![v], vec![1]).unwrap())
    }

    /// Position lookup: order[pos[id]] == id.
    fn positions(order: &[NodeId], len: usize) -> Vec<Option<usize>> {
        let mut pos = vec![None; len];
        for (i, id) in order.iter().enumerate() {
            pos[id.0] = Some(i);
        }
        pos
    }

    #[test]
    fn test_parents_precede_children() {
        let mut g = Graph::new();
        let a = scalar_leaf(&mut g, 1.0);
        let b = scalar_leaf(&mut g, 2.0);
        let c = g.add(a, b).unwrap();
        let d = g.relu(c).unwrap();
        let e = g.add(c, d).unwrap();

        let order = topological_sort(&g.nodes, e);
        assert_eq!(order.len(), 5);
        let pos = positions(&order, g.len());
        for id in order.iter() {
            for parent in g.node(*id).unwrap().parents() {
                assert!(
                    pos[parent.0].unwrap() < pos[id.0].unwrap(),
                    "parent {parent} must precede child {id}"
                );
            }
        }
        assert_eq!(*order.last().unwrap(), e);
    }

    #[test]
    fn test_shared_ancestor_visited_once() {
        // Diamond: a feeds both b and c, which meet at d.
        let mut g = Graph::new();
        let a = scalar_leaf(&mut g, 1.0);
        let b = g.relu(a).unwrap();
        let c = g.add(a, a).unwrap();
        let d = g.add(b, c).unwrap();

        let order = topological_sort(&g.nodes, d);
        assert_eq!(order.len(), 4);
        assert_eq!(order.iter().filter(|id| **id == a).count(), 1);
    }

    #[test]
    fn test_unreachable_nodes_excluded() {
        let mut g = Graph::new();
        let a = scalar_leaf(&mut g, 1.0);
        let _stray = scalar_leaf(&mut g, 9.0);
        let b = g.relu(a).unwrap();

        let order = topological_sort(&g.nodes, b);
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let mut g = Graph::new();
        let mut node = scalar_leaf(&mut g, 1.0);
        for _ in 0..50_000 {
            node = g.relu(node).unwrap();
        }
        let order = topological_sort(&g.nodes, node);
        assert_eq!(order.len(), 50_001);
    }
}
