//! Backward executor: reverse walk of the scheduled graph, dispatching one
//! backward rule per operation tag and accumulating contributions into
//! parent gradient slots.

use crate::autograd::graph::Graph;
use crate::autograd::node::{Node, NodeId, Op};
use crate::autograd::topo::topological_sort;
use crate::error::RevGradError;
use crate::ops::activation::relu::relu_backward;
use crate::ops::arithmetic::add;
use crate::ops::linalg::matmul::matmul_backward;
use crate::tensor::Tensor;
use log::debug;
use num_traits::Float;
use std::ops::AddAssign;

/// Accumulates a gradient contribution into a node's slot: the first
/// contribution initializes it, later ones are elementwise-summed. Summation
/// is commutative, so arrival order does not matter.
pub(crate) fn accumulate_gradient<T: Float>(
    slot: &mut Option<Tensor<T>>,
    contribution: Tensor<T>,
) -> Result<(), RevGradError> {
    match slot.take() {
        Some(existing) => {
            // Same-shape by construction of the backward rules; add's shape
            // check only surfaces engine bugs.
            *slot = Some(add(&existing, &contribution)?);
        }
        None => *slot = Some(contribution),
    }
    Ok(())
}

fn required_grad<T>(node: &Node<T>, id: NodeId) -> Result<&Tensor<T>, RevGradError> {
    node.grad().ok_or_else(|| {
        RevGradError::InternalError(format!(
            "node {id} reached backward with no accumulated gradient"
        ))
    })
}

impl<T: Float + AddAssign> Graph<T> {
    /// Runs one backward episode from `start`.
    ///
    /// The caller must have seeded `start`'s gradient via
    /// [`Graph::set_grad`]. The episode schedules every node reachable from
    /// `start`, then walks the order in reverse — start first, leaves last —
    /// invoking each node's backward rule exactly once. Reverse topological
    /// order guarantees a node's gradient is fully accumulated (all its
    /// consumers have contributed) before its own rule propagates it to its
    /// parents.
    ///
    /// Gradients are accumulated, never overwritten; rerunning without
    /// [`Graph::clear_grads`] in between keeps summing.
    ///
    /// # Errors
    /// [`RevGradError::InvalidOperand`] for a foreign id,
    /// [`RevGradError::MissingSeedGradient`] if `start` has no gradient set.
    pub fn backward(&mut self, start: NodeId) -> Result<(), RevGradError> {
        self.check_operand(start, "backward")?;
        if self.nodes[start.0].grad.is_none() {
            return Err(RevGradError::MissingSeedGradient { node: start.0 });
        }

        let order = topological_sort(&self.nodes, start);
        debug!("backward episode from {start}: {} nodes scheduled", order.len());

        for &id in order.iter().rev() {
            let contributions = {
                let node = &self.nodes[id.0];
                match node.op {
                    Op::Leaf => Vec::new(),
                    Op::Add => {
                        let grad = required_grad(node, id)?;
                        // One contribution per operand slot: `x + x` gets the
                        // gradient twice.
                        node.parents.iter().map(|&p| (p, grad.clone())).collect()
                    }
                    Op::MatMul => {
                        let grad = required_grad(node, id)?;
                        let (a, b) = (node.parents[0], node.parents[1]);
                        let (grad_a, grad_b) = matmul_backward(
                            grad,
                            &self.nodes[a.0].value,
                            &self.nodes[b.0].value,
                        )?;
                        vec![(a, grad_a), (b, grad_b)]
                    }
                    Op::Relu => {
                        let grad = required_grad(node, id)?;
                        let a = node.parents[0];
                        vec![(a, relu_backward(grad, &self.nodes[a.0].value)?)]
                    }
                }
            };

            for (parent, contribution) in contributions {
                accumulate_gradient(&mut self.nodes[parent.0].grad, contribution)?;
            }
        }
        Ok(())
    }
}
