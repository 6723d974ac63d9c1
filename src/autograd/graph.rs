use crate::autograd::node::{Node, NodeId, Op};
use crate::error::RevGradError;
use crate::ops;
use crate::tensor::Tensor;
use log::trace;
use num_traits::Float;
use std::ops::AddAssign;

/// Arena-backed computation graph.
///
/// The graph owns every [`Node`]; callers hold [`NodeId`] handles. Building a
/// node runs the operation's forward rule immediately (eager forward pass)
/// and records the operand links for the later backward episode. Construction
/// is atomic: a failed forward leaves the arena untouched.
///
/// The parent relation is acyclic by construction — an operation can only
/// name ids the arena has already issued, so no node can reach itself.
pub struct Graph<T> {
    pub(crate) nodes: Vec<Node<T>>,
}

impl<T: Float + AddAssign> Graph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    /// Number of nodes recorded so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no nodes have been recorded.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Wraps caller-supplied tensor data as a leaf node.
    pub fn leaf(&mut self, value: Tensor<T>) -> NodeId {
        self.push(value, Op::Leaf, Vec::new())
    }

    /// Records `a + b` (strict element-wise addition).
    ///
    /// # Errors
    /// [`RevGradError::InvalidOperand`] for a foreign id,
    /// [`RevGradError::ShapeMismatch`] from the backend.
    pub fn add(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, RevGradError> {
        self.check_operand(a, "add")?;
        self.check_operand(b, "add")?;
        let value = ops::arithmetic::add(&self.nodes[a.0].value, &self.nodes[b.0].value)?;
        Ok(self.push(value, Op::Add, vec![a, b]))
    }

    /// Records `a @ b` (2-D matrix multiplication).
    ///
    /// # Errors
    /// [`RevGradError::InvalidOperand`] for a foreign id,
    /// [`RevGradError::IncompatibleShapes`] from the backend.
    pub fn matmul(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, RevGradError> {
        self.check_operand(a, "matmul")?;
        self.check_operand(b, "matmul")?;
        let value = ops::linalg::matmul(&self.nodes[a.0].value, &self.nodes[b.0].value)?;
        Ok(self.push(value, Op::MatMul, vec![a, b]))
    }

    /// Records `relu(a)` (element-wise max with zero).
    pub fn relu(&mut self, a: NodeId) -> Result<NodeId, RevGradError> {
        self.check_operand(a, "relu")?;
        let value = ops::activation::relu(&self.nodes[a.0].value)?;
        Ok(self.push(value, Op::Relu, vec![a]))
    }

    /// Borrows a node for inspection (value, op tag, parents, gradient).
    pub fn node(&self, id: NodeId) -> Result<&Node<T>, RevGradError> {
        self.check_operand(id, "node")?;
        Ok(&self.nodes[id.0])
    }

    /// The tensor value of a node.
    pub fn value(&self, id: NodeId) -> Result<&Tensor<T>, RevGradError> {
        Ok(self.node(id)?.value())
    }

    /// The shape of a node's value.
    pub fn shape(&self, id: NodeId) -> Result<&[usize], RevGradError> {
        Ok(self.node(id)?.value().shape())
    }

    /// The accumulated gradient of a node, if set.
    pub fn grad(&self, id: NodeId) -> Result<Option<&Tensor<T>>, RevGradError> {
        Ok(self.node(id)?.grad())
    }

    /// Seeds (or replaces) a node's gradient ahead of a backward episode.
    ///
    /// # Errors
    /// [`RevGradError::ShapeMismatch`] if the seed's shape differs from the
    /// node value's shape.
    pub fn set_grad(&mut self, id: NodeId, grad: Tensor<T>) -> Result<(), RevGradError> {
        self.check_operand(id, "set_grad")?;
        let node = &mut self.nodes[id.0];
        if grad.shape() != node.value.shape() {
            return Err(RevGradError::ShapeMismatch {
                expected: node.value.shape().to_vec(),
                actual: grad.shape().to_vec(),
                operation: "set_grad".to_string(),
            });
        }
        node.grad = Some(grad);
        Ok(())
    }

    /// Clears every gradient slot.
    ///
    /// The engine never resets gradients on its own; callers iterating
    /// (e.g. a training loop) must call this between episodes or gradients
    /// keep accumulating across steps.
    pub fn clear_grads(&mut self) {
        for node in &mut self.nodes {
            node.grad = None;
        }
    }

    fn push(&mut self, value: Tensor<T>, op: Op, parents: Vec<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        trace!(
            "recorded {id}: op='{op}' shape={:?} parents={parents:?}",
            value.shape()
        );
        self.nodes.push(Node {
            value,
            op,
            parents,
            grad: None,
        });
        id
    }

    pub(crate) fn check_operand(
        &self,
        id: NodeId,
        operation: &str,
    ) -> Result<(), RevGradError> {
        if id.0 >= self.nodes.len() {
            return Err(RevGradError::InvalidOperand {
                operation: operation.to_string(),
                node: id.0,
            });
        }
        Ok(())
    }
}

impl<T: Float + AddAssign> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
