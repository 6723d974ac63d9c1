use crate::tensor::Tensor;
use std::fmt;

/// Stable index of a node inside a [`crate::autograd::Graph`] arena.
///
/// Ids are only meaningful for the graph that issued them; passing an id to a
/// different graph is reported as `InvalidOperand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.0)
    }
}

/// Tag identifying which operation produced a node.
///
/// The operation set is closed: the backward executor dispatches on this tag
/// through a fixed match, one backward rule per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Caller-supplied data; backward is a no-op.
    Leaf,
    /// Element-wise addition of two operands.
    Add,
    /// 2-D matrix multiplication of two operands.
    MatMul,
    /// Element-wise rectified linear unit of one operand.
    Relu,
}

impl Op {
    /// Short printable symbol, in the spirit of the usual expression-graph
    /// dumps.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Leaf => "leaf",
            Op::Add => "+",
            Op::MatMul => "@",
            Op::Relu => "relu",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A vertex in the computation graph.
///
/// A node is created exactly once, either as a leaf wrapping caller data or
/// as the output of an operation on existing nodes. Its `value` never changes
/// afterwards; only the `grad` slot mutates, and only during a backward
/// episode.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) value: Tensor<T>,
    pub(crate) op: Op,
    /// Operand ids in argument order. The same id appears twice when a node
    /// is used as both operands (e.g. `x + x`); backward contributes once per
    /// slot, which is what yields the doubled gradient in that case. The
    /// scheduler's visited marking still traverses each distinct parent once.
    pub(crate) parents: Vec<NodeId>,
    pub(crate) grad: Option<Tensor<T>>,
}

impl<T> Node<T> {
    /// The tensor value this node wraps.
    pub fn value(&self) -> &Tensor<T> {
        &self.value
    }

    /// The operation that produced this node.
    pub fn op(&self) -> Op {
        self.op
    }

    /// Operand ids in argument order (empty for leaves).
    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    /// The accumulated gradient, if any contribution has arrived yet.
    pub fn grad(&self) -> Option<&Tensor<T>> {
        self.grad.as_ref()
    }
}

impl<T: Copy> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parents: Vec<String> = self.parents.iter().map(|p| p.to_string()).collect();
        write!(
            f,
            "Node(shape={:?}, op='{}', parents=[{}], grad={})",
            self.value.shape(),
            self.op,
            parents.join(", "),
            if self.grad.is_some() { "set" } else { "unset" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::Tensor;

    #[test]
    fn test_node_display() {
        let node = Node {
            value: Tensor::new(vec![1.0_f32, 2.0], vec![1, 2]).unwrap(),
            op: Op::Add,
            parents: vec![NodeId(0), NodeId(1)],
            grad: None,
        };
        assert_eq!(
            node.to_string(),
            "Node(shape=[1, 2], op='+', parents=[%0, %1], grad=unset)"
        );
    }
}
