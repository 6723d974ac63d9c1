//! Reverse-mode automatic differentiation engine.
//!
//! The forward pass builds a DAG incrementally: every [`Graph`] operation
//! evaluates immediately and records a [`Node`] carrying the result, the
//! producing [`Op`] tag and the operand ids. A backward episode then seeds
//! the terminal node's gradient, schedules the reachable subgraph in
//! topological order and walks it in reverse, accumulating each operation's
//! vector-Jacobian product into its parents.
//!
//! Everything is single-threaded and synchronous; the gradient slot is the
//! only mutable state, and it is touched only by the sequential backward
//! walk.

pub mod backward;
pub mod graph;
pub mod node;
pub(crate) mod topo;

pub use graph::Graph;
pub use node::{Node, NodeId, Op};
