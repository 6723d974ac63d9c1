//! # revgrad
//!
//! A minimal reverse-mode automatic-differentiation engine over a small dense
//! tensor backend.
//!
//! Operations on a [`Graph`] evaluate eagerly and record a DAG of
//! tensor-valued nodes; a single backward episode then computes the gradient
//! of a chosen output with respect to every node that feeds it. The operation
//! set is fixed: element-wise addition, 2-D matrix multiplication and ReLU.
//!
//! ```
//! use revgrad::{Graph, Tensor};
//! use revgrad::tensor::ones;
//!
//! # fn main() -> Result<(), revgrad::RevGradError> {
//! let mut graph = Graph::new();
//! let x = graph.leaf(Tensor::new(vec![1.0_f32, -2.0], vec![1, 2])?);
//! let y = graph.leaf(Tensor::new(vec![3.0, 4.0], vec![1, 2])?);
//! let sum = graph.add(x, y)?;
//! let out = graph.relu(sum)?;
//!
//! graph.set_grad(out, ones(&[1, 2])?)?;
//! graph.backward(out)?;
//!
//! // d out / d x is the relu mask of (x + y) = [4, 2]: all ones here.
//! assert_eq!(graph.grad(x)?.unwrap().data(), &[1.0, 1.0]);
//! # Ok(())
//! # }
//! ```

pub mod autograd;
pub mod error;
pub mod ops;
pub mod tensor;

pub use autograd::{Graph, Node, NodeId, Op};
pub use error::RevGradError;
pub use tensor::Tensor;

// Re-export traits required by the generic bounds on public items.
pub use num_traits;
