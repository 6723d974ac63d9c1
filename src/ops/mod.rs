//! # Tensor operations (`ops`)
//!
//! Forward computations and their paired backward (vector-Jacobian-product)
//! rules, grouped by category:
//!
//! - [`arithmetic`]: element-wise arithmetic (add).
//! - [`linalg`]: linear algebra (matmul, transpose).
//! - [`activation`]: activation functions (relu).
//!
//! Every function here operates on plain [`crate::tensor::Tensor`] values and
//! knows nothing about the computation graph; [`crate::autograd`] calls into
//! these from node construction (forward) and from the backward executor's
//! per-op dispatch (`*_backward` rules).

pub mod activation;
pub mod arithmetic;
pub mod linalg;
