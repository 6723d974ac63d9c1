//! Linear algebra operations.

pub mod matmul;
pub mod transpose;

pub use matmul::matmul;
pub use transpose::transpose;
