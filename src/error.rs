use thiserror::Error;

/// Custom error type for the revgrad crate.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum RevGradError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Incompatible shapes for {operation}: {shape1:?} and {shape2:?}")]
    IncompatibleShapes {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
        operation: String,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Invalid axis {axis} for tensor of rank {rank}")]
    InvalidAxis { axis: usize, rank: usize },

    #[error("Invalid operand for {operation}: node {node} does not belong to this graph")]
    InvalidOperand { operation: String, node: usize },

    #[error("Backward called on node {node} with no seed gradient set")]
    MissingSeedGradient { node: usize },

    #[error("Internal error: {0}")]
    InternalError(String),
}
