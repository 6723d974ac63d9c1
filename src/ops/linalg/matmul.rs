// src/ops/linalg/matmul.rs

use crate::error::RevGradError;
use crate::ops::linalg::transpose::transpose;
use crate::tensor::Tensor;
use num_traits::Float;
use std::ops::AddAssign;

/// Performs matrix multiplication C = A @ B.
///
/// Only 2-D tensors (matrices) are supported:
/// A: [M, K], B: [K, N] -> C: [M, N]
///
/// # Errors
/// Returns [`RevGradError::IncompatibleShapes`] if either operand is not 2-D
/// or the inner dimensions do not match.
pub fn matmul<T>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, RevGradError>
where
    T: Float + AddAssign,
{
    let a_shape = a.shape();
    let b_shape = b.shape();

    if a_shape.len() != 2 || b_shape.len() != 2 || a_shape[1] != b_shape[0] {
        return Err(RevGradError::IncompatibleShapes {
            shape1: a_shape.to_vec(),
            shape2: b_shape.to_vec(),
            operation: "matmul".to_string(),
        });
    }

    let m = a_shape[0];
    let k = a_shape[1]; // == b_shape[0]
    let n = b_shape[1];

    let a_data = a.data();
    let b_data = b.data();
    let mut output_data = vec![T::zero(); m * n];

    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            for l in 0..k {
                sum += a_data[i * k + l] * b_data[l * n + j];
            }
            output_data[i * n + j] = sum;
        }
    }

    Tensor::new(output_data, vec![m, n])
}

/// Backward rule for matrix multiplication.
///
/// Given the upstream gradient G of C = A @ B, the contributions are the
/// standard matrix-calculus adjoints:
///
///   dL/dA = G @ Bᵀ
///   dL/dB = Aᵀ @ G
///
/// The transposes are fresh tensors; the operands' stored values are never
/// modified.
pub(crate) fn matmul_backward<T>(
    grad: &Tensor<T>,
    a: &Tensor<T>,
    b: &Tensor<T>,
) -> Result<(Tensor<T>, Tensor<T>), RevGradError>
where
    T: Float + AddAssign,
{
    let grad_a = matmul(grad, &transpose(b, 0, 1)?)?;
    let grad_b = matmul(&transpose(a, 0, 1)?, grad)?;
    Ok((grad_a, grad_b))
}
