// src/ops/activation/relu.rs

use crate::error::RevGradError;
use crate::tensor::Tensor;
use num_traits::Float;

/// Applies the Rectified Linear Unit element-wise: ReLU(x) = max(0, x).
pub fn relu<T: Float>(a: &Tensor<T>) -> Result<Tensor<T>, RevGradError> {
    let data = a
        .data()
        .iter()
        .map(|&x| if x > T::zero() { x } else { T::zero() })
        .collect();
    Tensor::new(data, a.shape().to_vec())
}

/// Element-wise positivity mask: 1 where x > 0, else 0.
pub fn positive_mask<T: Float>(a: &Tensor<T>) -> Result<Tensor<T>, RevGradError> {
    let data = a
        .data()
        .iter()
        .map(|&x| if x > T::zero() { T::one() } else { T::zero() })
        .collect();
    Tensor::new(data, a.shape().to_vec())
}

/// Backward rule for ReLU.
///
/// The incoming gradient is zeroed wherever the forward input was <= 0 (the
/// conventional sub-gradient choice at the non-differentiable point).
pub(crate) fn relu_backward<T: Float>(
    grad: &Tensor<T>,
    input: &Tensor<T>,
) -> Result<Tensor<T>, RevGradError> {
    if grad.shape() != input.shape() {
        return Err(RevGradError::ShapeMismatch {
            expected: input.shape().to_vec(),
            actual: grad.shape().to_vec(),
            operation: "relu_backward".to_string(),
        });
    }
    let data = grad
        .data()
        .iter()
        .zip(input.data())
        .map(|(&g, &x)| if x > T::zero() { g } else { T::zero() })
        .collect();
    Tensor::new(data, grad.shape().to_vec())
}
