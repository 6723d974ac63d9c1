// src/tensor/create.rs

use crate::error::RevGradError;
use crate::tensor::Tensor;
use num_traits::Float;

/// Creates a new tensor filled with zeros with the specified shape.
pub fn zeros<T: Float>(shape: &[usize]) -> Result<Tensor<T>, RevGradError> {
    full(shape, T::zero())
}

/// Creates a new tensor filled with ones with the specified shape.
pub fn ones<T: Float>(shape: &[usize]) -> Result<Tensor<T>, RevGradError> {
    full(shape, T::one())
}

/// Creates a new tensor filled with a specific value with the specified shape.
pub fn full<T: Float>(shape: &[usize], value: T) -> Result<Tensor<T>, RevGradError> {
    let numel = shape.iter().product();
    Tensor::new(vec![value; numel], shape.to_vec())
}

/// Creates a new tensor from flattened row-major data and a shape.
pub fn from_vec<T: Float>(data: Vec<T>, shape: Vec<usize>) -> Result<Tensor<T>, RevGradError> {
    Tensor::new(data, shape)
}

/// Creates a zero tensor with the same shape as the input tensor.
pub fn zeros_like<T: Float>(tensor: &Tensor<T>) -> Result<Tensor<T>, RevGradError> {
    zeros(tensor.shape())
}

/// Creates a ones tensor with the same shape as the input tensor.
pub fn ones_like<T: Float>(tensor: &Tensor<T>) -> Result<Tensor<T>, RevGradError> {
    ones(tensor.shape())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_ones_full() {
        let z = zeros::<f32>(&[2, 2]).unwrap();
        assert_eq!(z.data(), &[0.0, 0.0, 0.0, 0.0]);

        let o = ones::<f32>(&[3]).unwrap();
        assert_eq!(o.data(), &[1.0, 1.0, 1.0]);

        let f = full::<f64>(&[2], -0.01).unwrap();
        assert_eq!(f.data(), &[-0.01, -0.01]);
    }

    #[test]
    fn test_like_helpers() {
        let t = from_vec(vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
        let z = zeros_like(&t).unwrap();
        assert_eq!(z.shape(), t.shape());
        assert_eq!(z.data(), &[0.0; 6]);
        let o = ones_like(&t).unwrap();
        assert_eq!(o.shape(), t.shape());
        assert_eq!(o.data(), &[1.0; 6]);
    }
}
