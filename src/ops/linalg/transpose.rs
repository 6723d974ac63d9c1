// src/ops/linalg/transpose.rs

use crate::error::RevGradError;
use crate::tensor::utils::{calculate_strides, index_to_coord};
use crate::tensor::Tensor;

/// Swaps two axes of a tensor, returning a new materialized tensor.
///
/// For a 2-D tensor, `transpose(t, 0, 1)` is the standard matrix transpose.
/// The input is never modified.
///
/// # Errors
/// Returns [`RevGradError::InvalidAxis`] if either axis is out of range for
/// the tensor's rank.
pub fn transpose<T: Copy>(
    t: &Tensor<T>,
    dim0: usize,
    dim1: usize,
) -> Result<Tensor<T>, RevGradError> {
    let rank = t.rank();
    for axis in [dim0, dim1] {
        if axis >= rank {
            return Err(RevGradError::InvalidAxis { axis, rank });
        }
    }

    let mut new_shape = t.shape().to_vec();
    new_shape.swap(dim0, dim1);
    let new_strides = calculate_strides(&new_shape);

    let numel = t.numel();
    let mut data = Vec::with_capacity(numel);
    let input_data = t.data();
    let input_strides = t.strides();

    for i in 0..numel {
        // Output coordinate, mapped back to the input by undoing the swap.
        let mut coord = index_to_coord(i, &new_strides);
        coord.swap(dim0, dim1);
        let offset: usize = coord
            .iter()
            .zip(input_strides)
            .map(|(&c, &s)| c * s)
            .sum();
        data.push(input_data[offset]);
    }

    Tensor::new(data, new_shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_2d() {
        let t = Tensor::new(vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
        let result = transpose(&t, 0, 1).unwrap();
        assert_eq!(result.shape(), &[3, 2]);
        assert_eq!(result.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_transpose_involution() {
        let t = Tensor::new(vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0], vec![3, 2]).unwrap();
        let back = transpose(&transpose(&t, 0, 1).unwrap(), 0, 1).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_transpose_3d_axes() {
        // Swap the first and last axes of a [2, 1, 3] tensor.
        let t = Tensor::new(vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 1, 3]).unwrap();
        let result = transpose(&t, 0, 2).unwrap();
        assert_eq!(result.shape(), &[3, 1, 2]);
        assert_eq!(result.get(&[0, 0, 0]).unwrap(), 1.0);
        assert_eq!(result.get(&[0, 0, 1]).unwrap(), 4.0);
        assert_eq!(result.get(&[2, 0, 1]).unwrap(), 6.0);
    }

    #[test]
    fn test_transpose_invalid_axis() {
        let t = Tensor::new(vec![1.0_f32, 2.0], vec![2]).unwrap();
        assert_eq!(
            transpose(&t, 0, 1).err().unwrap(),
            RevGradError::InvalidAxis { axis: 1, rank: 1 }
        );
    }
}
