//! Dense tensor backend.
//!
//! `Tensor<T>` is an owned, contiguous, row-major multi-dimensional container.
//! It is deliberately small: the autograd engine in [`crate::autograd`] only
//! needs elementwise addition, 2-D matrix multiplication, axis transposition,
//! ReLU forward/masking, element access and fill. Those operations live in
//! [`crate::ops`]; this module holds the container itself plus creation
//! helpers and stride math.

use crate::error::RevGradError;

pub mod create;
pub mod utils;

pub use create::{from_vec, full, ones, ones_like, zeros, zeros_like};

use utils::calculate_strides;

/// An owned multi-dimensional array with row-major contiguous storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T> {
    data: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<T: Copy> Tensor<T> {
    /// Creates a new tensor from flattened row-major data and a shape.
    ///
    /// # Errors
    /// Returns [`RevGradError::TensorCreationError`] if the data length does
    /// not match the number of elements implied by `shape`.
    pub fn new(data: Vec<T>, shape: Vec<usize>) -> Result<Self, RevGradError> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(RevGradError::TensorCreationError {
                data_len: data.len(),
                shape,
            });
        }
        let strides = calculate_strides(&shape);
        Ok(Tensor {
            data,
            shape,
            strides,
        })
    }

    /// The tensor's dimension sizes.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The row-major strides matching `shape`.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// The flattened row-major data.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns the element at the given multi-dimensional index.
    pub fn get(&self, index: &[usize]) -> Result<T, RevGradError> {
        let offset = self.offset(index)?;
        Ok(self.data[offset])
    }

    /// Overwrites the element at the given multi-dimensional index.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<(), RevGradError> {
        let offset = self.offset(index)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.iter_mut().for_each(|x| *x = value);
    }

    /// Linear offset into the data buffer for a multi-dimensional index.
    fn offset(&self, index: &[usize]) -> Result<usize, RevGradError> {
        if index.len() != self.shape.len() {
            return Err(RevGradError::IndexOutOfBounds {
                index: index.to_vec(),
                shape: self.shape.clone(),
            });
        }
        let mut offset = 0;
        for (dim, (&i, &size)) in index.iter().zip(&self.shape).enumerate() {
            if i >= size {
                return Err(RevGradError::IndexOutOfBounds {
                    index: index.to_vec(),
                    shape: self.shape.clone(),
                });
            }
            offset += i * self.strides[dim];
        }
        Ok(offset)
    }
}
