// src/ops/arithmetic/add.rs

use crate::error::RevGradError;
use crate::tensor::Tensor;
use num_traits::Float;

/// Performs strict element-wise addition of two same-shape tensors.
///
/// No broadcasting: shapes must match exactly.
///
/// # Errors
/// Returns [`RevGradError::ShapeMismatch`] if the shapes differ.
pub fn add<T: Float>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, RevGradError> {
    if a.shape() != b.shape() {
        return Err(RevGradError::ShapeMismatch {
            expected: a.shape().to_vec(),
            actual: b.shape().to_vec(),
            operation: "add".to_string(),
        });
    }
    let data = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(&x, &y)| x + y)
        .collect();
    Tensor::new(data, a.shape().to_vec())
}

// The backward rule for addition is the identity: the incoming gradient is
// contributed unchanged to each operand. There is nothing to compute, so the
// executor clones the upstream gradient directly instead of calling a
// dedicated `add_backward`.

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_tensor<T: Float>(data: Vec<T>, shape: Vec<usize>) -> Tensor<T> {
        Tensor::new(data, shape).expect("Test tensor creation failed")
    }

    #[test]
    fn test_add_tensors_ok() {
        let t1 = create_test_tensor(vec![1.0_f32, 2.0, 3.0, 4.0], vec![2, 2]);
        let t2 = create_test_tensor(vec![5.0_f32, 6.0, 7.0, 8.0], vec![2, 2]);

        let result = add(&t1, &t2).unwrap();
        assert_eq!(result.data(), &[6.0, 8.0, 10.0, 12.0]);
        assert_eq!(result.shape(), &[2, 2]);
    }

    #[test]
    fn test_add_tensors_shape_mismatch() {
        let t1 = create_test_tensor(vec![1.0_f32, 2.0, 3.0, 4.0], vec![2, 2]);
        let t2 = create_test_tensor(vec![5.0_f32, 6.0, 7.0, 8.0, 9.0, 10.0], vec![2, 3]);

        let result = add(&t1, &t2);
        match result.err().unwrap() {
            RevGradError::ShapeMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, vec![2, 2]);
                assert_eq!(actual, vec![2, 3]);
            }
            other => panic!("Incorrect error type returned: {other:?}"),
        }
    }

    #[test]
    fn test_add_no_broadcasting() {
        // [2, 2] + [2] would broadcast in numpy; here it is an error.
        let t1 = create_test_tensor(vec![1.0_f64, 2.0, 3.0, 4.0], vec![2, 2]);
        let t2 = create_test_tensor(vec![1.0_f64, 1.0], vec![2]);
        assert!(add(&t1, &t2).is_err());
    }
}
