//! Stride and index arithmetic shared by the tensor backend and `ops`.

/// Calculates the row-major strides for a given shape.
///
/// Strides represent the number of elements to skip in the flattened data
/// array to move one step along each dimension.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return vec![];
    }
    let rank = shape.len();
    let mut strides = vec![1; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Converts a linear index into multi-dimensional coordinates, given the
/// row-major strides of the target shape.
///
/// Only valid for strides produced by [`calculate_strides`] on a shape with
/// no zero-sized dimensions (a zero dimension means there are no elements to
/// index in the first place).
pub fn index_to_coord(index: usize, strides: &[usize]) -> Vec<usize> {
    let mut coord = vec![0; strides.len()];
    let mut remaining = index;
    for (dim, &stride) in strides.iter().enumerate() {
        coord[dim] = remaining / stride;
        remaining %= stride;
    }
    coord
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_strides_simple() {
        assert_eq!(calculate_strides(&[2, 3]), vec![3, 1]);
        assert_eq!(calculate_strides(&[4, 5, 6]), vec![30, 6, 1]);
        assert_eq!(calculate_strides(&[5]), vec![1]);
        assert_eq!(calculate_strides(&[1, 5]), vec![5, 1]);
        assert_eq!(calculate_strides(&[5, 1]), vec![1, 1]);
    }

    #[test]
    fn test_calculate_strides_empty() {
        assert_eq!(calculate_strides(&[]), Vec::<usize>::new());
    }

    #[test]
    fn test_index_to_coord_roundtrip() {
        let shape = [2, 3, 4];
        let strides = calculate_strides(&shape);
        assert_eq!(index_to_coord(0, &strides), vec![0, 0, 0]);
        assert_eq!(index_to_coord(5, &strides), vec![0, 1, 1]);
        assert_eq!(index_to_coord(23, &strides), vec![1, 2, 3]);
    }
}
