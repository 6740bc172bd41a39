//! Vector and matrix helpers shared by every unit.
//!
//! # Examples
//!
//! ```rust
//! use mlmath::{dot_product, matrix_multiply};
//! use ndarray::array;
//!
//! let a = array![1.0, 2.0, 3.0];
//! let b = array![4.0, 5.0, 6.0];
//! assert_eq!(dot_product(&a.view(), &b.view()).unwrap(), 32.0);
//!
//! let x = array![[1.0, 2.0], [3.0, 4.0]];
//! let y = array![[5.0, 6.0], [7.0, 8.0]];
//! assert_eq!(matrix_multiply(&x, &y).unwrap(), array![[19.0, 22.0], [43.0, 50.0]]);
//! ```

use crate::error::{MlMathError, Result};
use crate::{ArrayView1, Matrix, Vector};

const ORTHOGONALITY_TOLERANCE: f64 = 1e-12;

/// Sum of elementwise products of two equal-length vectors.
pub fn dot_product(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> Result<f64> {
    if a.len() != b.len() {
        return Err(MlMathError::dimension_mismatch(
            format!("vectors of equal length ({})", a.len()),
            format!("length {}", b.len()),
        ));
    }

    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// Standard matrix product `a · b`, shape `nrows(a) × ncols(b)`.
pub fn matrix_multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.ncols() != b.nrows() {
        return Err(MlMathError::dimension_mismatch(
            format!("{} rows in right operand (columns of left)", a.ncols()),
            format!("{} rows", b.nrows()),
        ));
    }

    let mut result = Matrix::zeros((a.nrows(), b.ncols()));
    for i in 0..a.nrows() {
        for j in 0..b.ncols() {
            let mut acc = 0.0;
            for k in 0..b.nrows() {
                acc += a[(i, k)] * b[(k, j)];
            }
            result[(i, j)] = acc;
        }
    }

    Ok(result)
}

pub fn add_vectors(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> Result<Vector> {
    if a.len() != b.len() {
        return Err(MlMathError::dimension_mismatch(
            format!("vectors of equal length ({})", a.len()),
            format!("length {}", b.len()),
        ));
    }

    Ok(a + b)
}

/// Two vectors are orthogonal when their dot product vanishes.
pub fn are_orthogonal(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> Result<bool> {
    Ok(dot_product(a, b)?.abs() < ORTHOGONALITY_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_dot_product() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![4.0, 5.0, 6.0];

        let result = dot_product(&a.view(), &b.view()).unwrap();
        assert!((result - 32.0).abs() < 1e-10);
    }

    #[test]
    fn test_dot_product_length_mismatch() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![4.0, 5.0];

        let err = dot_product(&a.view(), &b.view()).unwrap_err();
        assert!(matches!(err, MlMathError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_dot_product_empty_vectors() {
        let a = Vector::zeros(0);
        assert_eq!(dot_product(&a.view(), &a.view()).unwrap(), 0.0);
    }

    #[test]
    fn test_matrix_multiply() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[5.0, 6.0], [7.0, 8.0]];

        let product = matrix_multiply(&a, &b).unwrap();
        assert_eq!(product, array![[19.0, 22.0], [43.0, 50.0]]);
    }

    #[test]
    fn test_matrix_multiply_rectangular() {
        let a = array![[1.0, 0.0, 2.0], [0.0, 1.0, 1.0]];
        let b = array![[1.0], [2.0], [3.0]];

        let product = matrix_multiply(&a, &b).unwrap();
        assert_eq!(product.shape(), &[2, 1]);
        assert_eq!(product, array![[7.0], [5.0]]);
    }

    #[test]
    fn test_matrix_multiply_matches_ndarray() {
        let a = array![[0.5, -1.0, 2.0], [3.0, 0.25, -4.0]];
        let b = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];

        let product = matrix_multiply(&a, &b).unwrap();
        let expected = a.dot(&b);
        for (p, e) in product.iter().zip(expected.iter()) {
            assert!((p - e).abs() < 1e-10);
        }
    }

    #[test]
    fn test_matrix_multiply_dimension_mismatch() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[1.0, 2.0, 3.0]];

        assert!(matches!(
            matrix_multiply(&a, &b),
            Err(MlMathError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_add_vectors() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![4.0, 5.0, 6.0];

        assert_eq!(add_vectors(&a.view(), &b.view()).unwrap(), array![5.0, 7.0, 9.0]);
        assert!(add_vectors(&a.view(), &array![1.0].view()).is_err());
    }

    #[test]
    fn test_are_orthogonal() {
        let x = array![1.0, 0.0];
        let y = array![0.0, 3.0];
        let v1 = array![1.0, 2.0, 3.0];
        let v2 = array![4.0, 5.0, 6.0];

        assert!(are_orthogonal(&x.view(), &y.view()).unwrap());
        assert!(!are_orthogonal(&v1.view(), &v2.view()).unwrap());
    }
}
