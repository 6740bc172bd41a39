pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod error;
pub mod housing;
pub mod linalg;
pub mod logging;
pub mod metrics;
pub mod preprocessing;
pub mod probability;
pub mod prompt;

pub use error::{MlMathError, Result};
pub use linalg::{add_vectors, are_orthogonal, dot_product, matrix_multiply};
pub use preprocessing::StandardScaler;
pub use probability::{conditional_probability, simulate_dice_rolls, SpamCounts};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn test_helpers_agree_with_ndarray() {
        let a: Matrix = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let b: Matrix = array![[0.5, -1.0, 2.0], [1.5, 0.0, -2.0]];
        assert_eq!(matrix_multiply(&a, &b).unwrap(), a.dot(&b));

        let u: Vector = array![1.0, -2.0, 0.5];
        let v: Vector = array![4.0, 1.0, 2.0];
        assert_eq!(dot_product(&u.view(), &v.view()).unwrap(), u.dot(&v));
        assert_eq!(add_vectors(&u.view(), &v.view()).unwrap(), &u + &v);
    }
}
