use crate::error::{MlMathError, Result};
use crate::{Matrix, Vector};
use serde::{Deserialize, Serialize};

/// Per-column statistics a scaler was fitted with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

#[derive(Clone, Debug, Default)]
pub struct StandardScaler {
    mean: Option<Vector>,
    std: Option<Vector>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self {
            mean: None,
            std: None,
        }
    }

    /// Scaler preloaded with statistics persisted at training time.
    pub fn from_params(params: &ScalerParams) -> Result<Self> {
        if params.mean.len() != params.std.len() {
            return Err(MlMathError::dimension_mismatch(
                format!("{} standard deviations", params.mean.len()),
                params.std.len(),
            ));
        }

        Ok(Self {
            mean: Some(Vector::from(params.mean.clone())),
            std: Some(Vector::from(params.std.clone())),
        })
    }

    pub fn fit(&mut self, data: &Matrix) -> Result<()> {
        let mut mean = data
            .mean_axis(ndarray::Axis(0))
            .ok_or_else(|| MlMathError::InvalidInput("cannot fit scaler on an empty batch".to_string()))?;
        let mut std = data.std_axis(ndarray::Axis(0), 0.0);

        // Averaging identical floats can drift by an ulp; pin constant columns exactly.
        for (j, column) in data.axis_iter(ndarray::Axis(1)).enumerate() {
            let first = column[0];
            if column.iter().all(|&v| v == first) {
                mean[j] = first;
                std[j] = 0.0;
            }
        }

        self.mean = Some(mean);
        self.std = Some(std);
        Ok(())
    }

    /// Centers and scales each column. Columns with zero spread are only centered.
    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        let (mean, std) = match (self.mean.as_ref(), self.std.as_ref()) {
            (Some(mean), Some(std)) => (mean, std),
            _ => {
                return Err(MlMathError::InvalidInput(
                    "scaler not fitted, call fit() first".to_string(),
                ));
            }
        };

        if data.ncols() != mean.len() {
            return Err(MlMathError::dimension_mismatch(
                format!("{} columns", mean.len()),
                data.ncols(),
            ));
        }

        let scale = std.mapv(|s| if s > 0.0 { s } else { 1.0 });
        let mut result = data.clone();
        for mut row in result.axis_iter_mut(ndarray::Axis(0)) {
            row -= mean;
            row /= &scale;
        }

        Ok(result)
    }

    pub fn fit_transform(&mut self, data: &Matrix) -> Result<Matrix> {
        self.fit(data)?;
        self.transform(data)
    }

    pub fn params(&self) -> Option<ScalerParams> {
        Some(ScalerParams {
            mean: self.mean.as_ref()?.to_vec(),
            std: self.std.as_ref()?.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_standard_scaler() {
        let data = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let mut scaler = StandardScaler::new();

        let scaled = scaler.fit_transform(&data).unwrap();
        assert_eq!(scaled.shape(), data.shape());

        let means = scaled.mean_axis(ndarray::Axis(0)).unwrap();
        let stds = scaled.std_axis(ndarray::Axis(0), 0.0);
        for (m, s) in means.iter().zip(stds.iter()) {
            assert!(m.abs() < 1e-10);
            assert!((s - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_constant_column_scales_to_zero() {
        let data = array![[7.0, 1.0], [7.0, 2.0], [7.0, 3.0]];
        let scaled = StandardScaler::new().fit_transform(&data).unwrap();

        for value in scaled.column(0) {
            assert_eq!(*value, 0.0);
        }

        let repeated = array![[0.1], [0.1], [0.1]];
        let scaled = StandardScaler::new().fit_transform(&repeated).unwrap();
        assert!(scaled.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_transform_without_fit() {
        let data = array![[1.0]];
        assert!(StandardScaler::new().transform(&data).is_err());
    }

    #[test]
    fn test_from_params_reuses_statistics() {
        let params = ScalerParams {
            mean: vec![10.0, 0.0],
            std: vec![2.0, 1.0],
        };
        let scaler = StandardScaler::from_params(&params).unwrap();

        let scaled = scaler.transform(&array![[12.0, 3.0]]).unwrap();
        assert_eq!(scaled, array![[1.0, 3.0]]);
        assert_eq!(scaler.params(), Some(params));
    }

    #[test]
    fn test_column_count_mismatch() {
        let mut scaler = StandardScaler::new();
        scaler.fit(&array![[1.0, 2.0], [3.0, 4.0]]).unwrap();

        assert!(matches!(
            scaler.transform(&array![[1.0, 2.0, 3.0]]),
            Err(MlMathError::DimensionMismatch { .. })
        ));
    }
}
