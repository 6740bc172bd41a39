use super::features::FeatureBatch;
use crate::error::{MlMathError, Result};
use crate::linalg::dot_product;
use crate::preprocessing::ScalerParams;
use crate::Vector;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// A trained model that maps a feature batch to one value per row.
pub trait Regressor {
    fn predict(&self, features: &FeatureBatch) -> Result<Vector>;

    /// Scaling statistics captured when the model was trained, if persisted.
    fn training_stats(&self) -> Option<&ScalerParams> {
        None
    }
}

/// Linear model persisted as JSON alongside its training-time feature order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler: Option<ScalerParams>,
}

impl LinearModel {
    pub fn new(feature_names: Vec<String>, coefficients: Vec<f64>, intercept: f64) -> Result<Self> {
        let model = Self {
            feature_names,
            coefficients,
            intercept,
            scaler: None,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn with_scaler(mut self, scaler: ScalerParams) -> Result<Self> {
        if scaler.mean.len() != self.coefficients.len() || scaler.std.len() != self.coefficients.len() {
            return Err(MlMathError::dimension_mismatch(
                format!("{} scaler entries", self.coefficients.len()),
                format!("{} means and {} stds", scaler.mean.len(), scaler.std.len()),
            ));
        }
        self.scaler = Some(scaler);
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.feature_names.len() != self.coefficients.len() {
            return Err(MlMathError::InvalidInput(format!(
                "model has {} feature names but {} coefficients",
                self.feature_names.len(),
                self.coefficients.len()
            )));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(json)
            .map_err(|e| MlMathError::InvalidInput(format!("cannot parse model: {e}")))?;
        model.validate()?;
        Ok(model)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| MlMathError::from_open(e, path))?;

        let model: Self = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            MlMathError::InvalidInput(format!("cannot parse model '{}': {e}", path.display()))
        })?;
        model.validate()?;

        tracing::info!(path = %path.display(), features = model.feature_names.len(), "loaded model");
        Ok(model)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|e| MlMathError::Io(std::io::Error::other(e)))?;
        writer.flush()?;
        Ok(())
    }
}

impl Regressor for LinearModel {
    fn predict(&self, features: &FeatureBatch) -> Result<Vector> {
        if features.names != self.feature_names {
            return Err(MlMathError::PredictionFailure(format!(
                "feature mismatch between model and batch: model expects {:?} ({} features), batch has {:?} ({} features)",
                self.feature_names,
                self.feature_names.len(),
                features.names,
                features.names.len()
            )));
        }

        let coefficients = Vector::from(self.coefficients.clone());
        let predictions = features
            .values
            .rows()
            .into_iter()
            .map(|row| dot_product(&row, &coefficients.view()).map(|v| v + self.intercept))
            .collect::<Result<Vec<f64>>>()?;

        Ok(Vector::from(predictions))
    }

    fn training_stats(&self) -> Option<&ScalerParams> {
        self.scaler.as_ref()
    }
}

/// Loads the JSON model at `path`.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<LinearModel> {
    LinearModel::load(path)
}
