use crate::Vector;
use crate::error::{MlMathError, Result};
use std::fmt;

/// Median of the values, averaging the middle pair for even lengths.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Descriptive statistics over a batch of predictions.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation (no degrees-of-freedom correction).
    pub std: f64,
}

impl PredictionSummary {
    pub fn from_predictions(predictions: &Vector) -> Result<Self> {
        let mean = predictions
            .mean()
            .ok_or_else(|| MlMathError::InvalidInput("no predictions to summarize".to_string()))?;

        let min = predictions.iter().copied().fold(f64::INFINITY, f64::min);
        let max = predictions.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            count: predictions.len(),
            mean,
            min,
            max,
            std: predictions.std(0.0),
        })
    }
}

impl fmt::Display for PredictionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total predictions made: {}", self.count)?;
        writeln!(f, "Average predicted value: {:.4} (standardized)", self.mean)?;
        writeln!(f, "Min predicted value: {:.4} (standardized)", self.min)?;
        writeln!(f, "Max predicted value: {:.4} (standardized)", self.max)?;
        write!(f, "Standard deviation: {:.4}", self.std)
    }
}
