use super::features::{fill_missing_with_median, prepare_features, PipelineConfig};
use super::frame::{HousingFrame, OCEAN_PROXIMITY};
use super::model::Regressor;
use crate::error::{MlMathError, Result};
use crate::metrics::PredictionSummary;
use crate::Vector;
use std::path::Path;

/// Input columns copied next to each prediction, when the batch has them.
const CONTEXT_NUMERIC: [&str; 3] = ["longitude", "latitude", "median_income"];

/// Predictions for one batch plus the context needed to report them.
#[derive(Clone, Debug)]
pub struct Evaluation {
    pub feature_names: Vec<String>,
    pub predictions: Vector,
    pub summary: PredictionSummary,
    context: Vec<(String, Vec<String>)>,
}

/// Runs the feature pipeline over `frame` and predicts with `model`.
pub fn evaluate<M: Regressor + ?Sized>(
    model: &M,
    frame: &HousingFrame,
    config: &PipelineConfig,
) -> Result<Evaluation> {
    let batch = prepare_features(frame, config, model.training_stats())?;
    tracing::debug!(rows = batch.n_samples(), features = batch.n_features(), "prepared features");

    let predictions = model.predict(&batch)?;
    if predictions.len() != batch.n_samples() {
        return Err(MlMathError::PredictionFailure(format!(
            "model returned {} predictions for {} rows",
            predictions.len(),
            batch.n_samples()
        )));
    }
    tracing::info!(count = predictions.len(), "predictions made");

    let filled = fill_missing_with_median(frame)?;
    let mut context = Vec::new();
    for name in CONTEXT_NUMERIC {
        if let Some(values) = filled.numeric(name) {
            let cells = values.iter().map(|v| v.map(|v| v.to_string()).unwrap_or_default());
            context.push((name.to_string(), cells.collect()));
        }
    }
    if let Some(labels) = filled.text(OCEAN_PROXIMITY) {
        let cells = labels.iter().map(|l| l.clone().unwrap_or_default());
        context.push((OCEAN_PROXIMITY.to_string(), cells.collect()));
    }

    Ok(Evaluation {
        feature_names: batch.names,
        summary: PredictionSummary::from_predictions(&predictions)?,
        predictions,
        context,
    })
}

pub fn format_prediction(value: f64) -> String {
    format!("${value:.2} (standardized)")
}

impl Evaluation {
    /// Every result column as (header, cells), context first.
    fn columns(&self) -> Vec<(String, Vec<String>)> {
        let mut columns = self.context.clone();
        columns.push((
            "predicted_house_value".to_string(),
            self.predictions.iter().map(|p| p.to_string()).collect(),
        ));
        columns.push((
            "predicted_house_value_formatted".to_string(),
            self.predictions.iter().map(|&p| format_prediction(p)).collect(),
        ));
        columns
    }

    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let columns = self.columns();
        let mut writer = csv::Writer::from_path(path)?;

        writer.write_record(columns.iter().map(|(name, _)| name.as_str()))?;
        for i in 0..self.predictions.len() {
            writer.write_record(columns.iter().map(|(_, cells)| cells[i].as_str()))?;
        }
        writer.flush()?;

        tracing::info!(path = %path.display(), rows = self.predictions.len(), "saved results");
        Ok(())
    }

    /// Plain-text table of the first `n` rows, prefixed with the row index.
    pub fn render_top(&self, n: usize) -> String {
        let columns = self.columns();
        let rows = n.min(self.predictions.len());
        let index_width = rows.saturating_sub(1).to_string().len();

        let widths: Vec<usize> = columns
            .iter()
            .map(|(name, cells)| {
                cells[..rows]
                    .iter()
                    .map(String::len)
                    .chain([name.len()])
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = " ".repeat(index_width);
        for ((name, _), width) in columns.iter().zip(widths.iter().copied()) {
            out.push_str(&format!("  {name:>width$}"));
        }
        for i in 0..rows {
            out.push('\n');
            out.push_str(&format!("{i:>index_width$}"));
            for ((_, cells), width) in columns.iter().zip(widths.iter().copied()) {
                out.push_str(&format!("  {:>width$}", cells[i]));
            }
        }
        out
    }
}
