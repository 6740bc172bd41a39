use super::frame::{Column, ColumnData, HousingFrame, OCEAN_PROXIMITY};
use super::record::OceanProximity;
use crate::error::{MlMathError, Result};
use crate::metrics::median;
use crate::preprocessing::{ScalerParams, StandardScaler};
use crate::Matrix;

/// Added to every ratio denominator.
pub const RATIO_EPSILON: f64 = 1e-8;

/// Knobs for turning a raw batch into model features.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    pub epsilon: f64,
    /// Scale with the model's training-time statistics instead of refitting on
    /// the batch being evaluated.
    pub reuse_training_stats: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            epsilon: RATIO_EPSILON,
            reuse_training_stats: false,
        }
    }
}

/// Named feature columns ready for a model, one row per input record.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureBatch {
    pub names: Vec<String>,
    pub values: Matrix,
}

impl FeatureBatch {
    pub fn n_samples(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.values.ncols()
    }

    pub fn column(&self, name: &str) -> Option<ndarray::ArrayView1<'_, f64>> {
        let idx = self.names.iter().position(|n| n == name)?;
        Some(self.values.column(idx))
    }
}

/// (name, numerator, denominator) of each derived ratio.
const RATIOS: [(&str, &str, &str); 4] = [
    ("rooms_per_household", "total_rooms", "households"),
    ("population_per_household", "population", "households"),
    ("bedrooms_per_room", "total_bedrooms", "total_rooms"),
    ("income_per_room", "median_income", "total_rooms"),
];

/// Replaces every missing numeric cell with its column's median.
pub fn fill_missing_with_median(frame: &HousingFrame) -> Result<HousingFrame> {
    let mut filled = 0usize;
    let columns = frame
        .columns()
        .iter()
        .map(|column| {
            let data = match &column.data {
                ColumnData::Numeric(values) if values.iter().any(Option::is_none) => {
                    let present: Vec<f64> = values.iter().flatten().copied().collect();
                    let fill = median(&present).ok_or_else(|| {
                        MlMathError::InvalidInput(format!(
                            "column '{}' has no values to take a median from",
                            column.name
                        ))
                    })?;
                    filled += values.len() - present.len();
                    ColumnData::Numeric(values.iter().map(|v| Some(v.unwrap_or(fill))).collect())
                }
                other => other.clone(),
            };
            Ok(Column {
                name: column.name.clone(),
                data,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if filled > 0 {
        tracing::warn!(filled, "filled missing values with column medians");
    }
    HousingFrame::new(columns)
}

/// Indicator columns for every category except the `<1H OCEAN` reference.
///
/// Missing labels encode as all zeros.
pub fn one_hot_ocean_proximity(labels: &[Option<String>]) -> Result<Vec<(String, Vec<f64>)>> {
    let categories = labels
        .iter()
        .map(|label| label.as_deref().map(str::parse::<OceanProximity>).transpose())
        .collect::<Result<Vec<_>>>()?;

    Ok(OceanProximity::ALL[1..]
        .iter()
        .map(|&category| {
            let indicator = categories
                .iter()
                .map(|c| if *c == Some(category) { 1.0 } else { 0.0 })
                .collect();
            (format!("{OCEAN_PROXIMITY}_{}", category.label()), indicator)
        })
        .collect())
}

/// Fills, encodes, derives and standardizes `frame` in that order.
///
/// `training_stats` is only consulted when `config.reuse_training_stats` is set.
pub fn prepare_features(
    frame: &HousingFrame,
    config: &PipelineConfig,
    training_stats: Option<&ScalerParams>,
) -> Result<FeatureBatch> {
    if frame.n_rows() == 0 {
        return Err(MlMathError::InvalidInput("batch has no rows".to_string()));
    }

    let frame = fill_missing_with_median(frame)?;

    let mut columns: Vec<(String, Vec<f64>)> = frame
        .columns()
        .iter()
        .filter_map(|column| match &column.data {
            ColumnData::Numeric(values) => {
                Some((column.name.clone(), values.iter().map(|v| v.unwrap_or(f64::NAN)).collect()))
            }
            ColumnData::Text(_) => None,
        })
        .collect();

    if let Some(labels) = frame.text(OCEAN_PROXIMITY) {
        tracing::debug!("one-hot encoding {OCEAN_PROXIMITY}");
        columns.extend(one_hot_ocean_proximity(labels)?);
    }

    for (name, numerator, denominator) in RATIOS {
        let (Some(num), Some(den)) = (frame.numeric(numerator), frame.numeric(denominator)) else {
            continue;
        };
        let ratio = num
            .iter()
            .zip(den)
            .map(|(n, d)| n.unwrap_or(f64::NAN) / (d.unwrap_or(f64::NAN) + config.epsilon))
            .collect();
        tracing::debug!(feature = name, "derived ratio feature");
        columns.push((name.to_string(), ratio));
    }

    if columns.is_empty() {
        return Err(MlMathError::InvalidInput("batch has no numeric columns".to_string()));
    }

    let n_rows = frame.n_rows();
    let raw = Matrix::from_shape_fn((n_rows, columns.len()), |(i, j)| columns[j].1[i]);

    let values = if config.reuse_training_stats {
        let params = training_stats.ok_or_else(|| {
            MlMathError::InvalidInput("model carries no training-time scaling statistics".to_string())
        })?;
        StandardScaler::from_params(params)?.transform(&raw)?
    } else {
        tracing::warn!("standardizing with statistics refit on the evaluation batch");
        StandardScaler::new().fit_transform(&raw)?
    };

    Ok(FeatureBatch {
        names: columns.into_iter().map(|(name, _)| name).collect(),
        values,
    })
}
