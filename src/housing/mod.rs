//! California housing test-data generation and model evaluation.
//!
//! This module provides:
//! - `generate_records` / `write_test_data`: seeded synthetic census blocks
//! - `HousingFrame`: a column-oriented batch read back from CSV
//! - `prepare_features`: median fill, one-hot encoding, ratio features, scaling
//! - `Regressor` / `LinearModel`: the trained model contract and its JSON form
//! - `evaluate`: predictions, summary statistics and a results file
//!
//! # Examples
//!
//! ```rust
//! use mlmath::housing::{evaluate, generate_records, HousingFrame, LinearModel, PipelineConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let records = generate_records(20, &mut rng).unwrap();
//! let frame = HousingFrame::from_records(&records);
//!
//! let batch = mlmath::housing::prepare_features(&frame, &PipelineConfig::default(), None).unwrap();
//! let model = LinearModel::new(batch.names.clone(), vec![0.1; batch.n_features()], 0.0).unwrap();
//!
//! let evaluation = evaluate(&model, &frame, &PipelineConfig::default()).unwrap();
//! println!("{}", evaluation.summary);
//! ```

mod evaluate;
mod features;
mod frame;
mod generator;
mod model;
mod record;

pub use evaluate::{evaluate, format_prediction, Evaluation};
pub use features::{
    fill_missing_with_median, one_hot_ocean_proximity, prepare_features, FeatureBatch, PipelineConfig,
    RATIO_EPSILON,
};
pub use frame::{Column, ColumnData, HousingFrame, OCEAN_PROXIMITY};
pub use generator::{generate_records, write_test_data, GenerationSummary, DEFAULT_SAMPLES, DEFAULT_SEED};
pub use model::{load_model, LinearModel, Regressor};
pub use record::{HousingRecord, OceanProximity};
