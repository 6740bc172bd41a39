use super::record::{HousingRecord, OceanProximity};
use crate::error::{MlMathError, Result};
use ndarray::Array1;
use ndarray_rand::RandomExt;
use rand::Rng;
use rand::distributions::{Uniform, WeightedIndex};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

pub const DEFAULT_SAMPLES: usize = 50;
pub const DEFAULT_SEED: u64 = 42;

const LONGITUDE_RANGE: (f64, f64) = (-124.35, -114.31);
const LATITUDE_RANGE: (f64, f64) = (32.54, 41.95);
const AGE_RANGE: (u32, u32) = (1, 53);
const ROOMS_RANGE: (u32, u32) = (100, 8000);
const POPULATION_RANGE: (u32, u32) = (50, 4000);
const INCOME_RANGE: (f64, f64) = (0.5, 15.0);
const PEOPLE_PER_HOUSEHOLD: (f64, f64) = (2.0, 4.5);
const BEDROOM_RATIO: (f64, f64) = (0.15, 0.35);

const PROXIMITY_DRAW: [(OceanProximity, f64); 5] = [
    (OceanProximity::Inland, 0.4),
    (OceanProximity::NearBay, 0.2),
    (OceanProximity::LessThanOneHour, 0.2),
    (OceanProximity::Island, 0.05),
    (OceanProximity::NearOcean, 0.15),
];

/// Draws `n` synthetic California census blocks from `rng`.
///
/// Households and bedrooms are derived from population and rooms, truncated to
/// whole numbers and clamped to `[1, population]` and `[1, total_rooms]`.
pub fn generate_records<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<HousingRecord>> {
    if n == 0 {
        return Err(MlMathError::InvalidArgument(
            "number of samples must be positive".to_string(),
        ));
    }

    let longitude = Array1::random_using(n, Uniform::new(LONGITUDE_RANGE.0, LONGITUDE_RANGE.1), rng);
    let latitude = Array1::random_using(n, Uniform::new(LATITUDE_RANGE.0, LATITUDE_RANGE.1), rng);
    let age = Array1::random_using(n, Uniform::new(AGE_RANGE.0, AGE_RANGE.1), rng);
    let rooms = Array1::random_using(n, Uniform::new(ROOMS_RANGE.0, ROOMS_RANGE.1), rng);
    let population = Array1::random_using(n, Uniform::new(POPULATION_RANGE.0, POPULATION_RANGE.1), rng);
    let income = Array1::random_using(n, Uniform::new(INCOME_RANGE.0, INCOME_RANGE.1), rng);

    let weights = WeightedIndex::new(PROXIMITY_DRAW.iter().map(|(_, p)| *p))
        .map_err(|e| MlMathError::InvalidArgument(format!("invalid proximity weights: {e}")))?;
    let proximity = Array1::random_using(n, weights, rng);

    let people_per_household =
        Array1::random_using(n, Uniform::new(PEOPLE_PER_HOUSEHOLD.0, PEOPLE_PER_HOUSEHOLD.1), rng);
    let bedroom_ratio = Array1::random_using(n, Uniform::new(BEDROOM_RATIO.0, BEDROOM_RATIO.1), rng);

    let records = (0..n)
        .map(|i| {
            let households = ((population[i] as f64 / people_per_household[i]) as u32)
                .max(1)
                .min(population[i]);
            let total_bedrooms = ((rooms[i] as f64 * bedroom_ratio[i]) as u32)
                .max(1)
                .min(rooms[i]);

            HousingRecord {
                longitude: longitude[i],
                latitude: latitude[i],
                housing_median_age: age[i],
                total_rooms: rooms[i],
                total_bedrooms,
                population: population[i],
                households,
                median_income: income[i],
                ocean_proximity: PROXIMITY_DRAW[proximity[i]].0,
            }
        })
        .collect();

    Ok(records)
}

/// Writes the records plus a trailing `description` column to `path`.
pub fn write_test_data<P: AsRef<Path>>(path: P, records: &[HousingRecord]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;

    let mut header: Vec<&str> = HousingRecord::COLUMNS.to_vec();
    header.push("description");
    writer.write_record(&header)?;

    for record in records {
        let description = record.describe();
        writer.write_record(record.to_fields().iter().map(String::as_str).chain([description.as_str()]))?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = records.len(), "wrote test data");
    Ok(())
}

/// Ranges and category counts of a generated batch.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationSummary {
    pub longitude: (f64, f64),
    pub latitude: (f64, f64),
    pub median_income: (f64, f64),
    pub housing_median_age: (u32, u32),
    /// Category counts, most frequent first.
    pub proximity_counts: Vec<(OceanProximity, usize)>,
}

fn float_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

impl GenerationSummary {
    pub fn from_records(records: &[HousingRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let ages = records.iter().map(|r| r.housing_median_age);
        let housing_median_age = (ages.clone().min()?, ages.max()?);

        let mut counts: BTreeMap<OceanProximity, usize> = BTreeMap::new();
        for record in records {
            *counts.entry(record.ocean_proximity).or_default() += 1;
        }
        let mut proximity_counts: Vec<_> = counts.into_iter().collect();
        proximity_counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        Some(Self {
            longitude: float_range(records.iter().map(|r| r.longitude)),
            latitude: float_range(records.iter().map(|r| r.latitude)),
            median_income: float_range(records.iter().map(|r| r.median_income)),
            housing_median_age,
            proximity_counts,
        })
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Longitude range: {:.2} to {:.2}", self.longitude.0, self.longitude.1)?;
        writeln!(f, "Latitude range: {:.2} to {:.2}", self.latitude.0, self.latitude.1)?;
        writeln!(
            f,
            "Median income range: ${:.1}k to ${:.1}k",
            self.median_income.0, self.median_income.1
        )?;
        writeln!(
            f,
            "Housing age range: {} to {} years",
            self.housing_median_age.0, self.housing_median_age.1
        )?;
        write!(f, "\nOcean proximity distribution:")?;
        for (category, count) in &self.proximity_counts {
            write!(f, "\n{:<12}{:>4}", category.label(), count)?;
        }
        Ok(())
    }
}
