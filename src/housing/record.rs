use crate::error::{MlMathError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance category of a census block from the coast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OceanProximity {
    #[serde(rename = "<1H OCEAN")]
    LessThanOneHour,
    #[serde(rename = "INLAND")]
    Inland,
    #[serde(rename = "ISLAND")]
    Island,
    #[serde(rename = "NEAR BAY")]
    NearBay,
    #[serde(rename = "NEAR OCEAN")]
    NearOcean,
}

impl OceanProximity {
    /// All categories in label order; the first one is the one-hot reference.
    pub const ALL: [OceanProximity; 5] = [
        OceanProximity::LessThanOneHour,
        OceanProximity::Inland,
        OceanProximity::Island,
        OceanProximity::NearBay,
        OceanProximity::NearOcean,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OceanProximity::LessThanOneHour => "<1H OCEAN",
            OceanProximity::Inland => "INLAND",
            OceanProximity::Island => "ISLAND",
            OceanProximity::NearBay => "NEAR BAY",
            OceanProximity::NearOcean => "NEAR OCEAN",
        }
    }

    fn location(self) -> &'static str {
        match self {
            OceanProximity::Island => "Island location",
            OceanProximity::LessThanOneHour => "Near ocean (< 1 hour)",
            OceanProximity::NearBay => "Near bay",
            OceanProximity::NearOcean => "Near ocean",
            OceanProximity::Inland => "Inland",
        }
    }
}

impl fmt::Display for OceanProximity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OceanProximity {
    type Err = MlMathError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label() == trimmed)
            .ok_or_else(|| MlMathError::InvalidInput(format!("unknown ocean_proximity '{trimmed}'")))
    }
}

/// One synthetic census block, without the target value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HousingRecord {
    pub longitude: f64,
    pub latitude: f64,
    pub housing_median_age: u32,
    pub total_rooms: u32,
    pub total_bedrooms: u32,
    pub population: u32,
    pub households: u32,
    pub median_income: f64,
    pub ocean_proximity: OceanProximity,
}

impl HousingRecord {
    pub const COLUMNS: [&'static str; 9] = [
        "longitude",
        "latitude",
        "housing_median_age",
        "total_rooms",
        "total_bedrooms",
        "population",
        "households",
        "median_income",
        "ocean_proximity",
    ];

    /// Short human-readable label; context only, never a model input.
    pub fn describe(&self) -> String {
        let income_level = if self.median_income < 3.0 {
            "Low"
        } else if self.median_income < 7.0 {
            "Medium"
        } else {
            "High"
        };

        let age = if self.housing_median_age < 10 {
            "New"
        } else if self.housing_median_age > 40 {
            "Old"
        } else {
            "Medium age"
        };

        format!(
            "{}, {} income, {} housing",
            self.ocean_proximity.location(),
            income_level,
            age
        )
    }

    /// Cells in `COLUMNS` order.
    pub fn to_fields(&self) -> [String; 9] {
        [
            self.longitude.to_string(),
            self.latitude.to_string(),
            self.housing_median_age.to_string(),
            self.total_rooms.to_string(),
            self.total_bedrooms.to_string(),
            self.population.to_string(),
            self.households.to_string(),
            self.median_income.to_string(),
            self.ocean_proximity.label().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ocean_proximity: OceanProximity, median_income: f64, age: u32) -> HousingRecord {
        HousingRecord {
            longitude: -122.23,
            latitude: 37.88,
            housing_median_age: age,
            total_rooms: 880,
            total_bedrooms: 129,
            population: 322,
            households: 126,
            median_income,
            ocean_proximity,
        }
    }

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for category in OceanProximity::ALL {
            assert_eq!(category.label().parse::<OceanProximity>().unwrap(), category);
        }
        assert!("OCEANSIDE".parse::<OceanProximity>().is_err());
    }

    #[test]
    fn test_all_is_sorted_by_label() {
        let labels: Vec<_> = OceanProximity::ALL.iter().map(|c| c.label()).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            record(OceanProximity::Island, 2.0, 5).describe(),
            "Island location, Low income, New housing"
        );
        assert_eq!(
            record(OceanProximity::LessThanOneHour, 5.0, 25).describe(),
            "Near ocean (< 1 hour), Medium income, Medium age housing"
        );
        assert_eq!(
            record(OceanProximity::Inland, 7.0, 41).describe(),
            "Inland, High income, Old housing"
        );
    }

    #[test]
    fn test_to_fields_matches_columns() {
        let fields = record(OceanProximity::NearBay, 8.3252, 41).to_fields();
        assert_eq!(fields.len(), HousingRecord::COLUMNS.len());
        assert_eq!(fields[0], "-122.23");
        assert_eq!(fields[8], "NEAR BAY");
    }
}
