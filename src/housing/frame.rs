use super::record::HousingRecord;
use crate::error::{MlMathError, Result};
use std::fs::File;
use std::path::Path;

/// Name of the categorical column; it is never parsed as numeric.
pub const OCEAN_PROXIMITY: &str = "ocean_proximity";

/// Cell spellings read as missing, in addition to empty cells.
const MISSING_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

impl ColumnData {
    fn missing(&self) -> usize {
        match self {
            ColumnData::Numeric(values) => values.iter().filter(|v| v.is_none()).count(),
            ColumnData::Text(values) => values.iter().filter(|v| v.is_none()).count(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

/// Column-oriented batch of housing rows. Empty cells are missing values.
#[derive(Clone, Debug, PartialEq)]
pub struct HousingFrame {
    n_rows: usize,
    columns: Vec<Column>,
}

impl HousingFrame {
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let n_rows = columns.first().map(|c| column_len(&c.data)).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| column_len(&c.data) != n_rows) {
            return Err(MlMathError::dimension_mismatch(
                format!("{n_rows} rows in every column"),
                format!("{} rows in '{}'", column_len(&bad.data), bad.name),
            ));
        }

        Ok(Self { n_rows, columns })
    }

    pub fn from_records(records: &[HousingRecord]) -> Self {
        let numeric = |name: &str, f: fn(&HousingRecord) -> f64| Column {
            name: name.to_string(),
            data: ColumnData::Numeric(records.iter().map(|r| Some(f(r))).collect()),
        };

        let columns = vec![
            numeric("longitude", |r| r.longitude),
            numeric("latitude", |r| r.latitude),
            numeric("housing_median_age", |r| r.housing_median_age as f64),
            numeric("total_rooms", |r| r.total_rooms as f64),
            numeric("total_bedrooms", |r| r.total_bedrooms as f64),
            numeric("population", |r| r.population as f64),
            numeric("households", |r| r.households as f64),
            numeric("median_income", |r| r.median_income),
            Column {
                name: OCEAN_PROXIMITY.to_string(),
                data: ColumnData::Text(
                    records
                        .iter()
                        .map(|r| Some(r.ocean_proximity.label().to_string()))
                        .collect(),
                ),
            },
        ];

        Self {
            n_rows: records.len(),
            columns,
        }
    }

    /// Reads a headed CSV file. Empty cells and the usual NA spellings are missing.
    ///
    /// The housing feature columns must parse as numbers, and a cell that does not
    /// is `InvalidInput` naming its row. Other columns become numeric when every
    /// present cell parses and stay text otherwise. `ocean_proximity` is always text.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| MlMathError::from_open(e, path))?;
        let mut reader = csv::Reader::from_reader(file);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| MlMathError::InvalidInput(format!("failed to read CSV header: {e}")))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
        for (line, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                MlMathError::InvalidInput(format!("malformed CSV row {}: {e}", line + 2))
            })?;
            for (column, value) in cells.iter_mut().zip(record.iter()) {
                let value = value.trim();
                let missing = value.is_empty() || MISSING_TOKENS.contains(&value);
                column.push((!missing).then(|| value.to_string()));
            }
        }

        let columns = headers
            .into_iter()
            .zip(cells)
            .map(|(name, values)| {
                let data = if name == OCEAN_PROXIMITY {
                    ColumnData::Text(values)
                } else if HousingRecord::COLUMNS.contains(&name.as_str()) {
                    ColumnData::Numeric(parse_numeric_column(&name, &values)?)
                } else {
                    infer_column(values)
                };
                Ok(Column { name, data })
            })
            .collect::<Result<Vec<_>>>()?;

        let frame = Self::new(columns)?;
        tracing::info!(
            path = %path.display(),
            rows = frame.n_rows(),
            columns = frame.n_columns(),
            "loaded data"
        );
        Ok(frame)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn numeric(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns.iter().find(|c| c.name == name).and_then(|c| match &c.data {
            ColumnData::Numeric(values) => Some(values.as_slice()),
            ColumnData::Text(_) => None,
        })
    }

    pub fn text(&self, name: &str) -> Option<&[Option<String>]> {
        self.columns.iter().find(|c| c.name == name).and_then(|c| match &c.data {
            ColumnData::Text(values) => Some(values.as_slice()),
            ColumnData::Numeric(_) => None,
        })
    }

    /// Total number of empty cells across all columns.
    pub fn missing_count(&self) -> usize {
        self.columns.iter().map(|c| c.data.missing()).sum()
    }
}

fn column_len(data: &ColumnData) -> usize {
    match data {
        ColumnData::Numeric(values) => values.len(),
        ColumnData::Text(values) => values.len(),
    }
}

/// Parses one cell; a value that parses to NaN counts as missing.
fn parse_cell(text: &str) -> Option<Option<f64>> {
    let value = text.parse::<f64>().ok()?;
    Some((!value.is_nan()).then_some(value))
}

fn parse_numeric_column(name: &str, values: &[Option<String>]) -> Result<Vec<Option<f64>>> {
    values
        .iter()
        .enumerate()
        .map(|(row, cell)| match cell {
            Some(text) => parse_cell(text).ok_or_else(|| {
                MlMathError::InvalidInput(format!(
                    "row {}: column '{name}' has non-numeric value '{text}'",
                    row + 2
                ))
            }),
            None => Ok(None),
        })
        .collect()
}

fn infer_column(values: Vec<Option<String>>) -> ColumnData {
    let parsed: Option<Vec<Option<f64>>> = values
        .iter()
        .map(|cell| match cell {
            Some(text) => parse_cell(text),
            None => Some(None),
        })
        .collect();

    match parsed {
        Some(numbers) => ColumnData::Numeric(numbers),
        None => ColumnData::Text(values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_from_csv_infers_column_types() {
        let file = write_csv(
            "total_rooms,median_income,ocean_proximity,description\n\
             880,8.3252,NEAR BAY,Near bay\n\
             7099,,INLAND,Inland\n",
        );

        let frame = HousingFrame::from_csv_path(file.path()).unwrap();
        assert_eq!(frame.n_rows(), 2);
        assert_eq!(frame.numeric("total_rooms").unwrap(), &[Some(880.0), Some(7099.0)]);
        assert_eq!(frame.numeric("median_income").unwrap(), &[Some(8.3252), None]);
        assert!(frame.numeric("description").is_none());
        assert_eq!(frame.text(OCEAN_PROXIMITY).unwrap()[1].as_deref(), Some("INLAND"));
        assert_eq!(frame.missing_count(), 1);
    }

    #[test]
    fn test_na_spellings_are_missing() {
        let file = write_csv(
            "total_rooms,households,median_income,notes\n\
             2000,300,NaN,NA\n\
             N/A,null,4.5,kept\n\
             1500,250,nan,\n",
        );

        let frame = HousingFrame::from_csv_path(file.path()).unwrap();
        assert_eq!(frame.numeric("median_income").unwrap(), &[None, Some(4.5), None]);
        assert_eq!(frame.numeric("total_rooms").unwrap(), &[Some(2000.0), None, Some(1500.0)]);
        assert_eq!(frame.numeric("households").unwrap(), &[Some(300.0), None, Some(250.0)]);
        assert_eq!(frame.text("notes").unwrap(), &[None, Some("kept".to_string()), None]);
        assert_eq!(frame.missing_count(), 6);
    }

    #[test]
    fn test_non_numeric_feature_cell_rejected() {
        let file = write_csv(
            "total_rooms,households,median_income\n\
             2000,300,3.5\n\
             abc,250,4.0\n",
        );

        let err = HousingFrame::from_csv_path(file.path()).unwrap_err();
        assert!(matches!(err, MlMathError::InvalidInput(_)));
        let message = err.to_string();
        assert!(message.contains("row 3"));
        assert!(message.contains("total_rooms"));
        assert!(message.contains("abc"));
    }

    #[test]
    fn test_missing_file() {
        let err = HousingFrame::from_csv_path("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, MlMathError::ResourceNotFound { .. }));
    }

    #[test]
    fn test_malformed_row() {
        let file = write_csv("a,b\n1,2\n3\n");
        let err = HousingFrame::from_csv_path(file.path()).unwrap_err();
        assert!(matches!(err, MlMathError::InvalidInput(_)));
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let columns = vec![
            Column {
                name: "a".to_string(),
                data: ColumnData::Numeric(vec![Some(1.0)]),
            },
            Column {
                name: "b".to_string(),
                data: ColumnData::Numeric(vec![]),
            },
        ];
        assert!(HousingFrame::new(columns).is_err());
    }
}
