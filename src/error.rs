//! Error types shared by every unit of the crate.

use std::path::PathBuf;

/// Failures raised by the library and its binaries.
#[derive(Debug, thiserror::Error)]
pub enum MlMathError {
    /// User-supplied counts, CSV cells or model blobs that cannot be used.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A caller-supplied parameter outside its domain (e.g. zero trials).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Vector or matrix shapes that cannot be combined.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// A probability denominator was zero.
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    /// A model or data file does not exist.
    #[error("file '{}' not found", .path.display())]
    ResourceNotFound { path: PathBuf },

    /// The prepared feature batch does not fit the loaded model.
    #[error("prediction failed: {0}")]
    PredictionFailure(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, MlMathError>;

impl MlMathError {
    pub(crate) fn dimension_mismatch(expected: impl ToString, actual: impl ToString) -> Self {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Maps a failed open of `path` to `ResourceNotFound` when the file is missing.
    pub(crate) fn from_open(err: std::io::Error, path: &std::path::Path) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::ResourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = MlMathError::dimension_mismatch("3", "2");
        assert_eq!(err.to_string(), "dimension mismatch: expected 3, got 2");
    }

    #[test]
    fn test_missing_file_maps_to_resource_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = MlMathError::from_open(io, std::path::Path::new("model.json"));
        assert!(matches!(err, MlMathError::ResourceNotFound { .. }));
        assert!(err.to_string().contains("model.json"));
    }
}
