use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by a clustering run.
///
/// All of these are detected while validating the input, before the first iteration starts.
/// Numeric edge-cases during the iteration (such as clusters without samples) are handled
/// by the configured [`EmptyClusterPolicy`](crate::EmptyClusterPolicy) instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum KMeansError {
    /// The dataset contains no samples.
    #[error("no samples provided")]
    EmptyDataset,

    /// The requested amount of clusters is zero, or exceeds the amount of samples.
    #[error("invalid amount of clusters: k={k} for {sample_cnt} samples")]
    InvalidK {
        k: usize,
        sample_cnt: usize,
    },

    /// Samples (or supplied centroids) do not share the same dimensionality.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
    },

    /// Explicit initialization without any centroids.
    #[error("no centroids provided for explicit initialization")]
    EmptyCentroids,

    /// Farthest-point initialization was asked for more centroids than there are samples.
    #[error("farthest-point initialization needs {k} samples, but only {sample_cnt} were provided")]
    InsufficientData {
        k: usize,
        sample_cnt: usize,
    },

    /// The name of a default initialization method was not recognized.
    #[error("unknown initialization method '{0}'")]
    UnknownInitMethod(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Machine-readable discriminant of a [`KMeansError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    EmptyDataset,
    InvalidK,
    DimensionMismatch,
    EmptyCentroids,
    InsufficientData,
    UnknownInitMethod,
    InvalidConfig,
}

impl KMeansError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KMeansError::EmptyDataset => ErrorKind::EmptyDataset,
            KMeansError::InvalidK { .. } => ErrorKind::InvalidK,
            KMeansError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            KMeansError::EmptyCentroids => ErrorKind::EmptyCentroids,
            KMeansError::InsufficientData { .. } => ErrorKind::InsufficientData,
            KMeansError::UnknownInitMethod(_) => ErrorKind::UnknownInitMethod,
            KMeansError::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }

    /// Build the serializable form of this error, as handed out to a request layer.
    pub fn report(&self) -> ErrorReport {
        ErrorReport { kind: self.kind(), message: self.to_string() }
    }
}

/// Structured error, pairing the machine-readable [`ErrorKind`] with a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<KMeansError> for ErrorReport {
    fn from(err: KMeansError) -> Self { err.report() }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(KMeansError::EmptyDataset.kind(), ErrorKind::EmptyDataset);
        assert_eq!(KMeansError::InvalidK { k: 0, sample_cnt: 3 }.kind(), ErrorKind::InvalidK);
        assert_eq!(KMeansError::InsufficientData { k: 5, sample_cnt: 3 }.kind(), ErrorKind::InsufficientData);
        assert_eq!(KMeansError::UnknownInitMethod("foo".into()).kind(), ErrorKind::UnknownInitMethod);
    }

    #[test]
    fn report_serializes_kind_and_message() {
        let report = KMeansError::DimensionMismatch { expected: 2, actual: 3 }.report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "DimensionMismatch");
        assert_eq!(json["message"], "dimension mismatch: expected 2, got 3");
    }
}
