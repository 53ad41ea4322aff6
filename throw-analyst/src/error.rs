//! Error types for throw analysis
//!
//! One success shape (`Report`) and one failure shape (`ErrorBody`) leave the
//! crate. Everything else is absorbed locally by the physics fallbacks.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for the analysis library
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while analyzing a throw
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No throw detected. Try throwing faster/closer.")]
    NoThrowDetected { peak_speed: f64, threshold: f64 },

    #[error("Timeline contains no frames")]
    EmptyTimeline,

    #[error("Invalid landmark data length: expected {expected}, got {actual}")]
    InvalidLandmarkCount { expected: usize, actual: usize },

    #[error("Unknown landmark name: {0}")]
    UnknownLandmark(String),

    #[error("Landmark reported twice in one frame: {0}")]
    DuplicateLandmark(&'static str),

    #[error("Timestamp regression: frame {index} at {current}s after {previous}s")]
    NonMonotonicTimestamps {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("Non-finite timestamp at frame {index}")]
    NonFiniteTimestamp { index: usize },

    #[error("Timestamp step too small at frame {index}: {step}s")]
    TimestampStepTooSmall { index: usize, step: f64 },

    #[error("Non-finite coordinate in frame {frame} for {landmark}")]
    NonFiniteCoordinate { frame: usize, landmark: &'static str },

    #[error("Coordinate out of range in frame {frame} for {landmark} (limit {limit} px)")]
    CoordinateOutOfRange {
        frame: usize,
        landmark: &'static str,
        limit: f64,
    },

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// True for the capture-quality failure (as opposed to a malformed request)
    pub fn is_no_throw(&self) -> bool {
        matches!(self, Self::NoThrowDetected { .. })
    }
}

/// Structured failure shape handed to the caller: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&AnalysisError> for ErrorBody {
    fn from(err: &AnalysisError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
