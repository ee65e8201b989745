//! Error types for trajectory construction

use serde::{Deserialize, Serialize};

/// Comprehensive error type for trajectory operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TrajectoryError {
    /// A path needs at least two waypoints to form a segment
    #[error("Too few waypoints: {count} (need at least 2)")]
    TooFewWaypoints { count: usize },

    /// Fewer than two samples per segment leaves the easing normalization undefined
    #[error("Too few samples per segment: {requested} (need at least 2)")]
    TooFewSamples { requested: usize },

    /// Easing domain half-width must be positive and finite
    #[error("Invalid easing domain: half-width {half_width}")]
    InvalidProfileDomain { half_width: f64 },

    /// A waypoint carried a non-finite coordinate
    #[error("Non-finite waypoint at index {index}")]
    NonFiniteWaypoint { index: usize },

    /// Stored path JSON could not be parsed
    #[error("Parse error: {reason}")]
    Parse { reason: String },
}

impl From<serde_json::Error> for TrajectoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
