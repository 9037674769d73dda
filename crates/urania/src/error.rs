use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors surfaced by chart analysis.
///
/// Arithmetic inside the engine is total; everything here originates at a
/// provider boundary or from malformed caller input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Position unavailable for {body} at {instant}: {reason}")]
    PositionUnavailable {
        body: String,
        instant: DateTime<Utc>,
        reason: String,
    },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Expected 12 house cusps, got {count}")]
    InvalidCusps { count: usize },
    #[error("Missing position for {body}")]
    MissingBody { body: String },
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
    #[error("Calculation failed for {body}: {message}")]
    CalculationFailed { body: String, message: String },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
