//! Error types for record parsing and metric calculations.

use thiserror::Error;

/// Errors for input text that does not match the expected shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Record does not split into "steps,duration"
    #[error("Invalid record format, expected '<steps>,<duration>': {0}")]
    StepRecordShape(String),

    /// Record does not split into "steps,activity,duration"
    #[error("Invalid record format, expected '<steps>,<activity>,<duration>': {0}")]
    TrainingRecordShape(String),

    /// Step count field is not an integer
    #[error("Step count is not a number: {0}")]
    StepCount(String),

    /// Duration field does not match the duration-literal grammar
    #[error("Invalid duration literal: {0}")]
    Duration(String),
}

/// Errors for syntactically valid fields carrying invalid values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Step count must be greater than zero
    #[error("Step count must be positive, got {0}")]
    StepCount(i64),

    /// Duration must be greater than zero
    #[error("Duration must be positive, got {0}")]
    Duration(String),

    /// Weight must be greater than zero
    #[error("Weight must be positive, got {0} kg")]
    Weight(f64),

    /// Height must be greater than zero
    #[error("Height must be positive, got {0} m")]
    Height(f64),
}

/// Any error produced while turning a record into a report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    /// Input text failed syntactic parsing
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A parsed value is out of range
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Activity label does not name a recognized training kind
    #[error("Unknown activity type: {0}")]
    UnknownActivity(String),
}

/// Result type for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_carries_raw_value() {
        let err = FormatError::StepCount("12x".to_string());
        assert!(err.to_string().contains("12x"));
    }

    #[test]
    fn test_validation_error_carries_value() {
        let err = ValidationError::StepCount(-5);
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn test_tracker_error_is_transparent() {
        let err = TrackerError::from(FormatError::Duration("5x".to_string()));
        assert_eq!(err.to_string(), "Invalid duration literal: 5x");
    }

    #[test]
    fn test_unknown_activity_names_label() {
        let err = TrackerError::UnknownActivity("Плавание".to_string());
        assert!(err.to_string().contains("Плавание"));
    }
}
