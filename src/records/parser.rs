//! Record text parsers.
//!
//! Records are comma-delimited: `"678,0h50m"` for a plain walk package
//! and `"678,Ходьба,0h50m"` for a training session.

use std::time::Duration;

use crate::error::{FormatError, TrackerResult, ValidationError};
use crate::records::duration::parse_duration_literal;
use crate::records::types::{StepRecord, TrainingRecord};

/// Parse a `"steps,duration"` record like `"678,0h50m"`.
pub fn parse_steps(data: &str) -> TrackerResult<StepRecord> {
    let parts: Vec<&str> = data.split(',').collect();
    if parts.len() != 2 {
        return Err(FormatError::StepRecordShape(data.to_string()).into());
    }

    let steps = parse_step_count(parts[0])?;
    let duration = parse_positive_duration(parts[1])?;

    Ok(StepRecord { steps, duration })
}

/// Parse a `"steps,activity,duration"` record like `"678,Бег,0h50m"`.
///
/// Fields are trimmed of surrounding whitespace. The activity label is
/// kept verbatim; unrecognized labels are rejected at calorie dispatch.
pub fn parse_training(data: &str) -> TrackerResult<TrainingRecord> {
    let parts: Vec<&str> = data.split(',').collect();
    if parts.len() != 3 {
        return Err(FormatError::TrainingRecordShape(data.to_string()).into());
    }

    let steps = parse_step_count(parts[0].trim())?;
    let activity = parts[1].trim().to_string();
    let duration = parse_positive_duration(parts[2].trim())?;

    Ok(TrainingRecord {
        steps,
        activity,
        duration,
    })
}

fn parse_step_count(field: &str) -> TrackerResult<u32> {
    let steps: i64 = field
        .parse()
        .map_err(|_| FormatError::StepCount(field.to_string()))?;
    if steps <= 0 {
        return Err(ValidationError::StepCount(steps).into());
    }
    let steps =
        u32::try_from(steps).map_err(|_| FormatError::StepCount(field.to_string()))?;
    Ok(steps)
}

fn parse_positive_duration(field: &str) -> TrackerResult<Duration> {
    let secs = parse_duration_literal(field)?;
    if secs <= 0 {
        return Err(ValidationError::Duration(field.to_string()).into());
    }
    Ok(Duration::from_secs(secs as u64))
}
