//! Distance, speed and calorie estimation.
//!
//! Distance is derived from step count and body height (step length is
//! height × 0.45 m). Calories follow the closed-form walking/running
//! model; running burns at twice the walking rate.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{
    BodyParams, M_IN_KM, MIN_IN_H, SEC_IN_MIN, STEP_LENGTH_COEFFICIENT,
    WALKING_CALORIES_COEFFICIENT,
};
use crate::error::{TrackerError, TrackerResult, ValidationError};
use crate::records::types::ActivityKind;

/// Metrics derived for a single activity record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityMetrics {
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Average speed in km/h
    pub avg_speed_kmh: f64,
    /// Estimated calories burned in kcal
    pub calories: f64,
}

/// Distance covered in kilometers for a step count and body height.
pub fn distance_km(steps: u32, height_m: f64) -> f64 {
    let step_length = height_m * STEP_LENGTH_COEFFICIENT;
    f64::from(steps) * step_length / M_IN_KM
}

/// Average speed in km/h over the session.
///
/// Returns 0.0 for a zero duration; parsed records guarantee a positive one.
pub fn mean_speed_kmh(steps: u32, height_m: f64, duration: Duration) -> f64 {
    let hours = duration_hours(duration);
    if hours <= 0.0 {
        return 0.0;
    }
    distance_km(steps, height_m) / hours
}

/// Calories burned walking.
///
/// Inputs are checked in order: steps, weight, height, duration.
pub fn walking_calories(
    steps: u32,
    body: &BodyParams,
    duration: Duration,
) -> Result<f64, ValidationError> {
    check_inputs(steps, body, duration)?;

    let speed = mean_speed_kmh(steps, body.height_m, duration);
    let minutes = duration_minutes(duration);

    Ok(body.weight_kg * speed * minutes / MIN_IN_H * WALKING_CALORIES_COEFFICIENT)
}

/// Calories burned running — exactly twice the walking figure.
pub fn running_calories(
    steps: u32,
    body: &BodyParams,
    duration: Duration,
) -> Result<f64, ValidationError> {
    check_inputs(steps, body, duration)?;

    let speed = mean_speed_kmh(steps, body.height_m, duration);
    let minutes = duration_minutes(duration);

    Ok(body.weight_kg * speed * minutes / MIN_IN_H)
}

/// Dispatch the calorie calculation on an activity label.
pub fn spent_calories(
    activity: &str,
    steps: u32,
    body: &BodyParams,
    duration: Duration,
) -> TrackerResult<f64> {
    match ActivityKind::from_label(activity) {
        Some(ActivityKind::Walking) => Ok(walking_calories(steps, body, duration)?),
        Some(ActivityKind::Running) => Ok(running_calories(steps, body, duration)?),
        None => Err(TrackerError::UnknownActivity(activity.to_string())),
    }
}

/// Compute the full metric set for a training record.
pub fn compute_metrics(
    activity: &str,
    steps: u32,
    body: &BodyParams,
    duration: Duration,
) -> TrackerResult<ActivityMetrics> {
    let calories = spent_calories(activity, steps, body, duration)?;

    Ok(ActivityMetrics {
        distance_km: distance_km(steps, body.height_m),
        avg_speed_kmh: mean_speed_kmh(steps, body.height_m, duration),
        calories,
    })
}

pub(crate) fn duration_minutes(duration: Duration) -> f64 {
    duration.as_secs_f64() / SEC_IN_MIN
}

pub(crate) fn duration_hours(duration: Duration) -> f64 {
    duration_minutes(duration) / MIN_IN_H
}

fn check_inputs(
    steps: u32,
    body: &BodyParams,
    duration: Duration,
) -> Result<(), ValidationError> {
    if steps == 0 {
        return Err(ValidationError::StepCount(0));
    }
    body.validate()?;
    if duration.is_zero() {
        return Err(ValidationError::Duration("0s".to_string()));
    }
    Ok(())
}
