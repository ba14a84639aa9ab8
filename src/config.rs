//! Shared calculation constants and the caller-supplied body profile.
//!
//! Every numeric coefficient used by the estimator lives here so the
//! walking and training paths stay on the same model.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Step length as a fraction of body height (meters per step).
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;

/// Meters in one kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in one hour.
pub const MIN_IN_H: f64 = 60.0;

/// Seconds in one minute.
pub const SEC_IN_MIN: f64 = 60.0;

/// Walking burns calories at half the running rate.
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

/// Body parameters supplied by the caller, never parsed from record text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyParams {
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in meters
    pub height_m: f64,
}

impl BodyParams {
    /// Create body parameters from weight (kg) and height (m).
    pub fn new(weight_kg: f64, height_m: f64) -> Self {
        Self {
            weight_kg,
            height_m,
        }
    }

    /// Check that both parameters are positive, reporting the first that is not.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.weight_kg <= 0.0 {
            return Err(ValidationError::Weight(self.weight_kg));
        }
        if self.height_m <= 0.0 {
            return Err(ValidationError::Height(self.height_m));
        }
        Ok(())
    }
}
