//! StepTrack - step-based fitness tracking calculations.
//!
//! Turns textual step-tracker records like `"678,Ходьба,0h50m"` into
//! distance, average speed and calorie estimates, and renders the
//! fixed-format activity reports. All functions are pure and stateless;
//! errors are returned as values and no partial report is ever produced.

pub mod config;
pub mod error;
pub mod metrics;
pub mod records;
pub mod report;

// Re-export commonly used types
pub use config::BodyParams;
pub use error::{FormatError, TrackerError, TrackerResult, ValidationError};
pub use metrics::{
    compute_metrics, distance_km, mean_speed_kmh, running_calories, spent_calories,
    walking_calories, ActivityMetrics,
};
pub use records::{parse_steps, parse_training, ActivityKind, StepRecord, TrainingRecord};
pub use report::{daily_report, daily_report_or_empty, training_report};
