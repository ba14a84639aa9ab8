//! Metrics module for distance, speed and calorie estimation.

pub mod estimator;

pub use estimator::{
    compute_metrics, distance_km, mean_speed_kmh, running_calories, spent_calories,
    walking_calories, ActivityMetrics,
};
