//! Record types parsed from tracker text.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Record label for a walking session.
pub const WALKING_LABEL: &str = "Ходьба";

/// Record label for a running session.
pub const RUNNING_LABEL: &str = "Бег";

/// Recognized training activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Walking session
    Walking,
    /// Running session
    Running,
}

impl ActivityKind {
    /// Resolve a trimmed record label to an activity kind.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            WALKING_LABEL => Some(ActivityKind::Walking),
            RUNNING_LABEL => Some(ActivityKind::Running),
            _ => None,
        }
    }

    /// The record label for this activity.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Walking => WALKING_LABEL,
            ActivityKind::Running => RUNNING_LABEL,
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A parsed "steps,duration" walk package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Number of steps taken
    pub steps: u32,
    /// Time spent walking
    pub duration: Duration,
}

/// A parsed "steps,activity,duration" training session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// Number of steps taken
    pub steps: u32,
    /// Activity label as recorded, surrounding whitespace trimmed.
    /// Unrecognized labels survive parsing; calorie dispatch rejects them.
    pub activity: String,
    /// Session duration
    pub duration: Duration,
}

impl TrainingRecord {
    /// Recognized activity kind, if the label names one.
    pub fn kind(&self) -> Option<ActivityKind> {
        ActivityKind::from_label(&self.activity)
    }
}
