//! Record parsing for walk packages and training sessions.

mod duration;
pub mod parser;
pub mod types;

pub use parser::{parse_steps, parse_training};
pub use types::{ActivityKind, StepRecord, TrainingRecord};
