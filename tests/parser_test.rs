//! Tests for record parsing through the public API.

use std::time::Duration;

use steptrack::{
    parse_steps, parse_training, ActivityKind, FormatError, TrackerError, ValidationError,
};

#[test]
fn test_parse_steps_roundtrip() {
    for (data, steps, secs) in [
        ("678,0h50m", 678, 3000),
        ("1,1s", 1, 1),
        ("20000,3h30m", 20000, 12600),
    ] {
        let record = parse_steps(data).unwrap();
        assert_eq!(record.steps, steps);
        assert_eq!(record.duration, Duration::from_secs(secs));
    }
}

#[test]
fn test_parse_steps_error_taxonomy() {
    // Shape
    assert!(matches!(
        parse_steps("678"),
        Err(TrackerError::Format(FormatError::StepRecordShape(_)))
    ));
    // Syntax
    assert!(matches!(
        parse_steps("12x,0h50m"),
        Err(TrackerError::Format(FormatError::StepCount(_)))
    ));
    assert!(matches!(
        parse_steps("678,fifty"),
        Err(TrackerError::Format(FormatError::Duration(_)))
    ));
    // Values
    assert!(matches!(
        parse_steps("0,0h50m"),
        Err(TrackerError::Validation(ValidationError::StepCount(0)))
    ));
    assert!(matches!(
        parse_steps("678,0h0m"),
        Err(TrackerError::Validation(ValidationError::Duration(_)))
    ));
}

#[test]
fn test_parse_training_fields() {
    let record = parse_training("678,Бег,0h50m").unwrap();
    assert_eq!(record.steps, 678);
    assert_eq!(record.activity, "Бег");
    assert_eq!(record.kind(), Some(ActivityKind::Running));
    assert_eq!(record.duration, Duration::from_secs(3000));
}

#[test]
fn test_parse_training_trims_whitespace() {
    let record = parse_training("678, Скандинавская ходьба ,1h").unwrap();
    assert_eq!(record.activity, "Скандинавская ходьба");
    assert_eq!(record.kind(), None);
}

#[test]
fn test_parse_training_requires_three_fields() {
    assert!(matches!(
        parse_training("678,0h50m"),
        Err(TrackerError::Format(FormatError::TrainingRecordShape(_)))
    ));
    assert!(matches!(
        parse_training("678,Бег,0h50m,extra"),
        Err(TrackerError::Format(FormatError::TrainingRecordShape(_)))
    ));
}

#[test]
fn test_negative_duration_is_a_value_error() {
    // "-1h30m" is grammatical; rejecting it is the validator's job
    assert!(matches!(
        parse_training("678,Бег,-1h30m"),
        Err(TrackerError::Validation(ValidationError::Duration(_)))
    ));
}
