//! Report rendering for parsed records.
//!
//! Reports use the tracker's fixed message strings with all real numbers
//! formatted to two decimals. On any error the strict functions return it
//! with no partial text.

use crate::config::BodyParams;
use crate::error::TrackerResult;
use crate::metrics::estimator::{compute_metrics, distance_km, duration_hours, walking_calories};
use crate::records::parser::{parse_steps, parse_training};

/// Render the session report for a `"steps,activity,duration"` record.
pub fn training_report(data: &str, body: &BodyParams) -> TrackerResult<String> {
    let record = parse_training(data)?;
    let metrics = compute_metrics(&record.activity, record.steps, body, record.duration)?;

    Ok(format!(
        "Тип тренировки: {}\nДлительность: {:.2} ч.\nДистанция: {:.2} км.\nСкорость: {:.2} км/ч\nСожгли калорий: {:.2}\n",
        record.activity,
        duration_hours(record.duration),
        metrics.distance_km,
        metrics.avg_speed_kmh,
        metrics.calories,
    ))
}

/// Render the daily walk report for a `"steps,duration"` record.
///
/// Distance uses the same height-derived step length as the training
/// path; calories use the walking model.
pub fn daily_report(data: &str, body: &BodyParams) -> TrackerResult<String> {
    let record = parse_steps(data)?;
    let distance = distance_km(record.steps, body.height_m);
    let calories = walking_calories(record.steps, body, record.duration)?;

    Ok(format!(
        "Количество шагов: {}.\nДистанция составила {:.2} км.\nВы сожгли {:.2} ккал.\n",
        record.steps, distance, calories,
    ))
}

/// Like [`daily_report`], but logs the error and returns an empty string
/// instead of failing. Presentation policy for feeds that render whatever
/// is available.
pub fn daily_report_or_empty(data: &str, body: &BodyParams) -> String {
    match daily_report(data, body) {
        Ok(report) => report,
        Err(err) => {
            tracing::warn!("Failed to build daily report: {}", err);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> BodyParams {
        BodyParams::new(75.0, 1.75)
    }

    #[test]
    fn test_training_report_walking() {
        let report = training_report("678,Ходьба,0h50m", &body()).unwrap();
        assert_eq!(
            report,
            "Тип тренировки: Ходьба\n\
             Длительность: 0.83 ч.\n\
             Дистанция: 0.53 км.\n\
             Скорость: 0.64 км/ч\n\
             Сожгли калорий: 20.02\n"
        );
    }

    #[test]
    fn test_training_report_running_doubles_calories() {
        let report = training_report("678,Бег,0h50m", &body()).unwrap();
        assert!(report.contains("Тип тренировки: Бег\n"));
        assert!(report.contains("Сожгли калорий: 40.04\n"));
    }

    #[test]
    fn test_training_report_unknown_activity() {
        use crate::error::TrackerError;

        let err = training_report("678,Плавание,0h50m", &body()).unwrap_err();
        assert_eq!(err, TrackerError::UnknownActivity("Плавание".to_string()));
    }

    #[test]
    fn test_daily_report() {
        let report = daily_report("678,0h50m", &body()).unwrap();
        assert_eq!(
            report,
            "Количество шагов: 678.\n\
             Дистанция составила 0.53 км.\n\
             Вы сожгли 20.02 ккал.\n"
        );
    }

    #[test]
    fn test_daily_report_or_empty_swallows_errors() {
        assert_eq!(daily_report_or_empty("bad record", &body()), "");
        assert_eq!(daily_report_or_empty("678,0h50m,extra", &body()), "");
    }

    #[test]
    fn test_reports_are_idempotent() {
        let first = training_report("678,Бег,0h50m", &body()).unwrap();
        let second = training_report("678,Бег,0h50m", &body()).unwrap();
        assert_eq!(first, second);
    }
}
