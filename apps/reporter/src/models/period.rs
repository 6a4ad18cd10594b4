use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reporting window as typed by the caller: two `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodInput {
    pub start_date: String,
    pub end_date: String,
}

/// A validated, inclusive reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportPeriod {
    pub fn parse(input: &PeriodInput) -> Result<Self, AppError> {
        let start = parse_date("start_date", &input.start_date)?;
        let end = parse_date("end_date", &input.end_date)?;
        if start > end {
            return Err(AppError::Validation(format!(
                "start_date {start} is after end_date {end}"
            )));
        }
        Ok(ReportPeriod { start, end })
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        AppError::Validation(format!(
            "{field} '{value}' is not a valid date; use YYYY-MM-DD"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(start: &str, end: &str) -> PeriodInput {
        PeriodInput {
            start_date: start.to_string(),
            end_date: end.to_string(),
        }
    }

    #[test]
    fn test_parses_valid_period() {
        let period = ReportPeriod::parse(&input("2024-06-03", "2024-06-14")).unwrap();
        assert_eq!(period.start, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(period.days(), 12);
    }

    #[test]
    fn test_single_day_period() {
        let period = ReportPeriod::parse(&input("2024-02-29", "2024-02-29")).unwrap();
        assert_eq!(period.days(), 1);
    }

    #[test]
    fn test_rejects_bad_format() {
        let err = ReportPeriod::parse(&input("06/03/2024", "2024-06-14")).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("start_date")));
    }

    #[test]
    fn test_rejects_impossible_date() {
        let err = ReportPeriod::parse(&input("2024-06-03", "2023-02-30")).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("end_date")));
    }

    #[test]
    fn test_rejects_reversed_period() {
        let err = ReportPeriod::parse(&input("2024-06-14", "2024-06-03")).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("after")));
    }
}
