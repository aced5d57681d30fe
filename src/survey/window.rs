use chrono::NaiveDate;
use serde::Serialize;

use crate::utils::error::AppError;

/// Inclusive day range a query runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    /// Both bounds absent means "today only"; a single bound means "that day
    /// only"; both present are taken as given.
    pub fn resolve(from: Option<NaiveDate>, to: Option<NaiveDate>, today: NaiveDate) -> Self {
        match (from, to) {
            (Some(from), Some(to)) => Self { from, to },
            (Some(from), None) => Self { from, to: from },
            (None, Some(to)) => Self { from: to, to },
            (None, None) => Self { from: today, to: today },
        }
    }
}

/// Boundary parse for date query parameters; empty strings count as absent.
pub fn parse_day(value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match value {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::Validation(format!("invalid date '{}', expected YYYY-MM-DD", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn no_bounds_defaults_to_today_only() {
        let today = day("2025-06-15");
        let window = DateWindow::resolve(None, None, today);
        assert_eq!(window, DateWindow { from: today, to: today });
    }

    #[test]
    fn single_bound_is_copied_to_the_other() {
        let today = day("2025-06-15");

        let window = DateWindow::resolve(Some(day("2025-06-01")), None, today);
        assert_eq!(window.from, day("2025-06-01"));
        assert_eq!(window.to, day("2025-06-01"));

        let window = DateWindow::resolve(None, Some(day("2025-06-02")), today);
        assert_eq!(window.from, day("2025-06-02"));
        assert_eq!(window.to, day("2025-06-02"));
    }

    #[test]
    fn explicit_bounds_pass_through() {
        let window = DateWindow::resolve(
            Some(day("2025-06-01")),
            Some(day("2025-06-30")),
            day("2025-07-15"),
        );
        assert_eq!(window.from, day("2025-06-01"));
        assert_eq!(window.to, day("2025-06-30"));
    }

    #[test]
    fn parse_day_accepts_absent_and_empty() {
        assert_eq!(parse_day(None).unwrap(), None);
        assert_eq!(parse_day(Some("")).unwrap(), None);
        assert_eq!(parse_day(Some("2025-06-01")).unwrap(), Some(day("2025-06-01")));
        assert!(parse_day(Some("01/06/2025")).is_err());
    }
}
