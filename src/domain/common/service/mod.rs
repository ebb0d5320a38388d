//! Window resolution shared by every report service.

use chrono::{Datelike, NaiveDateTime, Utc};
use tracing::warn;

use crate::domain::common::dto::ReportRangeQuery;
use crate::domain::common::model::ReportWindow;

/// Resolve the reporting window from optional query bounds. Missing bounds
/// default to month-to-date. Soft validation: an inverted range is logged and
/// kept, so the report degrades to empty instead of failing.
pub fn resolve_report_window(q: &ReportRangeQuery) -> ReportWindow {
    let now = Utc::now().naive_utc();

    let start = q.start.unwrap_or_else(|| month_start(now));
    let end = q.end.unwrap_or(now);

    let window = ReportWindow { start, end };
    if let Err(err) = window.validate() {
        warn!("Invalid report range {} .. {}: {}", start, end, err);
    }

    window
}

fn month_start(now: NaiveDateTime) -> NaiveDateTime {
    now.date()
        .with_day(1)
        .unwrap_or(now.date())
        .and_hms_opt(0, 0, 0)
        .unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn explicit_bounds_pass_through() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let q = ReportRangeQuery {
            start: Some(start),
            end: Some(end),
            ..Default::default()
        };

        let window = resolve_report_window(&q);
        assert_eq!(window.start, start);
        assert_eq!(window.end, end);
    }

    #[test]
    fn missing_bounds_default_to_month_to_date() {
        let window = resolve_report_window(&ReportRangeQuery::default());
        assert_eq!(window.start.day(), 1);
        assert_eq!(window.start.time(), chrono::NaiveTime::MIN);
        assert!(window.end >= window.start);
        assert_eq!(window.start.month(), window.end.month());
    }

    #[test]
    fn inverted_range_is_kept_not_raised() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let q = ReportRangeQuery {
            start: Some(start),
            end: Some(end),
            ..Default::default()
        };

        let window = resolve_report_window(&q);
        assert!(window.validate().is_err());
    }
}
