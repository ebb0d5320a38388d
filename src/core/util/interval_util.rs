use chrono::NaiveDateTime;

use crate::domain::common::model::{DayCountConvention, ReportWindow, TimeInterval};

pub struct IntervalUtil;

impl IntervalUtil {
    /// Day span of `[start, end]`. Inclusive counting treats both endpoint
    /// dates as part of the span; exclusive counting drops the end date.
    #[inline]
    pub fn span_days(
        start: NaiveDateTime,
        end: NaiveDateTime,
        convention: DayCountConvention,
    ) -> i64 {
        let days = (end.date() - start.date()).num_days();
        match convention {
            DayCountConvention::InclusiveEnd => days + 1,
            DayCountConvention::ExclusiveEnd => days,
        }
    }

    /// Clip one interval to the window. `None` when nothing remains.
    pub fn clip(interval: &TimeInterval, window: &ReportWindow) -> Option<TimeInterval> {
        let overlap_start = interval.start.max(window.start);
        let overlap_end = interval.end.min(window.end);

        if overlap_end <= overlap_start {
            return None;
        }

        Some(TimeInterval {
            owner_id: interval.owner_id,
            start: overlap_start,
            end: overlap_end,
        })
    }

    /// Collapse overlapping or exactly adjacent intervals of one owner into
    /// the minimal disjoint set. This is what keeps two bookings logged with
    /// overlapping ranges from being counted as occupancy twice.
    pub fn merge(mut intervals: Vec<TimeInterval>) -> Vec<TimeInterval> {
        if intervals.is_empty() {
            return intervals;
        }

        // Stable sort: equal starts keep their input order.
        intervals.sort_by_key(|i| i.start);

        let mut merged = Vec::with_capacity(intervals.len());
        let mut current = intervals[0];

        for next in intervals.into_iter().skip(1) {
            if next.start <= current.end {
                if next.end > current.end {
                    current.end = next.end;
                }
            } else {
                merged.push(current);
                current = next;
            }
        }
        merged.push(current);

        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn interval(owner: Uuid, start: NaiveDateTime, end: NaiveDateTime) -> TimeInterval {
        TimeInterval {
            owner_id: owner,
            start,
            end,
        }
    }

    #[test]
    fn span_days_conventions() {
        let start = at(2024, 1, 1);
        let end = at(2024, 1, 10);
        assert_eq!(
            IntervalUtil::span_days(start, end, DayCountConvention::InclusiveEnd),
            10
        );
        assert_eq!(
            IntervalUtil::span_days(start, end, DayCountConvention::ExclusiveEnd),
            9
        );
        // Mid-day timestamps count by calendar date, not by elapsed hours.
        let late_start = at(2024, 1, 1) + chrono::Duration::hours(18);
        assert_eq!(
            IntervalUtil::span_days(late_start, end, DayCountConvention::InclusiveEnd),
            10
        );
    }

    #[test]
    fn clip_keeps_the_overlapping_part() {
        let owner = Uuid::new_v4();
        let window = ReportWindow {
            start: at(2024, 1, 10),
            end: at(2024, 1, 20),
        };

        let clipped =
            IntervalUtil::clip(&interval(owner, at(2024, 1, 5), at(2024, 1, 15)), &window)
                .unwrap();
        assert_eq!(clipped.start, at(2024, 1, 10));
        assert_eq!(clipped.end, at(2024, 1, 15));

        let inside = IntervalUtil::clip(&interval(owner, at(2024, 1, 12), at(2024, 1, 14)), &window)
            .unwrap();
        assert_eq!(inside.start, at(2024, 1, 12));
        assert_eq!(inside.end, at(2024, 1, 14));
    }

    #[test]
    fn clip_misses_yield_none() {
        let owner = Uuid::new_v4();
        let window = ReportWindow {
            start: at(2024, 1, 10),
            end: at(2024, 1, 20),
        };

        // Entirely before / entirely after.
        assert!(IntervalUtil::clip(&interval(owner, at(2024, 1, 1), at(2024, 1, 5)), &window)
            .is_none());
        assert!(
            IntervalUtil::clip(&interval(owner, at(2024, 1, 25), at(2024, 1, 30)), &window)
                .is_none()
        );
        // Touching the boundary instant only is an empty overlap.
        assert!(
            IntervalUtil::clip(&interval(owner, at(2024, 1, 20), at(2024, 1, 25)), &window)
                .is_none()
        );
    }

    #[test]
    fn merge_empty_and_single() {
        let owner = Uuid::new_v4();
        assert!(IntervalUtil::merge(Vec::new()).is_empty());

        let one = interval(owner, at(2024, 1, 1), at(2024, 1, 5));
        let merged = IntervalUtil::merge(vec![one]);
        assert_eq!(merged, vec![one]);
    }

    #[test]
    fn merge_collapses_overlap_adjacency_and_nesting() {
        let owner = Uuid::new_v4();

        // Overlapping pair, given out of order.
        let merged = IntervalUtil::merge(vec![
            interval(owner, at(2024, 1, 3), at(2024, 1, 8)),
            interval(owner, at(2024, 1, 1), at(2024, 1, 5)),
        ]);
        assert_eq!(merged, vec![interval(owner, at(2024, 1, 1), at(2024, 1, 8))]);

        // Exact adjacency merges too.
        let merged = IntervalUtil::merge(vec![
            interval(owner, at(2024, 1, 1), at(2024, 1, 5)),
            interval(owner, at(2024, 1, 5), at(2024, 1, 9)),
        ]);
        assert_eq!(merged, vec![interval(owner, at(2024, 1, 1), at(2024, 1, 9))]);

        // Fully nested collapses to the outer interval.
        let merged = IntervalUtil::merge(vec![
            interval(owner, at(2024, 1, 1), at(2024, 1, 20)),
            interval(owner, at(2024, 1, 5), at(2024, 1, 10)),
        ]);
        assert_eq!(merged, vec![interval(owner, at(2024, 1, 1), at(2024, 1, 20))]);
    }

    #[test]
    fn merge_keeps_disjoint_intervals_apart() {
        let owner = Uuid::new_v4();
        let merged = IntervalUtil::merge(vec![
            interval(owner, at(2024, 1, 10), at(2024, 1, 12)),
            interval(owner, at(2024, 1, 1), at(2024, 1, 5)),
        ]);
        assert_eq!(
            merged,
            vec![
                interval(owner, at(2024, 1, 1), at(2024, 1, 5)),
                interval(owner, at(2024, 1, 10), at(2024, 1, 12)),
            ]
        );
    }

    #[test]
    fn merge_equal_starts() {
        let owner = Uuid::new_v4();
        let merged = IntervalUtil::merge(vec![
            interval(owner, at(2024, 1, 1), at(2024, 1, 3)),
            interval(owner, at(2024, 1, 1), at(2024, 1, 7)),
        ]);
        assert_eq!(merged, vec![interval(owner, at(2024, 1, 1), at(2024, 1, 7))]);
    }
}
