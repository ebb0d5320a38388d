//! The two aggregation rules every report shares.
//!
//! Occupancy (duration) merges an owner's intervals before counting days, so
//! overlapping bookings are never double counted. Revenue (amount) prorates
//! per source record and sums, because each record is an independently earned
//! amount; merging here would silently discard one of them. The asymmetry is
//! deliberate and every consumer depends on it.

use tracing::warn;

use crate::core::util::interval_util::IntervalUtil;
use crate::domain::common::model::{
    AmountedInterval, DayCountConvention, ReportWindow, TimeInterval,
};

/// Day capacity of the window. Zero for an inverted window, so every rate
/// derived from it degrades to zero instead of dividing by a negative span.
pub fn available_days(window: &ReportWindow) -> i64 {
    available_days_with(window, DayCountConvention::default())
}

pub fn available_days_with(window: &ReportWindow, convention: DayCountConvention) -> i64 {
    if window.end < window.start {
        return 0;
    }
    IntervalUtil::span_days(window.start, window.end, convention)
}

/// Window days on which the owner had at least one interval active.
/// Clip → merge → count; never exceeds `available_days`.
pub fn occupied_days(intervals: &[TimeInterval], window: &ReportWindow) -> i64 {
    occupied_days_with(intervals, window, DayCountConvention::default())
}

pub fn occupied_days_with(
    intervals: &[TimeInterval],
    window: &ReportWindow,
    convention: DayCountConvention,
) -> i64 {
    let clipped: Vec<TimeInterval> = intervals
        .iter()
        .filter_map(|i| IntervalUtil::clip(i, window))
        .collect();

    let merged = IntervalUtil::merge(clipped);

    let mut days: i64 = merged
        .iter()
        .map(|i| IntervalUtil::span_days(i.start, i.end, convention))
        .sum();

    // Inclusive counting can push two sub-day-separated intervals past the
    // window capacity. The clamp is a reportable event, not a silent fix.
    let available = available_days_with(window, convention);
    if days > available {
        warn!(
            "Occupied day count {} exceeds window capacity {}, clamping",
            days, available
        );
        days = available;
    }

    days
}

/// Share of the record's amount attributable to the window, by day
/// proportion. No rounding here: callers round once, at presentation time.
pub fn prorated_amount(record: &AmountedInterval, window: &ReportWindow) -> f64 {
    prorated_amount_with(record, window, DayCountConvention::default())
}

pub fn prorated_amount_with(
    record: &AmountedInterval,
    window: &ReportWindow,
    convention: DayCountConvention,
) -> f64 {
    let clipped = match IntervalUtil::clip(&record.interval, window) {
        Some(clipped) => clipped,
        None => return 0.0,
    };

    let overlap_days = IntervalUtil::span_days(clipped.start, clipped.end, convention);
    let total_days = record.total_duration_days(convention);

    // A record collapsing to zero span is a single-day event: the overlap is
    // non-empty at this point, so the whole amount belongs to the window.
    if total_days <= 0 {
        return record.total_amount;
    }

    record.total_amount * (overlap_days as f64 / total_days as f64)
}
