//! Shared engine value types (intervals, windows, allocation results).
//!
//! All temporal values are collapsed to tz-stripped UTC `NaiveDateTime` here,
//! at construction, so that no arithmetic downstream ever compares unlike
//! representations.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::util::interval_util::IntervalUtil;
use crate::errors::AllocationError;

/// Lenient timestamp parsing for rows handed over by the query layer.
/// Some stored records carry a UTC offset and some do not; both forms are
/// collapsed to UTC wall-clock time before any day arithmetic.
pub mod flexible_ts {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
            return Some(zoned.with_timezone(&Utc).naive_utc());
        }
        if let Ok(naive) = raw.parse::<NaiveDateTime>() {
            return Some(naive);
        }
        raw.parse::<NaiveDate>()
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("unrecognized timestamp format: {raw}"))
        })
    }
}

/// Raw timestamp forms accepted at the engine boundary.
#[derive(Debug, Clone, Copy)]
pub enum TimestampInput {
    Naive(NaiveDateTime),
    Utc(DateTime<Utc>),
    Zoned(DateTime<FixedOffset>),
}

impl TimestampInput {
    fn is_zoned(&self) -> bool {
        !matches!(self, TimestampInput::Naive(_))
    }

    pub fn normalize(self) -> NaiveDateTime {
        match self {
            TimestampInput::Naive(dt) => dt,
            TimestampInput::Utc(dt) => dt.naive_utc(),
            TimestampInput::Zoned(dt) => dt.with_timezone(&Utc).naive_utc(),
        }
    }
}

impl From<NaiveDateTime> for TimestampInput {
    fn from(dt: NaiveDateTime) -> Self {
        TimestampInput::Naive(dt)
    }
}

impl From<NaiveDate> for TimestampInput {
    fn from(d: NaiveDate) -> Self {
        TimestampInput::Naive(d.and_hms_opt(0, 0, 0).unwrap())
    }
}

impl From<DateTime<Utc>> for TimestampInput {
    fn from(dt: DateTime<Utc>) -> Self {
        TimestampInput::Utc(dt)
    }
}

impl From<DateTime<FixedOffset>> for TimestampInput {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        TimestampInput::Zoned(dt)
    }
}

/// Both endpoints of one record must agree on zone-awareness. A record mixing
/// a naive and an offset-carrying timestamp is corrupt upstream data.
fn normalize_pair(
    start: TimestampInput,
    end: TimestampInput,
) -> Result<(NaiveDateTime, NaiveDateTime), AllocationError> {
    if start.is_zoned() != end.is_zoned() {
        return Err(AllocationError::TimezoneMismatch);
    }
    Ok((start.normalize(), end.normalize()))
}

/// End-date convention for day counting. Historical reports disagree on
/// whether the end date belongs to the span; inclusive is the uniform default
/// and the exclusive variant exists to reconcile against old stored reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCountConvention {
    #[default]
    InclusiveEnd,
    ExclusiveEnd,
}

/// What a report builder does with a record whose end is not after its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidRecordPolicy {
    /// Drop the record, keep the report available.
    #[default]
    Skip,
    /// Fail the report build on the first malformed record.
    Reject,
}

/// One time-bounded record (a rental booking, a payroll period) owned by a
/// property or an employee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub owner_id: Uuid,
    #[serde(deserialize_with = "flexible_ts::deserialize")]
    pub start: NaiveDateTime,
    #[serde(deserialize_with = "flexible_ts::deserialize")]
    pub end: NaiveDateTime,
}

impl TimeInterval {
    pub fn new(
        owner_id: Uuid,
        start: impl Into<TimestampInput>,
        end: impl Into<TimestampInput>,
    ) -> Result<Self, AllocationError> {
        let (start, end) = normalize_pair(start.into(), end.into())?;
        if end <= start {
            return Err(AllocationError::InvalidInterval { start, end });
        }
        Ok(Self {
            owner_id,
            start,
            end,
        })
    }
}

/// A `TimeInterval` plus the amount earned uniformly over its span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountedInterval {
    #[serde(flatten)]
    pub interval: TimeInterval,
    pub total_amount: f64,
}

impl AmountedInterval {
    pub fn new(
        owner_id: Uuid,
        start: impl Into<TimestampInput>,
        end: impl Into<TimestampInput>,
        total_amount: f64,
    ) -> Result<Self, AllocationError> {
        Ok(Self {
            interval: TimeInterval::new(owner_id, start, end)?,
            total_amount,
        })
    }

    pub fn total_duration_days(&self, convention: DayCountConvention) -> i64 {
        IntervalUtil::span_days(self.interval.start, self.interval.end, convention)
    }
}

/// The arbitrary date range a report is generated for.
///
/// Construction normalizes, nothing more: an inverted window is kept as-is so
/// that a malformed report request degrades to an empty report downstream
/// instead of failing the whole response. `validate` is for callers that want
/// the strict check up front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportWindow {
    #[serde(deserialize_with = "flexible_ts::deserialize")]
    pub start: NaiveDateTime,
    #[serde(deserialize_with = "flexible_ts::deserialize")]
    pub end: NaiveDateTime,
}

impl ReportWindow {
    pub fn new(
        start: impl Into<TimestampInput>,
        end: impl Into<TimestampInput>,
    ) -> Result<Self, AllocationError> {
        let (start, end) = normalize_pair(start.into(), end.into())?;
        Ok(Self { start, end })
    }

    pub fn validate(&self) -> Result<(), AllocationError> {
        if self.end < self.start {
            return Err(AllocationError::InvalidWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Window for one calendar month, first day through last day.
    pub fn calendar_month(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let last = next_first.pred_opt()?;
        Some(Self {
            start: first.and_hms_opt(0, 0, 0)?,
            end: last.and_hms_opt(0, 0, 0)?,
        })
    }
}

/// Per-owner, per-window allocation figures. Every report that mentions one of
/// these numbers consumes this object rather than recomputing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationResult {
    pub owner_id: Uuid,
    pub total_available_days: i64,
    pub occupied_days: i64,
    pub occupancy_rate: f64,
    pub allocated_amount: f64,
}
