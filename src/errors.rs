use chrono::NaiveDateTime;
use thiserror::Error;

/// Validation conditions local to the allocation engine. A malformed record
/// degrades that record's contribution to zero/skip; none of these variants is
/// allowed to take a whole report down.
#[allow(dead_code)]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AllocationError {
    #[error("Invalid interval: end {end} is not after start {start}")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Invalid window: end {end} precedes start {start}")]
    InvalidWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Timezone mismatch: zone-aware and zone-naive timestamps cannot be combined")]
    TimezoneMismatch,
}
