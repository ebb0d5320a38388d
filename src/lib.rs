//! Temporal allocation core of the Rentora property-rental backend.
//!
//! Everything in here is pure, synchronous computation over request-scoped
//! value objects: occupancy day counts, revenue proration and payroll
//! attribution against an arbitrary reporting window. Fetching rows and
//! rendering documents belong to the surrounding layers, not to this crate.

pub mod core;
pub mod domain;
pub mod errors;

pub use crate::domain::common::model::{
    AllocationResult, AmountedInterval, DayCountConvention, InvalidRecordPolicy, ReportWindow,
    TimeInterval, TimestampInput,
};
pub use crate::errors::AllocationError;
