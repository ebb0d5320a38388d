use chrono::NaiveDateTime;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::domain::common::model::AllocationResult;

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct OccupancyReportResponseDto {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,

    /// Organization or portfolio label, when the caller scopes the report.
    pub target: Option<String>,

    /// Owner count before pagination.
    pub property_count: usize,
    pub properties: Vec<AllocationResult>,
}
