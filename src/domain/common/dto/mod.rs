//! Report query DTOs handed over by the surrounding request layer.

use chrono::NaiveDateTime;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct ReportRangeQuery {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,

    /// Restrict the report to these owners; absent means all.
    pub property_ids: Option<Vec<Uuid>>,

    #[validate(range(min = 1, max = 500))]
    pub limit: Option<usize>,
    pub offset: Option<usize>,

    /// `"occupancy"` or `"revenue"` (default) for breakdown ordering.
    pub sort: Option<String>,
}
