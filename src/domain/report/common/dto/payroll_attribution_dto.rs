use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct PayrollAttributionResponseDto {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub employee_id: Uuid,
    pub total_attributed: f64,
    pub periods: Vec<PayrollPeriodAttributionDto>,
}

/// One pay period's share of the window, kept around so a mis-attributed
/// payslip can be traced period by period.
#[derive(Debug, Serialize)]
pub struct PayrollPeriodAttributionDto {
    pub period_start: NaiveDateTime,
    pub period_end: NaiveDateTime,
    pub period_days: i64,
    pub overlap_days: i64,
    pub attribution_ratio: f64,
    pub attributed_amount: f64,
}
