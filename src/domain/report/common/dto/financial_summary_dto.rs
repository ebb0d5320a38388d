use chrono::NaiveDateTime;
use serde::Serialize;
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct FinancialSummaryResponseDto {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub target: Option<String>,
    pub summary: FinancialSummaryDto,
}

/// Presentation figures, rounded to cents at assembly and nowhere earlier.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FinancialSummaryDto {
    pub rental_revenue: f64,
    pub order_revenue: f64,
    pub total_revenue: f64,

    pub payroll_expense: f64,
    pub material_cost: f64,
    pub other_expenses: f64,
    pub total_expenses: f64,

    pub net_profit: f64,

    pub occupied_days: i64,
    pub available_days: i64,
    pub overall_occupancy_rate: f64,
}
