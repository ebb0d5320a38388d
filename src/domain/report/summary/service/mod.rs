//! One coherent financial summary per window.
//!
//! This service only combines figures that were already allocated elsewhere:
//! occupancy results from the per-property report, attributed earnings from
//! payroll, and non-temporal figures supplied by the caller. Nothing here
//! recomputes an allocation through a second code path, so a number shown in
//! two reports can only come from one call.

use std::collections::HashMap;

use anyhow::Result;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::core::util::money_util::MoneyUtil;
use crate::domain::common::model::{AllocationResult, ReportWindow};
use crate::domain::report::common::dto::financial_summary_dto::{
    FinancialSummaryDto, FinancialSummaryResponseDto,
};

/// Non-temporal figures owned by other subsystems (order billing, inventory).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalFigures {
    pub order_revenue: f64,
    pub material_cost: f64,
    pub other_expenses: f64,
}

pub fn aggregate(
    occupancy: &[AllocationResult],
    earnings_by_employee: &HashMap<Uuid, f64>,
    figures: &ExternalFigures,
    window: &ReportWindow,
    target: Option<String>,
) -> FinancialSummaryResponseDto {
    let rental_revenue: f64 = occupancy.iter().map(|r| r.allocated_amount).sum();
    let occupied_days: i64 = occupancy.iter().map(|r| r.occupied_days).sum();
    let available_days: i64 = occupancy.iter().map(|r| r.total_available_days).sum();

    // Weighted by available days, not by owner count: a plain mean of
    // per-owner rates would let a one-day listing outvote a full portfolio.
    let overall_occupancy_rate = if available_days > 0 {
        (occupied_days as f64 / available_days as f64 * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    let payroll_expense: f64 = earnings_by_employee.values().sum();

    let total_revenue = rental_revenue + figures.order_revenue;
    let total_expenses = payroll_expense + figures.material_cost + figures.other_expenses;
    let net_profit = total_revenue - total_expenses;

    debug!(
        "Aggregated summary over {} properties and {} employees",
        occupancy.len(),
        earnings_by_employee.len()
    );

    FinancialSummaryResponseDto {
        start: window.start,
        end: window.end,
        target,
        summary: FinancialSummaryDto {
            rental_revenue: MoneyUtil::round2(rental_revenue),
            order_revenue: MoneyUtil::round2(figures.order_revenue),
            total_revenue: MoneyUtil::round2(total_revenue),
            payroll_expense: MoneyUtil::round2(payroll_expense),
            material_cost: MoneyUtil::round2(figures.material_cost),
            other_expenses: MoneyUtil::round2(figures.other_expenses),
            total_expenses: MoneyUtil::round2(total_expenses),
            net_profit: MoneyUtil::round2(net_profit),
            occupied_days,
            available_days,
            overall_occupancy_rate,
        },
    }
}

pub fn aggregate_value(
    occupancy: &[AllocationResult],
    earnings_by_employee: &HashMap<Uuid, f64>,
    figures: &ExternalFigures,
    window: &ReportWindow,
    target: Option<String>,
) -> Result<Value> {
    let dto = aggregate(occupancy, earnings_by_employee, figures, window, target);
    Ok(serde_json::to_value(dto)?)
}
