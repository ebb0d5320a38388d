//! Attribution of payroll periods to a reporting window.
//!
//! Pay periods rarely tile onto an arbitrary window (a monthly period against
//! a 10-day report range), so each period's net amount is prorated by day
//! overlap and the shares are summed.

use std::collections::HashMap;

use anyhow::Result;
use uuid::Uuid;
use validator::Validate;

use crate::core::util::interval_util::IntervalUtil;
use crate::core::util::money_util::MoneyUtil;
use crate::domain::allocation::service as allocation;
use crate::domain::common::dto::ReportRangeQuery;
use crate::domain::common::model::{AmountedInterval, DayCountConvention, ReportWindow};
use crate::domain::common::service::resolve_report_window;
use crate::domain::report::common::dto::payroll_attribution_dto::{
    PayrollAttributionResponseDto, PayrollPeriodAttributionDto,
};

/// Net earnings of one employee attributable to the window. Periods with no
/// overlap contribute nothing and are not an error.
pub fn attributed_earnings(periods: &[AmountedInterval], window: &ReportWindow) -> f64 {
    periods
        .iter()
        .map(|period| allocation::prorated_amount(period, window))
        .sum()
}

pub fn attributed_earnings_by_employee(
    periods_by_employee: &HashMap<Uuid, Vec<AmountedInterval>>,
    window: &ReportWindow,
) -> HashMap<Uuid, f64> {
    periods_by_employee
        .iter()
        .map(|(employee_id, periods)| (*employee_id, attributed_earnings(periods, window)))
        .collect()
}

/// Period-by-period attribution detail for one employee, for tracing where a
/// payslip figure came from. Amounts are rounded here, at the presentation
/// edge; the canonical total is still [`attributed_earnings`].
pub fn build_payroll_attribution(
    employee_id: Uuid,
    periods: &[AmountedInterval],
    q: &ReportRangeQuery,
) -> Result<PayrollAttributionResponseDto> {
    q.validate()?;
    let window = resolve_report_window(q);
    Ok(attribution_detail(employee_id, periods, &window))
}

pub fn attribution_detail(
    employee_id: Uuid,
    periods: &[AmountedInterval],
    window: &ReportWindow,
) -> PayrollAttributionResponseDto {
    let convention = DayCountConvention::default();
    let mut rows = Vec::with_capacity(periods.len());

    for period in periods {
        let attributed = allocation::prorated_amount(period, window);

        let overlap_days = IntervalUtil::clip(&period.interval, window)
            .map(|clipped| IntervalUtil::span_days(clipped.start, clipped.end, convention))
            .unwrap_or(0);
        let period_days = period.total_duration_days(convention);

        let attribution_ratio = if period_days > 0 {
            overlap_days as f64 / period_days as f64
        } else if overlap_days > 0 {
            1.0
        } else {
            0.0
        };

        rows.push(PayrollPeriodAttributionDto {
            period_start: period.interval.start,
            period_end: period.interval.end,
            period_days,
            overlap_days,
            attribution_ratio,
            attributed_amount: MoneyUtil::round2(attributed),
        });
    }

    PayrollAttributionResponseDto {
        start: window.start,
        end: window.end,
        employee_id,
        total_attributed: MoneyUtil::round2(attributed_earnings(periods, window)),
        periods: rows,
    }
}
