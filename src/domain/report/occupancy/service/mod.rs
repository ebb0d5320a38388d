//! Per-property occupancy and revenue report.

use std::cmp::Ordering;
use std::collections::HashMap;

use anyhow::Result;
use tracing::warn;
use uuid::Uuid;
use validator::Validate;

use crate::domain::allocation::service as allocation;
use crate::domain::common::dto::ReportRangeQuery;
use crate::domain::common::model::{
    AllocationResult, AmountedInterval, InvalidRecordPolicy, ReportWindow, TimeInterval,
};
use crate::domain::common::service::resolve_report_window;
use crate::domain::report::common::dto::occupancy_report_dto::OccupancyReportResponseDto;
use crate::errors::AllocationError;

/// One owner's allocation figures for the window. Malformed records are
/// dropped with a warning; use [`build_report_with`] to reject instead.
pub fn build_report(
    owner_id: Uuid,
    records: &[AmountedInterval],
    window: &ReportWindow,
) -> AllocationResult {
    match build_report_with(owner_id, records, window, InvalidRecordPolicy::Skip) {
        Ok(report) => report,
        // Skip never rejects; keep the degenerate empty report as a fallback.
        Err(_) => assemble(owner_id, &[], window),
    }
}

pub fn build_report_with(
    owner_id: Uuid,
    records: &[AmountedInterval],
    window: &ReportWindow,
    policy: InvalidRecordPolicy,
) -> Result<AllocationResult, AllocationError> {
    let kept = screen_records(records, policy)?;
    Ok(assemble(owner_id, &kept, window))
}

fn screen_records(
    records: &[AmountedInterval],
    policy: InvalidRecordPolicy,
) -> Result<Vec<AmountedInterval>, AllocationError> {
    let mut kept = Vec::with_capacity(records.len());

    for record in records {
        if record.interval.end <= record.interval.start {
            match policy {
                InvalidRecordPolicy::Skip => {
                    warn!(
                        "Skipping interval with end {} not after start {} for owner {}",
                        record.interval.end, record.interval.start, record.interval.owner_id
                    );
                    continue;
                }
                InvalidRecordPolicy::Reject => {
                    return Err(AllocationError::InvalidInterval {
                        start: record.interval.start,
                        end: record.interval.end,
                    });
                }
            }
        }
        kept.push(*record);
    }

    Ok(kept)
}

fn assemble(
    owner_id: Uuid,
    records: &[AmountedInterval],
    window: &ReportWindow,
) -> AllocationResult {
    let intervals: Vec<TimeInterval> = records.iter().map(|r| r.interval).collect();

    let occupied_days = allocation::occupied_days(&intervals, window);
    let total_available_days = allocation::available_days(window);

    let allocated_amount: f64 = records
        .iter()
        .map(|r| allocation::prorated_amount(r, window))
        .sum();

    let occupancy_rate = if total_available_days > 0 {
        (occupied_days as f64 / total_available_days as f64 * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    AllocationResult {
        owner_id,
        total_available_days,
        occupied_days,
        occupancy_rate,
        allocated_amount,
    }
}

/// Full per-property breakdown across a portfolio: one `AllocationResult`
/// per owner, sorted for presentation and paginated per the query.
pub fn build_property_breakdown(
    records_by_property: &HashMap<Uuid, Vec<AmountedInterval>>,
    q: &ReportRangeQuery,
    target: Option<String>,
) -> Result<OccupancyReportResponseDto> {
    q.validate()?;
    let window = resolve_report_window(q);

    let mut rows: Vec<AllocationResult> = records_by_property
        .iter()
        .filter(|(owner_id, _)| match &q.property_ids {
            Some(ids) => ids.contains(*owner_id),
            None => true,
        })
        .map(|(owner_id, records)| build_report(*owner_id, records, &window))
        .collect();

    sort_rows(&mut rows, q.sort.as_deref());

    let property_count = rows.len();
    let offset = q.offset.unwrap_or(0);
    let limit = q.limit.unwrap_or(property_count);
    let properties: Vec<AllocationResult> = rows.into_iter().skip(offset).take(limit).collect();

    Ok(OccupancyReportResponseDto {
        start: window.start,
        end: window.end,
        target,
        property_count,
        properties,
    })
}

fn sort_rows(rows: &mut [AllocationResult], sort: Option<&str>) {
    match sort {
        Some("occupancy") => rows.sort_by(|a, b| {
            b.occupancy_rate
                .partial_cmp(&a.occupancy_rate)
                .unwrap_or(Ordering::Equal)
        }),
        _ => rows.sort_by(|a, b| {
            b.allocated_amount
                .partial_cmp(&a.allocated_amount)
                .unwrap_or(Ordering::Equal)
        }),
    }
}
