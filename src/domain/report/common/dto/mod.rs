pub mod financial_summary_dto;
pub mod occupancy_report_dto;
pub mod payroll_attribution_dto;
