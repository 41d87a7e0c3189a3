//! Application services.

mod area_calculator;
mod report_service;

pub use area_calculator::{AreaCalculator, ShapeSummary, total_area, total_volume};
pub use report_service::ReportService;
