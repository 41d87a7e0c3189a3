//! Application layer for solid-shapes.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (AreaCalculator, ReportService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but holds no
//! geometry itself. All formulas live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    AreaCalculator,
    ReportService,
    ShapeSummary, // DTO for aggregated totals
    total_area,
    total_volume,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Messenger, ShapeSource};

pub use error::ApplicationError;
