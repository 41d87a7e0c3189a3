//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `shapes-adapters` crate provides implementations.

use crate::domain::{MessageFormat, Shape};
use crate::error::ShapesResult;

/// Port for rendering a total area.
///
/// Implemented by:
/// - `shapes_adapters::messenger::TextMessage`
/// - `shapes_adapters::messenger::JsonMessage`
/// - `shapes_adapters::messenger::HtmlMessage`
///
/// Services depend on this trait only, so adding a format never touches
/// the calculator.
#[cfg_attr(test, mockall::automock)]
pub trait Messenger: Send + Sync {
    /// Which format this messenger produces.
    fn format(&self) -> MessageFormat;

    /// Render `total` into this messenger's template.
    fn render(&self, total: f64) -> String;
}

/// Port for obtaining shapes.
///
/// Implemented by:
/// - `shapes_adapters::shape_source::BuiltinSource` (demo shape sets)
/// - `shapes_adapters::shape_source::FileShapeSource` (TOML / JSON files)
#[cfg_attr(test, mockall::automock)]
pub trait ShapeSource: Send + Sync {
    /// Human-readable origin, used in logs and error messages.
    fn describe(&self) -> String;

    /// Load every shape, in order.
    fn load(&self) -> ShapesResult<Vec<Shape>>;
}
