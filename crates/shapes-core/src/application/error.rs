//! Application layer errors.
//!
//! These errors represent failures in orchestration, not geometry.
//! Geometry errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// No built-in shape set with this name.
    #[error("Shape set not found: {name}")]
    SetNotFound { name: String },

    /// A shape source could not be read.
    #[error("Failed to load shapes from {source_name}: {reason}")]
    LoadFailed { source_name: String, reason: String },

    /// A shape source was read but its contents are not a shape list.
    #[error("Invalid shape file {source_name}: {reason}")]
    InvalidShapeFile { source_name: String, reason: String },

    /// Every shape is valid but their sum overflows.
    #[error("Total of {count} shapes is too large to represent")]
    TotalOutOfRange { count: usize },

    /// A total could not be rendered.
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SetNotFound { name } => vec![
                format!("'{}' is not a built-in shape set", name),
                "Try: shapes list to see available sets".into(),
                "Or load your own shapes with --file shapes.toml".into(),
            ],
            Self::LoadFailed { source_name, .. } => vec![
                format!("Check that {} exists and is readable", source_name),
            ],
            Self::InvalidShapeFile { .. } => vec![
                "Shape files must end in .toml or .json".into(),
                "Each entry needs a 'kind' plus its dimensions".into(),
                "Example (TOML): [[shapes]] kind = \"square\" side = 100".into(),
            ],
            Self::TotalOutOfRange { .. } => vec![
                "Use smaller dimensions or split the shapes into several files".into(),
            ],
            Self::RenderingFailed { .. } => vec!["Check the shape dimensions".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SetNotFound { .. } => ErrorCategory::NotFound,
            Self::LoadFailed { .. } => ErrorCategory::NotFound,
            Self::InvalidShapeFile { .. } | Self::TotalOutOfRange { .. } => {
                ErrorCategory::Validation
            }
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}
