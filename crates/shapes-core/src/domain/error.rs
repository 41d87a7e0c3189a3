// ============================================================================
// domain/error.rs - SHAPE DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::ShapeKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried through the application layer unchanged)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error(
        "invalid {dimension} for {shape}: {value} (must be greater than zero, with a finite area)"
    )]
    InvalidDimension {
        shape: String,
        dimension: &'static str,
        value: f64,
    },

    #[error("{kind} requires a '{dimension}' dimension")]
    MissingDimension {
        kind: ShapeKind,
        dimension: &'static str,
    },

    #[error("circle takes either a radius or a diameter, not both")]
    ConflictingDimensions,

    // ========================================================================
    // Unknown Kinds
    // ========================================================================
    #[error("can't compute area of unknown shape '{0}'")]
    UnknownShapeKind(String),

    #[error("unknown message format '{0}'")]
    UnknownMessageFormat(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDimension { dimension, .. } => vec![
                format!("Use a positive {} small enough for a finite area", dimension),
                "Example: shapes area square --side 100".into(),
            ],
            Self::MissingDimension { kind, dimension } => vec![
                format!("{} is measured by: {}", kind, kind.dimensions().join(", ")),
                format!("Add --{} <VALUE>", dimension),
            ],
            Self::ConflictingDimensions => vec![
                "Pass --radius or --diameter, not both".into(),
            ],
            Self::UnknownShapeKind(_) => {
                let mut suggestions = vec!["Supported shapes:".to_string()];
                suggestions.extend(ShapeKind::ALL.iter().map(|k| format!("  • {k}")));
                suggestions
            }
            Self::UnknownMessageFormat(_) => vec![
                "Supported formats: text, json, html".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDimension { .. }
            | Self::MissingDimension { .. }
            | Self::ConflictingDimensions => ErrorCategory::Validation,
            Self::UnknownShapeKind(_) | Self::UnknownMessageFormat(_) => {
                ErrorCategory::UnknownKind
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    UnknownKind,
}
