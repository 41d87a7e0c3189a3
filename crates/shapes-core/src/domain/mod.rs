// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for solid-shapes.
//!
//! This module contains pure geometry with no I/O. Rendering totals and
//! loading shapes are handled via ports (traits) defined in the application
//! layer.
//!
//! - **No I/O**: No filesystem, console, or environment access
//! - **Validated construction**: a `Shape` value always has positive, finite
//!   dimensions and a finite area
//! - **Immutable entities**: All domain objects are `Copy + PartialEq`
//! - **Closed kind set**: `Shape` is an enum, matched exhaustively
//!
// Public API - what the world sees
pub mod capabilities;
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use capabilities::{Area, Volume};
pub use entities::{
    Circle, Cube, EquilateralTriangle, Rectangle, Shape, ShapeRecord, Square,
};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::{Dimension, MessageFormat, ShapeKind};
