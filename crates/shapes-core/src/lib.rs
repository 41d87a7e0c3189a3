//! shapes-core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the
//! solid-shapes area calculator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           shapes-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (AreaCalculator, ReportService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: Messenger, ShapeSource)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    shapes-adapters (Infrastructure)     │
//! │ (TextMessage, JsonMessage, FileSource)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Shape, ShapeKind, Area, Volume)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shapes_core::prelude::*;
//!
//! let shapes = vec![
//!     Shape::square(100.0).unwrap(),
//!     Shape::circle(50.0).unwrap(),
//! ];
//!
//! let total = total_area(&shapes);
//! assert!((total - 17_853.981_633_974_483).abs() < 1e-9);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AreaCalculator, ReportService, ShapeSummary,
        ports::{Messenger, ShapeSource},
        total_area, total_volume,
    };
    pub use crate::domain::{
        Area, Circle, Cube, EquilateralTriangle, MessageFormat, Rectangle, Shape, ShapeKind,
        ShapeRecord, Square, Volume,
    };
    pub use crate::error::{ShapesError, ShapesResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
