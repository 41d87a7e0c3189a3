//! Infrastructure adapters for solid-shapes.
//!
//! This crate implements the ports defined in `shapes-core::application::ports`.
//! It contains the output templates and every file-format dependency.

pub mod builtin_sets;
pub mod messenger;
pub mod shape_source;

// Re-export commonly used adapters
pub use messenger::{HtmlMessage, JsonMessage, TextMessage, messenger_for};
pub use shape_source::{BuiltinSource, FileShapeSource};
