//! Shape source backed by the built-in demo sets.

use tracing::debug;

use shapes_core::{
    application::{ApplicationError, ports::ShapeSource},
    domain::Shape,
    error::ShapesResult,
};

use crate::builtin_sets;

/// Loads one of the sets from [`builtin_sets`] by name.
#[derive(Debug, Clone)]
pub struct BuiltinSource {
    name: String,
}

impl BuiltinSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ShapeSource for BuiltinSource {
    fn describe(&self) -> String {
        format!("built-in set '{}'", self.name)
    }

    fn load(&self) -> ShapesResult<Vec<Shape>> {
        let set = builtin_sets::find(&self.name).ok_or_else(|| ApplicationError::SetNotFound {
            name: self.name.clone(),
        })?;
        let shapes = set.shapes()?;
        debug!(set = set.name, count = shapes.len(), "Loaded built-in set");
        Ok(shapes)
    }
}
