//! Shape source adapters.

mod builtin;
mod file;

pub use builtin::BuiltinSource;
pub use file::{FileShapeSource, ShapeFile};
