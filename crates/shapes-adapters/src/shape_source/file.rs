//! Shape source backed by a TOML or JSON file.
//!
//! # `shapes.toml`
//!
//! ```toml
//! [[shapes]]
//! kind = "square"
//! side = 100
//!
//! [[shapes]]
//! kind   = "circle"
//! radius = 50          # or: diameter = 100
//!
//! [[shapes]]
//! kind   = "rectangle"
//! height = 100
//! width  = 200
//! ```
//!
//! # `shapes.json`
//!
//! ```json
//! { "shapes": [ { "kind": "cube", "side": 3 } ] }
//! ```
//!
//! The format is chosen by file extension.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use shapes_core::{
    application::{ApplicationError, ports::ShapeSource},
    domain::{Shape, ShapeRecord},
    error::{ShapesError, ShapesResult},
};

/// Deserialised representation of a shape file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShapeFile {
    #[serde(default)]
    pub shapes: Vec<ShapeRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Loads shapes from a file on disk.
#[derive(Debug, Clone)]
pub struct FileShapeSource {
    path: PathBuf,
}

impl FileShapeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }

    fn invalid(&self, reason: impl Into<String>) -> ShapesError {
        ApplicationError::InvalidShapeFile {
            source_name: self.source_name(),
            reason: reason.into(),
        }
        .into()
    }

    fn parse(&self, format: FileFormat, contents: &str) -> ShapesResult<ShapeFile> {
        match format {
            FileFormat::Toml => toml::from_str(contents).map_err(|e| self.invalid(e.to_string())),
            FileFormat::Json => {
                serde_json::from_str(contents).map_err(|e| self.invalid(e.to_string()))
            }
        }
    }
}

impl ShapeSource for FileShapeSource {
    fn describe(&self) -> String {
        format!("file '{}'", self.path.display())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> ShapesResult<Vec<Shape>> {
        let format = FileFormat::from_path(&self.path)
            .ok_or_else(|| self.invalid("unsupported file extension (expected .toml or .json)"))?;

        let contents = fs::read_to_string(&self.path).map_err(|e| ApplicationError::LoadFailed {
            source_name: self.source_name(),
            reason: e.to_string(),
        })?;

        let file = self.parse(format, &contents)?;
        let shapes = file
            .shapes
            .iter()
            .map(|record| record.to_shape().map_err(ShapesError::from))
            .collect::<ShapesResult<Vec<_>>>()?;

        debug!(count = shapes.len(), ?format, "Loaded shape file");
        Ok(shapes)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use shapes_core::{application::total_area, domain::DomainError};
    use tempfile::{Builder, TempDir};

    use super::*;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "shapes.toml",
            r#"
                [[shapes]]
                kind = "square"
                side = 100

                [[shapes]]
                kind = "rectangle"
                height = 100
                width = 200
            "#,
        );

        let shapes = FileShapeSource::new(path).load().unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(total_area(&shapes), 30_000.0);
    }

    #[test]
    fn loads_json() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{ "shapes": [ {{ "kind": "circle", "diameter": 100 }}, {{ "kind": "cube", "side": 2 }} ] }}"#
        )
        .unwrap();

        let shapes = FileShapeSource::new(file.path()).load().unwrap();
        assert_eq!(shapes[0], Shape::circle(50.0).unwrap());
        assert_eq!(shapes[1].volume(), Some(8.0));
    }

    #[test]
    fn empty_file_is_empty_collection() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.toml", "");
        let shapes = FileShapeSource::new(path).load().unwrap();
        assert!(shapes.is_empty());
        assert_eq!(total_area(&shapes), 0.0);
    }

    #[test]
    fn missing_file_is_load_failure() {
        let dir = TempDir::new().unwrap();
        let err = FileShapeSource::new(dir.path().join("absent.toml"))
            .load()
            .unwrap_err();
        assert!(matches!(
            err,
            ShapesError::Application(ApplicationError::LoadFailed { .. })
        ));
    }

    #[test]
    fn unsupported_extension_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "shapes.yaml", "shapes: []");
        let err = FileShapeSource::new(path).load().unwrap_err();
        assert!(matches!(
            err,
            ShapesError::Application(ApplicationError::InvalidShapeFile { .. })
        ));
    }

    #[test]
    fn unknown_field_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bad.toml", "[[shapes]]\nkind = \"square\"\nedge = 1\n");
        let err = FileShapeSource::new(path).load().unwrap_err();
        assert!(matches!(
            err,
            ShapesError::Application(ApplicationError::InvalidShapeFile { .. })
        ));
    }

    #[test]
    fn unknown_kind_is_domain_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "odd.toml", "[[shapes]]\nkind = \"hexagon\"\nside = 1\n");
        let err = FileShapeSource::new(path).load().unwrap_err();
        assert_eq!(
            err,
            ShapesError::Domain(DomainError::UnknownShapeKind("hexagon".into()))
        );
    }

    #[test]
    fn negative_dimension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "neg.toml", "[[shapes]]\nkind = \"cube\"\nside = -3\n");
        let err = FileShapeSource::new(path).load().unwrap_err();
        assert!(matches!(
            err,
            ShapesError::Domain(DomainError::InvalidDimension { .. })
        ));
    }
}
