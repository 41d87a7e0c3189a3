//! Domain value objects: ShapeKind, MessageFormat, Dimension.
//!
//! # Design
//!
//! These are pure value types: `Copy`, compared by value, without identity.
//! They hold NO geometry. Area and volume formulas live on the shape
//! entities in `entities/shapes.rs`. This file's only job is to define the
//! types, their string representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add the shape struct and its `Area` impl in `entities/shapes.rs`
//! 4. Add the `Shape` arm; the compiler points at every other match

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ShapeKind ─────────────────────────────────────────────────────────────────

/// The closed set of shape kinds the calculator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    Square,
    Circle,
    EquilateralTriangle,
    Rectangle,
    Cube,
}

impl ShapeKind {
    /// Every kind, in declaration order.
    pub const ALL: [ShapeKind; 5] = [
        Self::Square,
        Self::Circle,
        Self::EquilateralTriangle,
        Self::Rectangle,
        Self::Cube,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Circle => "circle",
            Self::EquilateralTriangle => "equilateral-triangle",
            Self::Rectangle => "rectangle",
            Self::Cube => "cube",
        }
    }

    /// Whether shapes of this kind have a volume as well as an area.
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::Cube)
    }

    /// Names of the dimensions a shape of this kind is built from.
    pub const fn dimensions(self) -> &'static [&'static str] {
        match self {
            Self::Square | Self::EquilateralTriangle | Self::Cube => &["side"],
            Self::Circle => &["radius"],
            Self::Rectangle => &["height", "width"],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(Self::Square),
            "circle" => Ok(Self::Circle),
            "equilateral-triangle" | "equilateral_triangle" | "equilateraltriangle"
            | "triangle" => Ok(Self::EquilateralTriangle),
            "rectangle" | "rect" => Ok(Self::Rectangle),
            "cube" => Ok(Self::Cube),
            other => Err(DomainError::UnknownShapeKind(other.to_string())),
        }
    }
}

// ── MessageFormat ─────────────────────────────────────────────────────────────

/// Textual representation a total area can be rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    Text,
    Json,
    Html,
}

impl MessageFormat {
    pub const ALL: [MessageFormat; 3] = [Self::Text, Self::Json, Self::Html];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Html => "html",
        }
    }
}

impl fmt::Display for MessageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            other => Err(DomainError::UnknownMessageFormat(other.to_string())),
        }
    }
}

// ── Dimension ─────────────────────────────────────────────────────────────────

/// A validated length: finite and strictly positive.
///
/// Every shape stores its measurements as `Dimension`s, so a constructed
/// shape can never report a negative or NaN area.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Dimension(f64);

impl Dimension {
    /// Validate `value` as the `dimension` of a `shape`.
    ///
    /// The two names only feed the error message.
    pub fn new(shape: ShapeKind, dimension: &'static str, value: f64) -> Result<Self, DomainError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidDimension {
                shape: shape.to_string(),
                dimension,
                value,
            })
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
