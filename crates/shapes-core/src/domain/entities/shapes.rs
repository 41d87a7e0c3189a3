//! Shape entities.
//!
//! One struct per [`ShapeKind`], each owning exactly the dimensions it
//! needs, plus the closed [`Shape`] sum type that the rest of the crate
//! passes around.
//!
//! Shapes are immutable. "Resizing" (`with_width`, `with_side`) builds a
//! new validated value and leaves every other dimension alone, so a
//! rectangle never changes its height because its width was set.
//!
//! Constructors also reject dimensions whose area (or volume) overflows
//! `f64`, so every constructed shape has finite measures.

use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use crate::domain::{
    capabilities::{Area, Volume},
    error::DomainError,
    value_objects::{Dimension, ShapeKind},
};

/// Fails with `InvalidDimension` when a derived measure is not finite.
fn ensure_finite(
    measure: f64,
    shape: ShapeKind,
    dimension: &'static str,
    value: f64,
) -> Result<(), DomainError> {
    if measure.is_finite() {
        Ok(())
    } else {
        Err(DomainError::InvalidDimension {
            shape: shape.to_string(),
            dimension,
            value,
        })
    }
}

// ── Square ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Square {
    side: Dimension,
}

impl Square {
    pub fn new(side: f64) -> Result<Self, DomainError> {
        let square = Self {
            side: Dimension::new(ShapeKind::Square, "side", side)?,
        };
        ensure_finite(square.area(), ShapeKind::Square, "side", side)?;
        Ok(square)
    }

    pub fn side(&self) -> f64 {
        self.side.get()
    }

    pub fn with_side(self, side: f64) -> Result<Self, DomainError> {
        Self::new(side)
    }
}

impl Area for Square {
    fn area(&self) -> f64 {
        self.side() * self.side()
    }
}

// ── Circle ────────────────────────────────────────────────────────────────────

/// A circle measured by its radius.
///
/// Use [`Circle::from_diameter`] when the caller holds a diameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    radius: Dimension,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, DomainError> {
        let circle = Self {
            radius: Dimension::new(ShapeKind::Circle, "radius", radius)?,
        };
        ensure_finite(circle.area(), ShapeKind::Circle, "radius", radius)?;
        Ok(circle)
    }

    /// Errors name the diameter, not the derived radius.
    pub fn from_diameter(diameter: f64) -> Result<Self, DomainError> {
        Dimension::new(ShapeKind::Circle, "diameter", diameter)?;
        Self::new(diameter / 2.0).map_err(|_| DomainError::InvalidDimension {
            shape: ShapeKind::Circle.to_string(),
            dimension: "diameter",
            value: diameter,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius.get()
    }

    pub fn diameter(&self) -> f64 {
        self.radius() * 2.0
    }
}

impl Area for Circle {
    fn area(&self) -> f64 {
        PI * self.radius() * self.radius()
    }
}

// ── EquilateralTriangle ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquilateralTriangle {
    side: Dimension,
}

impl EquilateralTriangle {
    pub fn new(side: f64) -> Result<Self, DomainError> {
        let triangle = Self {
            side: Dimension::new(ShapeKind::EquilateralTriangle, "side", side)?,
        };
        ensure_finite(triangle.area(), ShapeKind::EquilateralTriangle, "side", side)?;
        Ok(triangle)
    }

    pub fn side(&self) -> f64 {
        self.side.get()
    }
}

impl Area for EquilateralTriangle {
    fn area(&self) -> f64 {
        (3f64.sqrt() / 4.0) * self.side() * self.side()
    }
}

// ── Rectangle ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    height: Dimension,
    width: Dimension,
}

impl Rectangle {
    /// An overflowing area is blamed on the larger dimension.
    pub fn new(height: f64, width: f64) -> Result<Self, DomainError> {
        let rectangle = Self {
            height: Dimension::new(ShapeKind::Rectangle, "height", height)?,
            width: Dimension::new(ShapeKind::Rectangle, "width", width)?,
        };
        let (dimension, value) = if height >= width {
            ("height", height)
        } else {
            ("width", width)
        };
        ensure_finite(rectangle.area(), ShapeKind::Rectangle, dimension, value)?;
        Ok(rectangle)
    }

    pub fn height(&self) -> f64 {
        self.height.get()
    }

    pub fn width(&self) -> f64 {
        self.width.get()
    }

    /// Same rectangle with a new width; the height is untouched.
    pub fn with_width(self, width: f64) -> Result<Self, DomainError> {
        Self::new(self.height(), width)
    }

    pub fn is_square(&self) -> bool {
        self.height == self.width
    }
}

impl Area for Rectangle {
    fn area(&self) -> f64 {
        self.height() * self.width()
    }
}

// ── Cube ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cube {
    side: Dimension,
}

impl Cube {
    /// The volume overflows first, so it is the one checked.
    pub fn new(side: f64) -> Result<Self, DomainError> {
        let cube = Self {
            side: Dimension::new(ShapeKind::Cube, "side", side)?,
        };
        ensure_finite(cube.volume(), ShapeKind::Cube, "side", side)?;
        Ok(cube)
    }

    pub fn side(&self) -> f64 {
        self.side.get()
    }
}

/// Surface area of all six faces.
impl Area for Cube {
    fn area(&self) -> f64 {
        6.0 * self.side() * self.side()
    }
}

impl Volume for Cube {
    fn volume(&self) -> f64 {
        self.side() * self.side() * self.side()
    }
}

// ── Shape ─────────────────────────────────────────────────────────────────────

/// Any supported shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Shape {
    Square(Square),
    Circle(Circle),
    EquilateralTriangle(EquilateralTriangle),
    Rectangle(Rectangle),
    Cube(Cube),
}

impl Shape {
    pub fn square(side: f64) -> Result<Self, DomainError> {
        Square::new(side).map(Self::Square)
    }

    pub fn circle(radius: f64) -> Result<Self, DomainError> {
        Circle::new(radius).map(Self::Circle)
    }

    pub fn equilateral_triangle(side: f64) -> Result<Self, DomainError> {
        EquilateralTriangle::new(side).map(Self::EquilateralTriangle)
    }

    pub fn rectangle(height: f64, width: f64) -> Result<Self, DomainError> {
        Rectangle::new(height, width).map(Self::Rectangle)
    }

    pub fn cube(side: f64) -> Result<Self, DomainError> {
        Cube::new(side).map(Self::Cube)
    }

    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Square(_) => ShapeKind::Square,
            Self::Circle(_) => ShapeKind::Circle,
            Self::EquilateralTriangle(_) => ShapeKind::EquilateralTriangle,
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Cube(_) => ShapeKind::Cube,
        }
    }

    /// Volume for solids, `None` for flat shapes.
    pub fn volume(&self) -> Option<f64> {
        match self {
            Self::Cube(c) => Some(c.volume()),
            _ => None,
        }
    }
}

impl Area for Shape {
    fn area(&self) -> f64 {
        match self {
            Self::Square(s) => s.area(),
            Self::Circle(c) => c.area(),
            Self::EquilateralTriangle(t) => t.area(),
            Self::Rectangle(r) => r.area(),
            Self::Cube(c) => c.area(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Square(s) => write!(f, "square(side={})", s.side),
            Self::Circle(c) => write!(f, "circle(radius={})", c.radius),
            Self::EquilateralTriangle(t) => write!(f, "equilateral-triangle(side={})", t.side),
            Self::Rectangle(r) => write!(f, "rectangle(height={}, width={})", r.height, r.width),
            Self::Cube(c) => write!(f, "cube(side={})", c.side),
        }
    }
}

impl From<Square> for Shape {
    fn from(value: Square) -> Self {
        Self::Square(value)
    }
}

impl From<Circle> for Shape {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

impl From<EquilateralTriangle> for Shape {
    fn from(value: EquilateralTriangle) -> Self {
        Self::EquilateralTriangle(value)
    }
}

impl From<Rectangle> for Shape {
    fn from(value: Rectangle) -> Self {
        Self::Rectangle(value)
    }
}

impl From<Cube> for Shape {
    fn from(value: Cube) -> Self {
        Self::Cube(value)
    }
}
