//! Loosely-typed shape description.
//!
//! [`ShapeRecord`] is what comes off the wire (a shape file, CLI flags):
//! a kind *name* and whichever dimensions were supplied. Nothing is checked
//! until [`ShapeRecord::to_shape`] turns it into a validated [`Shape`].

use serde::{Deserialize, Serialize};

use crate::domain::{
    capabilities::Area,
    entities::shapes::{Circle, Shape},
    error::DomainError,
    value_objects::ShapeKind,
};

/// Raw, unvalidated shape description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShapeRecord {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl ShapeRecord {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn side(mut self, side: f64) -> Self {
        self.side = Some(side);
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn diameter(mut self, diameter: f64) -> Self {
        self.diameter = Some(diameter);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Resolve the kind name and validate the dimensions it needs.
    ///
    /// Dimensions the kind does not use are ignored.
    pub fn to_shape(&self) -> Result<Shape, DomainError> {
        let kind: ShapeKind = self.kind.parse()?;
        let require = |value: Option<f64>, dimension: &'static str| {
            value.ok_or(DomainError::MissingDimension { kind, dimension })
        };

        match kind {
            ShapeKind::Square => Shape::square(require(self.side, "side")?),
            ShapeKind::Circle => match (self.radius, self.diameter) {
                (Some(_), Some(_)) => Err(DomainError::ConflictingDimensions),
                (Some(radius), None) => Shape::circle(radius),
                (None, Some(diameter)) => Circle::from_diameter(diameter).map(Shape::Circle),
                (None, None) => Err(DomainError::MissingDimension {
                    kind,
                    dimension: "radius",
                }),
            },
            ShapeKind::EquilateralTriangle => {
                Shape::equilateral_triangle(require(self.side, "side")?)
            }
            ShapeKind::Rectangle => Shape::rectangle(
                require(self.height, "height")?,
                require(self.width, "width")?,
            ),
            ShapeKind::Cube => Shape::cube(require(self.side, "side")?),
        }
    }

    /// Area of the described shape.
    ///
    /// Fails instead of returning a value when the kind is not recognised
    /// or the dimensions are invalid.
    pub fn area(&self) -> Result<f64, DomainError> {
        self.to_shape().map(|shape| shape.area())
    }
}
