//! Area Calculator - sums areas (and volumes) over a shape collection.
//!
//! The free functions [`total_area`] and [`total_volume`] are generic over
//! the capability traits, so they work the same for `&[Shape]`,
//! `&[Box<dyn Area>]`, or any other iterator of implementors.
//! [`AreaCalculator`] wraps a [`ShapeSource`] for the CLI use case.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::ShapeSource},
    domain::{Area, Shape, Volume},
    error::ShapesResult,
};

/// Sum of the areas of `shapes`. Empty input yields `0.0`.
pub fn total_area<I>(shapes: I) -> f64
where
    I: IntoIterator,
    I::Item: Area,
{
    // Folding from +0.0 keeps an empty total printable as "0".
    shapes.into_iter().fold(0.0, |total, shape| total + shape.area())
}

/// Sum of the volumes of `solids`. Empty input yields `0.0`.
pub fn total_volume<I>(solids: I) -> f64
where
    I: IntoIterator,
    I::Item: Volume,
{
    solids.into_iter().fold(0.0, |total, solid| total + solid.volume())
}

/// Aggregated totals for one shape collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeSummary {
    pub count: usize,
    pub total_area: f64,
    /// Sum over the solids only; `0.0` when there are none.
    pub total_volume: f64,
}

impl ShapeSummary {
    pub fn of(shapes: &[Shape]) -> Self {
        Self {
            count: shapes.len(),
            total_area: total_area(shapes),
            total_volume: shapes
                .iter()
                .filter_map(Shape::volume)
                .fold(0.0, |total, volume| total + volume),
        }
    }
}

/// Service computing totals for the shapes a [`ShapeSource`] provides.
pub struct AreaCalculator {
    source: Box<dyn ShapeSource>,
}

impl AreaCalculator {
    pub fn new(source: Box<dyn ShapeSource>) -> Self {
        Self { source }
    }

    /// Where the shapes come from.
    pub fn describe(&self) -> String {
        self.source.describe()
    }

    /// Fails with `TotalOutOfRange` when the sum overflows.
    #[instrument(skip_all, fields(source = %self.source.describe()))]
    pub fn total_area(&self) -> ShapesResult<f64> {
        let shapes = self.source.load()?;
        let total = total_area(&shapes);
        debug!(count = shapes.len(), total, "Aggregated area");
        if !total.is_finite() {
            return Err(ApplicationError::TotalOutOfRange {
                count: shapes.len(),
            }
            .into());
        }
        Ok(total)
    }

    #[instrument(skip_all, fields(source = %self.source.describe()))]
    pub fn summarize(&self) -> ShapesResult<ShapeSummary> {
        let shapes = self.source.load()?;
        let summary = ShapeSummary::of(&shapes);
        debug!(?summary, "Summarized shapes");
        if !(summary.total_area.is_finite() && summary.total_volume.is_finite()) {
            return Err(ApplicationError::TotalOutOfRange {
                count: summary.count,
            }
            .into());
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        application::{ApplicationError, ports::output::MockShapeSource},
        domain::{Cube, Square},
        error::ShapesError,
    };

    fn demo_shapes() -> Vec<Shape> {
        vec![
            Shape::square(100.0).unwrap(),
            Shape::circle(50.0).unwrap(),
            Shape::square(200.0).unwrap(),
            Shape::equilateral_triangle(100.0).unwrap(),
        ]
    }

    fn mock_source(shapes: Vec<Shape>) -> Box<MockShapeSource> {
        let mut source = MockShapeSource::new();
        source.expect_describe().return_const("mock".to_string());
        source.expect_load().returning(move || Ok(shapes.clone()));
        Box::new(source)
    }

    #[test]
    fn empty_total_is_positive_zero() {
        let total = total_area(Vec::<Shape>::new());
        assert_eq!(total, 0.0);
        assert!(total.is_sign_positive());
        assert_eq!(total.to_string(), "0");
    }

    #[test]
    fn total_is_sum_of_individual_areas() {
        let shapes = demo_shapes();
        let expected: f64 = 10_000.0 + 7_853.981_633_974_483 + 40_000.0 + 4_330.127_018_922_193;
        assert!((total_area(&shapes) - expected).abs() < 1e-9);
    }

    #[test]
    fn works_with_trait_objects() {
        let boxed: Vec<Box<dyn Area>> = vec![
            Box::new(Square::new(2.0).unwrap()),
            Box::new(Cube::new(1.0).unwrap()),
        ];
        assert_eq!(total_area(&boxed), 10.0);
    }

    #[test]
    fn total_volume_over_solids() {
        let cubes = [Cube::new(2.0).unwrap(), Cube::new(3.0).unwrap()];
        assert_eq!(total_volume(&cubes), 35.0);
        assert_eq!(total_volume(Vec::<Cube>::new()), 0.0);
    }

    #[test]
    fn summary_counts_only_solid_volume() {
        let shapes = vec![Shape::cube(100.0).unwrap(), Shape::square(100.0).unwrap()];
        let summary = ShapeSummary::of(&shapes);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_area, 70_000.0);
        assert_eq!(summary.total_volume, 1_000_000.0);
    }

    #[test]
    fn calculator_uses_source() {
        let calculator = AreaCalculator::new(mock_source(vec![Shape::square(3.0).unwrap()]));
        assert_eq!(calculator.total_area().unwrap(), 9.0);
        assert_eq!(calculator.describe(), "mock");
    }

    #[test]
    fn calculator_propagates_source_errors() {
        let mut source = MockShapeSource::new();
        source.expect_describe().return_const("broken".to_string());
        source.expect_load().returning(|| {
            Err(ApplicationError::SetNotFound {
                name: "broken".into(),
            }
            .into())
        });

        let calculator = AreaCalculator::new(Box::new(source));
        assert!(matches!(
            calculator.summarize(),
            Err(ShapesError::Application(ApplicationError::SetNotFound { .. }))
        ));
    }

    #[test]
    fn overflowing_sum_is_a_validation_error() {
        let huge = Shape::square(1e154).unwrap();
        let calculator = AreaCalculator::new(mock_source(vec![huge, huge]));

        let err = calculator.summarize().unwrap_err();
        assert_eq!(
            err,
            ShapesError::Application(ApplicationError::TotalOutOfRange { count: 2 })
        );
        assert_eq!(err.category(), crate::error::ErrorCategory::Validation);
        assert!(calculator.total_area().is_err());
    }

    fn shape_strategy() -> impl Strategy<Value = Shape> {
        prop_oneof![
            (1e-3f64..1e3).prop_map(|s| Shape::square(s).unwrap()),
            (1e-3f64..1e3).prop_map(|r| Shape::circle(r).unwrap()),
            (1e-3f64..1e3).prop_map(|s| Shape::equilateral_triangle(s).unwrap()),
            (1e-3f64..1e3, 1e-3f64..1e3).prop_map(|(h, w)| Shape::rectangle(h, w).unwrap()),
            (1e-3f64..1e3).prop_map(|s| Shape::cube(s).unwrap()),
        ]
    }

    proptest! {
        #[test]
        fn prop_total_is_order_independent(
            (original, shuffled) in prop::collection::vec(shape_strategy(), 0..12)
                .prop_flat_map(|shapes| (Just(shapes.clone()), Just(shapes).prop_shuffle()))
        ) {
            let a = total_area(&original);
            let b = total_area(&shuffled);
            prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0));
        }

        #[test]
        fn prop_total_matches_individual_sum(shapes in prop::collection::vec(shape_strategy(), 0..12)) {
            let mut expected = 0.0;
            for shape in &shapes {
                expected += shape.area();
            }
            prop_assert!((total_area(&shapes) - expected).abs() <= 1e-9 * expected.max(1.0));
        }
    }
}
