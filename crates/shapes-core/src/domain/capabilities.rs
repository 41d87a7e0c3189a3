//! Shape capabilities.
//!
//! Each capability is its own trait so that a shape only carries the
//! operations that make sense for it: every shape has an [`Area`], only
//! solids have a [`Volume`]. Aggregation in the application layer is
//! generic over these traits, not over concrete shapes.

/// Anything with a surface area.
///
/// Implementations must return a finite, non-negative number for every
/// value that can be constructed.
pub trait Area {
    fn area(&self) -> f64;
}

/// Anything that encloses a volume.
pub trait Volume {
    fn volume(&self) -> f64;
}

impl<T: Area + ?Sized> Area for &T {
    fn area(&self) -> f64 {
        (**self).area()
    }
}

impl<T: Area + ?Sized> Area for Box<T> {
    fn area(&self) -> f64 {
        (**self).area()
    }
}

impl<T: Volume + ?Sized> Volume for &T {
    fn volume(&self) -> f64 {
        (**self).volume()
    }
}

impl<T: Volume + ?Sized> Volume for Box<T> {
    fn volume(&self) -> f64 {
        (**self).volume()
    }
}
