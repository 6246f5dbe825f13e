//! Flattening of 3D rings onto a plane for 2D intersection testing.
//!
//! A projector never checks planarity. It maps every input point to exactly
//! one output point, keeping order, so index `i` of the output corresponds to
//! index `i` of the input.

mod axis_drop;
mod plane_projector;

pub use axis_drop::{Axis, AxisDropProjector};
pub use plane_projector::PlaneProjector;

use crate::error::{ProjectionError, Result};
use crate::math::{Point2, Point3};

/// Maps a 3D point sequence to a 2D point sequence of equal length.
pub trait Projector {
    /// Projects `points` onto a plane of the projector's choosing.
    ///
    /// # Errors
    ///
    /// Returns a [`ProjectionError`] if the points cannot be projected, for
    /// example because a coordinate is NaN or infinite.
    fn project(&self, points: &[Point3]) -> Result<Vec<Point2>>;
}

impl<P: Projector + ?Sized> Projector for &P {
    fn project(&self, points: &[Point3]) -> Result<Vec<Point2>> {
        (**self).project(points)
    }
}

/// Rejects points with NaN or infinite coordinates.
///
/// # Errors
///
/// Returns [`ProjectionError::NonFiniteCoordinate`] naming the first offending
/// point.
pub fn ensure_finite(points: &[Point3]) -> Result<()> {
    match points
        .iter()
        .position(|pt| !(pt.x.is_finite() && pt.y.is_finite() && pt.z.is_finite()))
    {
        Some(index) => Err(ProjectionError::NonFiniteCoordinate { index }.into()),
        None => Ok(()),
    }
}
