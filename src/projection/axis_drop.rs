use super::{ensure_finite, Projector};
use crate::error::Result;
use crate::math::polygon_3d::{newell_normal, widest_triangle_normal};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};

/// Coordinate axis removed by an [`AxisDropProjector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Projects by discarding the coordinate along the dominant normal axis.
///
/// Cheaper than [`PlaneProjector`](super::PlaneProjector) and exact for rings
/// that already lie in an axis-aligned plane, but distorts distances on
/// sloped rings. Intersection topology is preserved either way.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisDropProjector;

impl AxisDropProjector {
    /// Creates a new `AxisDropProjector`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The axis dropped for `points`. `Z` when the ring has no usable normal.
    #[must_use]
    pub fn dominant_axis(points: &[Point3]) -> Axis {
        let mut normal = newell_normal(points);
        if normal.norm() < TOLERANCE {
            normal = widest_triangle_normal(points);
        }
        dominant(&normal)
    }
}

fn dominant(normal: &Vector3) -> Axis {
    let (x, y, z) = (normal.x.abs(), normal.y.abs(), normal.z.abs());
    if z >= x && z >= y {
        Axis::Z
    } else if x >= y {
        Axis::X
    } else {
        Axis::Y
    }
}

impl Projector for AxisDropProjector {
    fn project(&self, points: &[Point3]) -> Result<Vec<Point2>> {
        ensure_finite(points)?;
        let axis = Self::dominant_axis(points);
        Ok(points
            .iter()
            .map(|pt| match axis {
                Axis::X => Point2::new(pt.y, pt.z),
                Axis::Y => Point2::new(pt.z, pt.x),
                Axis::Z => Point2::new(pt.x, pt.y),
            })
            .collect())
    }
}
