use tracing::trace;

use super::{ensure_finite, Projector};
use crate::error::Result;
use crate::geometry::Plane;
use crate::math::polygon_3d::{farthest_offset, newell_normal, widest_triangle_normal};
use crate::math::{Point2, Point3, TOLERANCE};

/// Projects onto the best-fit plane of the ring.
///
/// The plane normal comes from Newell's method. Loops whose signed area
/// cancels out (a bowtie, a back-and-forth line) fall back to the widest
/// triangle through the first point, then to a plane containing the points'
/// common line, then to the XY plane when every point coincides. The plane
/// origin is the first point.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaneProjector;

impl PlaneProjector {
    /// Creates a new `PlaneProjector`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Fits the projection plane for `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is not finite.
    pub fn fit_plane(&self, points: &[Point3]) -> Result<Plane> {
        ensure_finite(points)?;

        let Some(origin) = points.first().copied() else {
            return Ok(Plane::xy(Point3::origin()));
        };
        let Some(far) = farthest_offset(points) else {
            trace!("all points coincide, projecting onto XY");
            return Ok(Plane::xy(origin));
        };
        // Normals scale with area, so compare against the squared extent and
        // hand unit vectors to the plane constructors.
        let threshold = TOLERANCE * far.norm_squared();

        let newell = newell_normal(points);
        if newell.norm() > threshold {
            return Plane::from_normal(origin, newell.normalize());
        }

        let widest = widest_triangle_normal(points);
        if widest.norm() > threshold {
            trace!("newell normal degenerate, using widest triangle");
            return Plane::from_normal(origin, widest.normalize());
        }

        trace!("points are collinear, projecting onto a plane containing them");
        Plane::containing_line(origin, far.normalize())
    }
}

impl Projector for PlaneProjector {
    fn project(&self, points: &[Point3]) -> Result<Vec<Point2>> {
        let plane = self.fit_plane(points)?;
        Ok(points.iter().map(|pt| plane.project(pt)).collect())
    }
}
