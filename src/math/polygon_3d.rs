use super::{Point3, Vector3};

/// Newell's polygon normal.
///
/// Twice the vector area of the closed loop through `points`. Works for
/// non-planar loops (it is the normal of the best-fit plane) and does not need
/// the closing point to be repeated. Zero for loops that enclose no area,
/// including self-crossing loops whose lobes cancel.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut normal = Vector3::zeros();
    if n < 3 {
        return normal;
    }
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    normal
}

/// Normal of the widest triangle anchored at the first point.
///
/// Picks the point farthest from `points[0]`, then the point maximizing the
/// cross product with that direction. Zero when all points are collinear.
#[must_use]
pub fn widest_triangle_normal(points: &[Point3]) -> Vector3 {
    let Some(far) = farthest_offset(points) else {
        return Vector3::zeros();
    };
    let origin = &points[0];

    let mut best = Vector3::zeros();
    let mut best_norm = 0.0;
    for pt in points {
        let c = far.cross(&(pt - origin));
        let norm = c.norm_squared();
        if norm > best_norm {
            best_norm = norm;
            best = c;
        }
    }
    best
}

/// Offset from `points[0]` to the farthest point, or `None` when every point
/// coincides with the first.
#[must_use]
pub fn farthest_offset(points: &[Point3]) -> Option<Vector3> {
    let origin = points.first()?;
    let mut best: Option<Vector3> = None;
    let mut best_norm = 0.0;
    for pt in &points[1..] {
        let d = pt - origin;
        let norm = d.norm_squared();
        if norm > best_norm {
            best_norm = norm;
            best = Some(d);
        }
    }
    best
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn newell_ccw_square_points_up() {
        let sq = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)];
        let n = newell_normal(&sq);
        assert_relative_eq!(n.x, 0.0);
        assert_relative_eq!(n.y, 0.0);
        assert_relative_eq!(n.z, 2.0);
    }

    #[test]
    fn newell_ignores_repeated_closing_point() {
        let open = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)];
        let closed = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 0.0, 0.0)];
        assert_relative_eq!(newell_normal(&open), newell_normal(&closed));
    }

    #[test]
    fn newell_vertical_wall() {
        let wall = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 0.0, 1.0), p(0.0, 0.0, 1.0)];
        let n = newell_normal(&wall);
        assert_relative_eq!(n.x, 0.0);
        assert!(n.y.abs() > 1.0);
        assert_relative_eq!(n.z, 0.0);
    }

    #[test]
    fn newell_bowtie_cancels() {
        let bowtie = [p(0.0, 0.0, 0.0), p(2.0, 2.0, 0.0), p(2.0, 0.0, 0.0), p(0.0, 2.0, 0.0)];
        assert_relative_eq!(newell_normal(&bowtie).norm(), 0.0);
    }

    #[test]
    fn widest_triangle_handles_bowtie() {
        let bowtie = [p(0.0, 0.0, 0.0), p(2.0, 2.0, 0.0), p(2.0, 0.0, 0.0), p(0.0, 2.0, 0.0)];
        let n = widest_triangle_normal(&bowtie);
        assert_relative_eq!(n.x, 0.0);
        assert_relative_eq!(n.y, 0.0);
        assert!(n.z.abs() > 0.0);
    }

    #[test]
    fn widest_triangle_collinear_is_zero() {
        let line = [p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(3.0, 3.0, 3.0)];
        assert_relative_eq!(widest_triangle_normal(&line).norm(), 0.0);
    }

    #[test]
    fn farthest_offset_degenerate() {
        assert!(farthest_offset(&[]).is_none());
        assert!(farthest_offset(&[p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0)]).is_none());
        let d = farthest_offset(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 3.0, 0.0)]).unwrap();
        assert_relative_eq!(d.y, 3.0);
    }
}
