pub mod intersect_2d;
pub mod polygon_3d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Tolerance below which a plane normal or direction is considered degenerate.
pub const TOLERANCE: f64 = 1e-10;

/// Coordinate-wise equality of two 3D points.
///
/// With `tolerance == 0.0` this is exact `==` on every coordinate.
#[must_use]
pub fn points_equal_3d(a: &Point3, b: &Point3, tolerance: f64) -> bool {
    if tolerance == 0.0 {
        return a == b;
    }
    (a.x - b.x).abs() <= tolerance
        && (a.y - b.y).abs() <= tolerance
        && (a.z - b.z).abs() <= tolerance
}

/// Coordinate-wise equality of two 2D points. See [`points_equal_3d`].
#[must_use]
pub fn points_equal_2d(a: &Point2, b: &Point2, tolerance: f64) -> bool {
    if tolerance == 0.0 {
        return a == b;
    }
    (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance
}

/// 2D cross product: `(ax * by - ay * bx)`.
#[inline]
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_equality_rejects_tiny_offsets() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0, 2.0, 3.0 + 1e-12);
        assert!(points_equal_3d(&a, &a, 0.0));
        assert!(!points_equal_3d(&a, &b, 0.0));
    }

    #[test]
    fn tolerant_equality_accepts_tiny_offsets() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0, 2.0, 3.0 + 1e-12);
        assert!(points_equal_3d(&a, &b, 1e-9));
        assert!(!points_equal_3d(&a, &Point3::new(1.0, 2.1, 3.0), 1e-9));
    }

    #[test]
    fn signed_zero_is_equal() {
        let a = Point2::new(0.0, -0.0);
        let b = Point2::new(-0.0, 0.0);
        assert!(points_equal_2d(&a, &b, 0.0));
    }

    #[test]
    fn cross_2d_sign() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 1.0);
        assert!(cross_2d(&x, &y) > 0.0);
        assert!(cross_2d(&y, &x) < 0.0);
    }
}
