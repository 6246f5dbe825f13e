use crate::error::{ProjectionError, Result};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};

/// An infinite plane in 3D space with an orthonormal `(u, v)` frame.
///
/// Parametric form: `P(u, v) = origin + u * u_dir + v * v_dir`.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    normal: Vector3,
}

impl Plane {
    /// Creates a plane from an origin and a normal vector.
    ///
    /// The U and V directions are computed automatically.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::DegenerateNormal`] if the normal is
    /// zero-length or not finite.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if !len.is_finite() || len < TOLERANCE {
            return Err(ProjectionError::DegenerateNormal.into());
        }
        let normal = normal / len;

        // Choose a reference vector not parallel to the normal
        let reference = if normal.x.abs() < 0.9 {
            Vector3::x()
        } else {
            Vector3::y()
        };

        let u_dir = normal.cross(&reference).normalize();
        let v_dir = normal.cross(&u_dir);

        Ok(Self {
            origin,
            u_dir,
            v_dir,
            normal,
        })
    }

    /// Creates a plane containing the line through `origin` along `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::DegenerateNormal`] if `direction` is
    /// zero-length.
    pub fn containing_line(origin: Point3, direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if !len.is_finite() || len < TOLERANCE {
            return Err(ProjectionError::DegenerateNormal.into());
        }
        let dir = direction / len;
        let reference = if dir.x.abs() < 0.9 {
            Vector3::x()
        } else {
            Vector3::y()
        };
        Self::from_normal(origin, dir.cross(&reference))
    }

    /// The XY plane through `origin`, with `u = x` and `v = y`.
    #[must_use]
    pub fn xy(origin: Point3) -> Self {
        Self {
            origin,
            u_dir: Vector3::x(),
            v_dir: Vector3::y(),
            normal: Vector3::z(),
        }
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the U direction vector.
    #[must_use]
    pub fn u_dir(&self) -> &Vector3 {
        &self.u_dir
    }

    /// Returns the V direction vector.
    #[must_use]
    pub fn v_dir(&self) -> &Vector3 {
        &self.v_dir
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Orthogonally projects a 3D point into the plane's `(u, v)` frame.
    #[must_use]
    pub fn project(&self, point: &Point3) -> Point2 {
        let diff = point - self.origin;
        Point2::new(diff.dot(&self.u_dir), diff.dot(&self.v_dir))
    }

    /// Maps `(u, v)` plane coordinates back to 3D.
    #[must_use]
    pub fn evaluate(&self, uv: &Point2) -> Point3 {
        self.origin + self.u_dir * uv.x + self.v_dir * uv.y
    }
}
