//! Ring validation against the QIE ring rules.
//!
//! Each check is a pure function over the ring points. [`ValidateRing`] runs
//! them in [`RuleKind::DEFAULT_CHECKS`] order and collects the failures.

mod consecutive_points;
mod not_closed;
mod rule;
mod self_intersection;
mod too_few_points;
mod validate_ring;
mod validate_rings;
mod violation;

pub use consecutive_points::check_consecutive_points;
pub use not_closed::check_not_closed;
pub use rule::RuleKind;
pub use self_intersection::check_self_intersection;
pub use too_few_points::check_too_few_points;
pub use validate_ring::ValidateRing;
pub use validate_rings::ValidateRings;
pub use violation::{Violation, ViolationPayload};

use crate::error::Result;
use crate::extraction::{GmlExtractor, PointExtractor};
use crate::math::Point3;

/// Parameters controlling point comparison during validation.
///
/// Both tolerances default to `0.0`, meaning exact floating-point comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ValidationParams {
    /// Maximum per-coordinate difference for two points to count as equal in
    /// the duplicate and closure checks, and for consecutive projected points
    /// to merge before the intersection scan.
    pub tolerance: f64,
    /// Parameter slack for segment intersection. Also the `|sin|` below which
    /// two edges count as parallel.
    pub intersection_tolerance: f64,
}

/// Validates a ring with default parameters and the plane projector.
///
/// # Errors
///
/// Returns an error if a check cannot run, e.g. the ring has a non-finite
/// coordinate.
pub fn validate_ring(points: &[Point3]) -> Result<Vec<Violation>> {
    ValidateRing::new(points).execute()
}

/// Extracts the ring from a GML `LinearRing` and validates it.
///
/// # Errors
///
/// Returns an extraction error if the XML holds no readable `posList`, or any
/// error [`validate_ring`] can return.
pub fn validate_gml_ring(xml: &str) -> Result<Vec<Violation>> {
    let points = GmlExtractor.extract(xml)?;
    validate_ring(&points)
}
