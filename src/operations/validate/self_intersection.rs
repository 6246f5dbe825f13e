use super::{RuleKind, ValidationParams, Violation, ViolationPayload};
use crate::error::{ProjectionError, Result};
use crate::math::Point3;
use crate::operations::query::FindSelfIntersections;
use crate::projection::Projector;

/// `GE_R_SELF_INTERSECTION`: the ring, flattened by `projector`, must be a
/// simple polygon.
///
/// Planarity is neither required nor checked.
///
/// # Errors
///
/// Returns an error if the projector fails or returns a point count that does
/// not match the ring.
pub fn check_self_intersection<P: Projector + ?Sized>(
    points: &[Point3],
    projector: &P,
    params: &ValidationParams,
) -> Result<Option<Violation>> {
    let flat = projector.project(points)?;
    if flat.len() != points.len() {
        return Err(ProjectionError::LengthMismatch {
            expected: points.len(),
            actual: flat.len(),
        }
        .into());
    }

    let crossings = FindSelfIntersections::new(&flat)
        .with_tolerance(params.intersection_tolerance)
        .with_coincidence(params.tolerance)
        .execute();
    if crossings.is_empty() {
        return Ok(None);
    }
    Ok(Some(Violation::new(
        RuleKind::SelfIntersection,
        ViolationPayload::Intersections(crossings),
    )))
}
