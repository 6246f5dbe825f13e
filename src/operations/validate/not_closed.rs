use super::{RuleKind, Violation, ViolationPayload};
use crate::math::{points_equal_3d, Point3};

/// `GE_R_NOT_CLOSED`: the first and last points must be identical.
///
/// An empty ring fails with an empty payload. A single point is its own first
/// and last point and passes.
#[must_use]
pub fn check_not_closed(points: &[Point3], tolerance: f64) -> Option<Violation> {
    let payload = match (points.first(), points.last()) {
        (Some(first), Some(last)) if points_equal_3d(first, last, tolerance) => return None,
        (Some(first), Some(last)) => vec![*first, *last],
        _ => Vec::new(),
    };
    Some(Violation::new(
        RuleKind::NotClosed,
        ViolationPayload::Points(payload),
    ))
}
