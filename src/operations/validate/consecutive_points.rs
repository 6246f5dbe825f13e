use super::{RuleKind, Violation, ViolationPayload};
use crate::math::{points_equal_3d, Point3};

/// `GE_R_CONSECUTIVE_POINTS_SAME`: no point may equal its predecessor.
///
/// The scan never wraps from the last point to the first, so the closing
/// repeat is invisible to it. Only the first offending pair is reported.
#[must_use]
pub fn check_consecutive_points(points: &[Point3], tolerance: f64) -> Option<Violation> {
    let (index, pair) = points
        .windows(2)
        .enumerate()
        .find(|(_, pair)| points_equal_3d(&pair[0], &pair[1], tolerance))?;

    Some(Violation::new(
        RuleKind::ConsecutivePointsSame,
        ViolationPayload::ConsecutivePair {
            index,
            first: pair[0],
            second: pair[1],
        },
    ))
}
